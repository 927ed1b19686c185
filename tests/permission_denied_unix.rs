#![cfg(unix)]

use assert_fs::prelude::*;
use assert_fs::TempDir;
use file_move::{MoveError, MoveRequest, Mover, MoverOptions};
use std::fs;
use std::os::unix::fs::PermissionsExt;

fn set_mode(path: &std::path::Path, mode: u32) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(mode);
    fs::set_permissions(path, perms).unwrap();
}

/// An unreadable sub-directory fails its own listing; siblings still move.
#[test]
fn unreadable_subdirectory_fails_only_that_folder() {
    // Root bypasses permission checks and would list the directory anyway.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let temp = TempDir::new().unwrap();
    let src = temp.child("dist");
    src.create_dir_all().unwrap();
    src.child("a.js").write_str("a").unwrap();
    let locked = src.child("locked");
    locked.create_dir_all().unwrap();
    locked.child("hidden.js").write_str("h").unwrap();
    set_mode(locked.path(), 0o000);

    let dst = temp.child("out");
    let req = MoveRequest::new(src.path(), dst.path(), None).unwrap();
    let report = Mover::new(req, MoverOptions::default()).unwrap().execute();

    // Restore so the temp dir can be cleaned up.
    set_mode(locked.path(), 0o755);

    let failures = report.failures();
    assert_eq!(failures.len(), 1, "{failures:?}");
    assert!(
        matches!(&failures[0], MoveError::ListingFailed { path, .. } if path == locked.path()),
        "{failures:?}"
    );
    assert!(failures[0].to_string().to_ascii_lowercase().contains("permission denied"));

    assert_eq!(fs::read_to_string(dst.child("a.js").path()).unwrap(), "a");
    assert!(!src.child("a.js").path().exists());
    assert!(locked.child("hidden.js").path().exists());
    assert_eq!(report.files_moved(), 1);

    temp.close().unwrap();
}
