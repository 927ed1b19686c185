//! I/O error rendering.
//!
//! Turns an `io::Error` into the human-readable detail carried by `MoveError`:
//! operation, path, OS message, a hint for the common failure causes of a
//! rename/mkdir/readdir, and the raw OS code when there is one.

use std::io;
use std::path::Path;

#[cfg(unix)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
        libc::EXDEV => Some("source and target are on different devices; rename cannot cross filesystems"),
        libc::ENOENT => Some("path not found; a parent directory may be missing"),
        libc::EEXIST | libc::ENOTEMPTY => Some("target already exists"),
        libc::ENOTDIR => Some("a path component is not a directory"),
        libc::EISDIR => Some("target is a directory but the source is a file"),
        libc::EBUSY => Some("resource busy"),
        libc::ENOSPC => Some("no space left on device"),
        libc::EROFS => Some("read-only filesystem"),
        libc::ENAMETOOLONG => Some("file name or path too long"),
        libc::EMFILE => Some("process file descriptor limit reached; lower --max-concurrency"),
        libc::ENFILE => Some("system-wide file table full; lower --max-concurrency"),
        _ => None,
    }
}

#[cfg(windows)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),
        17 => Some("source and target are on different devices; rename cannot cross filesystems"),
        2 | 3 => Some("path not found; a parent directory may be missing"),
        32 => Some("sharing violation; file is in use"),
        80 | 183 => Some("target already exists"),
        112 => Some("no space left on device"),
        206 => Some("file name or path too long"),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn hint_for_code(_code: i32) -> Option<&'static str> {
    None
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; a parent directory may be missing"),
        io::ErrorKind::AlreadyExists => Some("target already exists"),
        _ => None,
    }
}

/// Render `e` as "<op> '<path>': <error> (<hint>) [os code: N]".
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{op} '{}': {e}", path.display());
    let hint = match e.raw_os_error() {
        Some(code) => hint_for_code(code),
        None => hint_for_kind(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// True when `e` is the "cross-device link" error of a rename.
#[cfg(unix)]
pub fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error() == Some(libc::EXDEV)
}

/// True when `e` is the "cross-device link" error of a rename.
#[cfg(windows)]
pub fn is_cross_device(e: &io::Error) -> bool {
    // ERROR_NOT_SAME_DEVICE
    e.raw_os_error() == Some(17)
}

#[cfg(not(any(unix, windows)))]
pub fn is_cross_device(_e: &io::Error) -> bool {
    false
}
