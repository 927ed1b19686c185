use file_move::{MoveRequest, Mover, MoverOptions};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run(src: &Path, dst: &Path, filter: Option<&str>) -> file_move::MoveReport {
    let req = MoveRequest::new(src, dst, filter).expect("valid request");
    Mover::new(req, MoverOptions::default())
        .expect("build mover")
        .execute()
}

#[test]
fn directory_move_creates_missing_target() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("dist");
    fs::create_dir(&src)?;
    fs::write(src.join("a.txt"), "alpha")?;
    fs::write(src.join("b.png"), [0x89u8, b'P', b'N', b'G'])?;
    let dst = td.path().join("public");

    let report = run(&src, &dst, None);

    assert!(report.outcome().succeeded, "{:?}", report.failures());
    assert!(dst.is_dir());
    assert_eq!(fs::read_to_string(dst.join("a.txt"))?, "alpha");
    assert_eq!(fs::read(dst.join("b.png"))?, vec![0x89u8, b'P', b'N', b'G']);
    assert!(!src.join("a.txt").exists());
    assert!(!src.join("b.png").exists());
    assert!(src.is_dir(), "the source directory itself is left in place");
    assert_eq!(report.files_moved(), 2);
    assert_eq!(report.dirs_created(), 1);
    Ok(())
}

#[test]
fn directory_move_into_existing_target_keeps_other_entries() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("dist");
    let dst = td.path().join("public");
    fs::create_dir(&src)?;
    fs::create_dir(&dst)?;
    fs::write(src.join("app.js"), "app")?;
    fs::write(dst.join("index.html"), "<html>")?;

    let report = run(&src, &dst, None);

    assert!(report.is_success());
    assert_eq!(report.dirs_created(), 0);
    assert!(dst.join("index.html").exists());
    assert_eq!(fs::read_to_string(dst.join("app.js"))?, "app");
    Ok(())
}

#[test]
fn nested_directories_preserve_relative_structure() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("dist");
    fs::create_dir_all(src.join("subdir/deeper"))?;
    fs::create_dir_all(src.join("empty"))?;
    fs::write(src.join("subdir/c.txt"), "charlie")?;
    fs::write(src.join("subdir/deeper/d.txt"), "delta")?;
    let dst = td.path().join("out");

    let report = run(&src, &dst, None);

    // execute() joins every nested move, so the tree is settled here.
    assert!(report.is_success(), "{:?}", report.failures());
    assert_eq!(fs::read_to_string(dst.join("subdir/c.txt"))?, "charlie");
    assert_eq!(fs::read_to_string(dst.join("subdir/deeper/d.txt"))?, "delta");
    assert!(dst.join("empty").is_dir(), "empty directories are mirrored");
    assert!(!src.join("subdir/c.txt").exists());
    assert!(src.join("subdir/deeper").is_dir(), "source directories are not removed");
    assert_eq!(report.files_moved(), 2);
    assert_eq!(report.dirs_created(), 4);
    Ok(())
}

#[test]
fn move_folder_reports_joined_outcome() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("src");
    fs::create_dir_all(src.join("x/y"))?;
    fs::write(src.join("x/y/z.bin"), "z")?;
    let dst = td.path().join("dst");

    let req = MoveRequest::new(&src, &dst, None)?;
    let mover = Mover::new(req, MoverOptions::default())?;
    let outcome = mover.move_folder(&src, &dst);

    assert!(outcome.succeeded);
    assert_eq!(outcome.error_detail, None);
    assert!(dst.join("x/y/z.bin").exists());
    Ok(())
}
