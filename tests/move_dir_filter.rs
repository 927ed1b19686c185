use file_move::{MoveRequest, Mover, MoverOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn filter_excludes_non_matching_files() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("dist");
    fs::create_dir(&src)?;
    fs::write(src.join("a.txt"), "alpha")?;
    fs::write(src.join("b.png"), "png")?;
    let dst = td.path().join("public");

    let req = MoveRequest::new(&src, &dst, Some(".txt"))?;
    let report = Mover::new(req, MoverOptions::default())?.execute();

    assert!(report.is_success());
    assert_eq!(fs::read_to_string(dst.join("a.txt"))?, "alpha");
    assert!(!dst.join("b.png").exists());
    assert!(src.join("b.png").exists(), "non-matching file stays at the source");
    assert_eq!(report.files_moved(), 1);
    assert_eq!(report.files_skipped(), 1);
    Ok(())
}

#[test]
fn filter_still_descends_into_directories() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("dist");
    // Directory names never match the filter but are traversed anyway.
    fs::create_dir_all(src.join("js/vendor"))?;
    fs::create_dir_all(src.join("css"))?;
    fs::write(src.join("js/app.js"), "app")?;
    fs::write(src.join("js/app.js.map"), "map")?;
    fs::write(src.join("js/vendor/lib.js"), "lib")?;
    fs::write(src.join("css/site.css"), "css")?;
    let dst = td.path().join("public");

    let req = MoveRequest::new(&src, &dst, Some(".js"))?;
    let report = Mover::new(req, MoverOptions::default())?.execute();

    assert!(report.is_success(), "{:?}", report.failures());
    assert!(dst.join("js/app.js").exists());
    assert!(dst.join("js/vendor/lib.js").exists());
    assert!(!dst.join("js/app.js.map").exists());
    assert!(src.join("js/app.js.map").exists());
    assert!(dst.join("css").is_dir(), "visited directories are created even without matches");
    assert!(!dst.join("css/site.css").exists());
    assert_eq!(report.files_moved(), 2);
    assert_eq!(report.files_skipped(), 2);
    Ok(())
}

#[test]
fn filter_matches_only_the_last_extension() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("dist");
    fs::create_dir(&src)?;
    fs::write(src.join("release.tar.gz"), "gz")?;
    fs::write(src.join(".gz"), "dotfile")?;
    let dst = td.path().join("out");

    let req = MoveRequest::new(&src, &dst, Some(".gz"))?;
    let report = Mover::new(req, MoverOptions::default())?.execute();

    assert!(report.is_success());
    assert!(dst.join("release.tar.gz").exists());
    assert!(src.join(".gz").exists(), "a dotfile has no extension");
    Ok(())
}
