use file_move::config::{create_template_config, load_config_from_xml_path};
use file_move::RequestError;
use std::fs;
use tempfile::tempdir;

#[test]
fn template_round_trips_through_loader() {
    let td = tempdir().unwrap();
    let path = td.path().join("nested/dir/config.xml");

    create_template_config(&path).expect("create template");
    assert!(path.exists());

    let cfg = load_config_from_xml_path(&path).expect("template must parse");
    assert!(!cfg.dry_run);
    assert_eq!(cfg.to_request(), Err(RequestError::EmptySourcePath));
}

#[test]
fn template_never_overwrites() {
    let td = tempdir().unwrap();
    let path = td.path().join("config.xml");
    fs::write(&path, "<config/>").unwrap();

    assert!(create_template_config(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "<config/>");
}

#[cfg(unix)]
#[test]
fn template_refuses_symlinked_ancestor() {
    let td = tempdir().unwrap();
    let real = td.path().join("real");
    fs::create_dir(&real).unwrap();
    let link = td.path().join("link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let err = create_template_config(&link.join("config.xml")).unwrap_err();
    assert!(err.to_string().contains("symlink"), "{err}");
    assert!(!real.join("config.xml").exists());
}
