use crate::fb2::util::TestFb2::{Example, Minimal};
use std::fs;

#[test]
fn test_save_cover_image() {
    let dir = tempfile::tempdir().unwrap();
    let fb2 = Example.open();

    let path = fb2.save_cover_image(dir.path(), None).unwrap().unwrap();
    assert_eq!(dir.path().join("cover.png"), path);
    assert_eq!(fb2.cover_image().unwrap().unwrap().data(), fs::read(&path).unwrap());

    // Extension derived from the content type
    let path = fb2.save_cover_image(dir.path(), Some("front")).unwrap().unwrap();
    assert_eq!(dir.path().join("front.png"), path);
    assert!(path.is_file());
}

#[test]
fn test_save_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let fb2 = Example.open();

    let path = fb2.save_body_as_html(&nested, None).unwrap().unwrap();
    assert_eq!(nested.join("body.html"), path);

    let html = fs::read_to_string(path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(html.contains("<title>The Example Book</title>"));
    assert!(html.contains("A note."));
}

#[test]
fn test_save_without_cover() {
    let dir = tempfile::tempdir().unwrap();
    let fb2 = Minimal.open();

    assert!(fb2.save_cover_image(dir.path(), None).unwrap().is_none());
    assert_eq!(0, fs::read_dir(dir.path()).unwrap().count());

    let path = fb2.save_body_as_html(dir.path(), Some("../escape")).unwrap().unwrap();
    assert_eq!(dir.path().join("escape.html"), path);
    assert_eq!(fb2.body_html().unwrap().unwrap(), fs::read_to_string(path).unwrap());
}
