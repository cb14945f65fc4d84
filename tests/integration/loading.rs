//! Content index loading from disk.

use std::fs;

use blockfind::{load_pages_from_path, Error, SearchWidget, WidgetOptions};
use tempfile::TempDir;

use crate::common::{fixture_pages, fixture_path};

#[test]
fn test_fixture_skips_page_without_permalink() {
    let pages = fixture_pages();
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| !p.permalink.is_empty()));
}

#[test]
fn test_fixture_accepts_both_path_forms() {
    let pages = fixture_pages();
    assert_eq!(pages[0].full_path, vec!["content", "guide", "setup"]);
    assert_eq!(
        pages[1].full_path,
        vec!["content", "guide", "search", "ranking"]
    );
}

#[test]
fn test_truncated_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.json");
    let full = fs::read_to_string(fixture_path()).unwrap();
    fs::write(&path, &full[..full.len() / 2]).unwrap();

    let err = load_pages_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("invalid content index JSON"));
}

#[test]
fn test_options_file_drives_widget() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    fs::write(
        &path,
        r#"{"index": {"keys": [{"name": "title", "weight": 1}]}}"#,
    )
    .unwrap();

    let options: WidgetOptions = blockfind::load_options(&path).unwrap();
    let widget = SearchWidget::with_options(&fixture_pages(), options);

    // "toolchain" only appears in a paragraph, which is no longer searched
    assert!(widget.query("toolchain").is_empty());
    assert!(!widget.query("install").is_empty());
}
