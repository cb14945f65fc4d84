//! Segmentation of realistic page markup.

use blockfind::segment::HEADING_SEPARATOR;
use blockfind::{segment, segment_all};

use crate::common::{assert_blocks_well_formed, fixture_pages, heading_html, make_page};

#[test]
fn test_fixture_blocks_well_formed() {
    let pages = fixture_pages();
    let blocks = segment_all(&pages);
    assert_blocks_well_formed(&pages, &blocks);
}

#[test]
fn test_setup_page_structure() {
    let pages = fixture_pages();
    let blocks = segment(&pages[0]);

    let outline: Vec<(u8, &str)> = blocks.iter().map(|b| (b.level, b.title.as_str())).collect();
    assert_eq!(
        outline,
        vec![
            (1, "setup"),
            (2, "Install"),
            (3, "Requirements"),
            (2, "Configure"),
        ]
    );

    assert_eq!(blocks[1].permalink, "/guide/setup/#install");
    assert_eq!(
        blocks[1].paragraphs,
        vec![
            "Run this command to install the toolchain.",
            "cargo install blockfind",
        ]
    );
    assert_eq!(
        blocks[2].paragraphs,
        vec!["A recent compiler", "Network access"]
    );
}

#[test]
fn test_breadcrumbs_follow_parents() {
    let pages = fixture_pages();
    let blocks = segment(&pages[0]);
    let root_path = "guide <span class='separator'>/</span> ";

    assert_eq!(blocks[0].path, root_path);
    assert_eq!(
        blocks[2].path,
        format!("{root_path}setup{HEADING_SEPARATOR}Install{HEADING_SEPARATOR}")
    );
    // Configure is a sibling of Install, not a child of Requirements
    assert_eq!(blocks[3].path, blocks[1].path);
}

#[test]
fn test_deeper_breadcrumb_and_heading_ids() {
    let pages = fixture_pages();
    let blocks = segment(&pages[1]);
    assert_eq!(
        blocks[0].path,
        "guide <span class='separator'>/</span> search <span class='separator'>/</span> "
    );
    assert_eq!(blocks[1].permalink, "/guide/search/ranking/#scores");
    assert_eq!(blocks[2].title, "Vec<T> and friends");
}

#[test]
fn test_escaped_title_in_child_breadcrumb() {
    let page = make_page(
        "generics",
        &format!(
            "{}{}<p>body</p>",
            heading_html(2, "vec", "Vec&lt;T&gt;"),
            heading_html(3, "push", "push")
        ),
    );
    let blocks = segment(&page);
    assert!(blocks[2].path.contains("Vec&lt;T&gt;"));
    assert!(!blocks[2].path.contains("Vec<T>"));
}

#[test]
fn test_content_before_first_heading_goes_to_root() {
    let pages = fixture_pages();
    let blocks = segment(&pages[0]);
    assert_eq!(
        blocks[0].paragraphs,
        vec!["Everything you need before the first build."]
    );
}

#[test]
fn test_fence_without_code_is_skipped() {
    let page = make_page(
        "broken",
        "<div class=\"highlight\"><pre>no code element</pre></div><p>still here</p>",
    );
    let blocks = segment(&page);
    assert_eq!(blocks[0].paragraphs, vec!["still here"]);
}
