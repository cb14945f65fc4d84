//! Snippets for results coming out of the real matcher.

use blockfind::highlight::{FRAGMENT_SEPARATOR, PARAGRAPH_CLASS};
use blockfind::{initialize, FieldKey, SearchWidget};

use crate::common::make_page;

fn long_paragraph_widget() -> SearchWidget {
    let paragraph = "The indexer walks every page once. After that, every keystroke runs \
                     the matcher over all blocks, and the highlighter cuts each long paragraph \
                     into short fragments around the places where the matcher found the term.";
    initialize(&[make_page("internals", &format!("<p>{paragraph}</p>"))])
}

#[test]
fn test_long_paragraph_is_split_around_matches() {
    let widget = long_paragraph_widget();
    let results = widget.query("matcher");
    assert_eq!(results.len(), 1);

    let paragraphs = &results[0].paragraphs;
    assert!(paragraphs.starts_with("<li class=\"search-result-paragraph\">"));
    assert!(paragraphs.contains(&format!("<span class=\"{PARAGRAPH_CLASS}\">matcher</span>")));
    assert!(paragraphs.contains(FRAGMENT_SEPARATOR));
    assert!(paragraphs.contains('…'));
    // Far less than the whole paragraph is shown
    assert!(!paragraphs.contains("walks every page once"));
}

#[test]
fn test_scattered_single_chars_are_not_fragments() {
    let widget = long_paragraph_widget();
    let raw = widget.search("matcher");
    let m = raw[0]
        .matches
        .iter()
        .find(|m| m.key == FieldKey::Paragraphs)
        .unwrap();
    // The matcher reports plenty of one-character ranges
    assert!(m.ranges.iter().any(|r| r.len() == 1));

    let rendered = widget.query("matcher");
    let fragments = rendered[0].paragraphs.matches("<span").count();
    assert_eq!(fragments, 2);
}

#[test]
fn test_short_paragraph_is_shown_whole() {
    let widget = initialize(&[make_page("short", "<p>Run this command</p>")]);
    let results = widget.query("command");
    // Whole highlighting keeps the scan's stray single-char hits ("n" of "Run")
    assert_eq!(
        results[0].paragraphs,
        format!(
            "<li class=\"search-result-paragraph\">Ru<span class=\"{PARAGRAPH_CLASS}\">n</span> this \
             <span class=\"{PARAGRAPH_CLASS}\">command</span></li>"
        )
    );
    assert!(!results[0].has_title);
    assert_eq!(results[0].title, "short");
}

#[test]
fn test_markup_in_text_is_escaped() {
    let widget = initialize(&[make_page(
        "escape",
        "<p>Use &lt;script&gt; tags sparingly</p>",
    )]);
    let results = widget.query("script");
    let paragraphs = &results[0].paragraphs;
    assert!(paragraphs.contains("&lt;"));
    assert!(!paragraphs.contains("<script"));
}

#[test]
fn test_chinese_text_highlights_by_character() {
    let widget = initialize(&[make_page(
        "zh",
        "<h2 id=\"intro\">简介</h2><p>全文搜索可以按标题和段落查找内容。</p>",
    )]);
    let results = widget.query("搜索");
    let hit = results.iter().find(|r| r.raw_title == "简介").unwrap();
    assert!(hit
        .paragraphs
        .contains(&format!("全文<span class=\"{PARAGRAPH_CLASS}\">搜索</span>")));
}
