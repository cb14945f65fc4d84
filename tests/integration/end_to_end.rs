//! Pages in, rendered search box out.

use blockfind::shell::{Action, Focus, Key, KeyPress, NO_RESULTS_MESSAGE};
use blockfind::{
    initialize, initialize_from_json, query, render_results, FocusState, Page, SearchView,
};

use crate::common::fixture_pages;

#[test]
fn test_single_page_install_example() {
    let page = Page::new(
        &["content", "guide", "setup"],
        "/guide/setup/",
        "<h2><span class=anchor id=x></span>Install</h2><p>Run this command</p>",
    );
    let widget = initialize(&[page]);
    let results = query(&widget, "Install");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.has_title);
    assert!(result
        .title
        .contains("<span class=\"highlight-title\">Install</span>"));
    assert!(result.permalink.ends_with("#x"));
    assert_eq!(result.raw_title, "Install");
}

#[test]
fn test_empty_site_finds_nothing() {
    let widget = initialize(&[]);
    assert_eq!(widget.block_count(), 0);
    assert!(query(&widget, "anything").is_empty());
    assert!(initialize_from_json("[]").query("anything").is_empty());
}

#[test]
fn test_fixture_query_ranks_title_hit_first() {
    let widget = initialize(&fixture_pages());
    let results = query(&widget, "configure");
    assert_eq!(results[0].raw_title, "Configure");
    assert_eq!(results[0].permalink, "/guide/setup/#configure");
}

#[test]
fn test_typo_still_finds_block() {
    let widget = initialize(&fixture_pages());
    let results = query(&widget, "requirments");
    assert!(results.iter().any(|r| r.raw_title == "Requirements"));
}

#[test]
fn test_every_result_has_something_to_show() {
    let widget = initialize(&fixture_pages());
    for term in ["install", "score", "json", "搜索", "zzzzqqq"] {
        for result in query(&widget, term) {
            assert!(result.has_title || result.has_paragraphs, "{term}");
            assert_eq!(result.has_paragraphs, !result.paragraphs.is_empty());
        }
    }
}

#[test]
fn test_rendered_view_and_keyboard() {
    let widget = initialize(&fixture_pages());
    let view = SearchView::from_query("install", query(&widget, "install"));
    let links = view.link_count();
    assert!(links >= 1);

    let html = view.render();
    assert_eq!(html.matches("<li><a href=").count(), links);
    assert!(view.toolbar(false).contains("ctrl+"));

    let mut focus = FocusState::new();
    assert_eq!(focus.handle(KeyPress::plain(Key::Slash)), Action::Show);
    focus.set_links(links);
    assert_eq!(
        focus.handle(KeyPress::ctrl(Key::Down)),
        Action::Focus(Focus::Link(links - 1))
    );
    assert_eq!(focus.handle(KeyPress::plain(Key::Escape)), Action::Hide);
}

#[test]
fn test_no_results_view() {
    let widget = initialize(&fixture_pages());
    let view = SearchView::from_query("zzzzqqq", query(&widget, "zzzzqqq"));
    assert_eq!(view, SearchView::NoResults);
    assert!(view.render().contains(NO_RESULTS_MESSAGE));
    assert_eq!(render_results(&[]), view.render());
}
