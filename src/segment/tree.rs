// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML -> content nodes.
//!
//! The only place that knows about `scraper`. Everything downstream works on
//! `ContentNode`, so swapping the parser (or feeding nodes from a markdown
//! AST) never touches block construction.
//!
//! We only look at the direct element children of `<body>`. Text nodes
//! sitting directly in the body are ignored, same as a DOM `children`
//! collection would.

use scraper::{ElementRef, Html, Node};

use crate::types::Level;

/// One top-level element of a page body, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// `<h2>`..`<h6>`. `anchor` is the fragment the heading links to.
    Heading {
        level: Level,
        text: String,
        anchor: Option<String>,
    },
    /// A highlighted code fence. `None` when the nested `<code>` is missing.
    CodeFence { code: Option<String> },
    /// `<ul>` / `<ol>`: leading text of every list item.
    List { items: Vec<String> },
    /// Any other element, as rendered text.
    Text(String),
}

/// Class Hugo puts on the wrapper around highlighted code blocks.
const CODE_FENCE_CLASS: &str = "highlight";

/// Class of the empty `<span>` carrying a heading's anchor id.
const ANCHOR_CLASS: &str = "anchor";

/// Parse a page body into classified top-level nodes, in document order.
pub fn parse(html: &str) -> Vec<ContentNode> {
    let document = Html::parse_document(html);
    let Some(body) = find_body(&document) else {
        return Vec::new();
    };

    body.children()
        .filter_map(ElementRef::wrap)
        .map(classify)
        .collect()
}

fn find_body(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "body")
}

fn classify(element: ElementRef<'_>) -> ContentNode {
    if let Some(level) = heading_level(element.value().name()) {
        return ContentNode::Heading {
            level,
            text: inner_text(element),
            anchor: heading_anchor(element),
        };
    }

    if element.value().classes().any(|c| c == CODE_FENCE_CLASS) {
        return ContentNode::CodeFence {
            code: fence_code(element),
        };
    }

    match element.value().name() {
        "ul" | "ol" => ContentNode::List {
            items: list_items(element),
        },
        _ => ContentNode::Text(inner_text(element)),
    }
}

/// `h2`..`h6` -> 2..6. `h1` is page chrome, not a section boundary.
fn heading_level(name: &str) -> Option<Level> {
    match name {
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// `span.anchor[id]` inside the heading, else the heading's own `id`.
fn heading_anchor(heading: ElementRef<'_>) -> Option<String> {
    heading
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "span" && e.value().classes().any(|c| c == ANCHOR_CLASS))
        .and_then(|span| span.value().attr("id"))
        .or_else(|| heading.value().attr("id"))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Text of `code[data-lang]`, falling back to the first nested `<code>`.
fn fence_code(fence: ElementRef<'_>) -> Option<String> {
    let codes: Vec<ElementRef<'_>> = fence
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "code")
        .collect();

    codes
        .iter()
        .find(|e| e.value().attr("data-lang").is_some())
        .or_else(|| codes.first())
        .map(|code| preformatted_text(*code))
}

/// First child of every descendant `<li>`, if that child is a text node.
///
/// Rich items (`<li><p>..</p></li>`, nested lists, leading links) only
/// contribute their leading text, if any.
fn list_items(list: ElementRef<'_>) -> Vec<String> {
    list.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "li")
        .filter_map(|li| li.first_child())
        .filter_map(|child| child.value().as_text().map(|t| t.trim().to_string()))
        .filter(|text| !text.is_empty())
        .collect()
}

// =============================================================================
// INNER TEXT
// =============================================================================

/// Roughly what a browser's `innerText` gives: block boundaries and `<br>`
/// become newlines, other whitespace collapses to single spaces.
pub fn inner_text(element: ElementRef<'_>) -> String {
    if is_preformatted(element.value().name()) {
        return preformatted_text(element);
    }
    let mut out = String::new();
    collect_text(element, &mut out, false);
    out.trim_start_matches('\n').trim_end().to_string()
}

/// Text of a preformatted element with its own line breaks intact.
fn preformatted_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out, true);
    out.trim_start_matches('\n').trim_end().to_string()
}

fn collect_text(element: ElementRef<'_>, out: &mut String, preformatted: bool) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if preformatted {
                    out.push_str(text);
                } else {
                    push_collapsed(out, text);
                }
            }
            Node::Element(element) => {
                let name = element.name();
                if name == "br" {
                    if preformatted {
                        out.push('\n');
                    } else {
                        break_line(out);
                    }
                    continue;
                }
                if matches!(name, "script" | "style" | "template" | "noscript") {
                    continue;
                }
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = is_block_level(name);
                if block {
                    break_line(out);
                }
                collect_text(child, out, preformatted || is_preformatted(name));
                if block {
                    break_line(out);
                }
            }
            _ => {}
        }
    }
}

fn push_collapsed(out: &mut String, text: &str) {
    for c in text.chars() {
        if c.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') && !out.ends_with('\n') {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
}

fn break_line(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Inline `<code>` is not here: browsers collapse its whitespace.
fn is_preformatted(name: &str) -> bool {
    matches!(name, "pre" | "textarea")
}

fn is_block_level(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "pre"
            | "li"
            | "ul"
            | "ol"
            | "dl"
            | "dt"
            | "dd"
            | "tr"
            | "table"
            | "thead"
            | "tbody"
            | "blockquote"
            | "section"
            | "article"
            | "figure"
            | "figcaption"
            | "details"
            | "summary"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "hr"
    )
}
