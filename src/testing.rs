// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Block, FieldKey, FieldMatch, MatchRange, MatchResult, Page};

/// A heading block with a fixed path and permalink derived from the title.
pub fn make_block(title: &str, level: u8, paragraphs: &[&str]) -> Block {
    Block {
        title: title.to_string(),
        path: String::new(),
        permalink: format!("/test/#{}", title.to_lowercase().replace(' ', "-")),
        level,
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
}

/// A page under `content/docs/<name>` with the given body HTML.
pub fn make_page(name: &str, html: &str) -> Page {
    Page::new(&["content", "docs", name], &format!("/docs/{name}/"), html)
}

/// A match result over `block` with one title match covering `title_range`.
pub fn make_title_result(block: Block, title_range: (usize, usize)) -> MatchResult {
    let value = block.title.clone();
    MatchResult {
        item: block,
        ref_index: 0,
        score: 0.0,
        matches: vec![FieldMatch {
            key: FieldKey::Title,
            value,
            ranges: vec![MatchRange::new(title_range.0, title_range.1)],
            ref_index: None,
        }],
    }
}

/// Heading markup the way Hugo renders it, with an anchor span.
pub fn heading_html(level: u8, anchor: &str, text: &str) -> String {
    format!("<h{level}><span class=\"anchor\" id=\"{anchor}\"></span>{text}</h{level}>")
}
