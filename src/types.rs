// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through the pipeline.
//!
//! Pages come in from the content index, blocks are what we search, match
//! results are what the engine hands back, and renderable results are what
//! the shell draws. Everything after `Block` is ephemeral: rebuilt on every
//! keystroke and thrown away after rendering.
//!
//! # Invariants
//!
//! - **Block tree**: a block's parent is the nearest preceding block (in
//!   emission order) with a strictly smaller `level`. Level 1 is the page
//!   root and exists exactly once per page.
//!
//! - **Block path**: computed once from the parent chain when the block is
//!   created. Nothing rewrites it afterwards.
//!
//! - **MatchRange**: `start <= end`, both inclusive character offsets (Unicode
//!   scalars, not bytes) into the matched value.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// INPUT
// =============================================================================

/// One page from the site's content index.
///
/// Hugo's JSON output format gives `fullPath` as a `/`-separated string; other
/// generators emit an array of segments. Both deserialize to the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(deserialize_with = "deserialize_full_path")]
    pub full_path: Vec<String>,
    pub permalink: String,
    #[serde(default)]
    pub html_string: String,
}

impl Page {
    pub fn new(full_path: &[&str], permalink: &str, html_string: &str) -> Self {
        Self {
            full_path: full_path.iter().map(|s| s.to_string()).collect(),
            permalink: permalink.to_string(),
            html_string: html_string.to_string(),
        }
    }

    /// Path segments with surrounding whitespace trimmed and empties removed.
    pub fn segments(&self) -> Vec<&str> {
        self.full_path
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FullPathValue {
    Joined(String),
    Segments(Vec<String>),
}

fn deserialize_full_path<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FullPathValue::deserialize(deserializer)? {
        FullPathValue::Joined(path) => path
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        FullPathValue::Segments(segments) => segments,
    })
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Heading depth of a block: 1 for the page itself, 2-6 for `<h2>`-`<h6>`.
pub type Level = u8;

/// The page root always sits at this level.
pub const ROOT_LEVEL: Level = 1;

/// A titled, addressable slice of a page. The atomic search target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Page name for the root block, heading text otherwise.
    pub title: String,
    /// Breadcrumb of ancestor titles, separators included, angle brackets escaped.
    pub path: String,
    /// Page permalink, plus `#anchor` for heading blocks.
    pub permalink: String,
    pub level: Level,
    /// Plain text collected under this heading, in document order.
    pub paragraphs: Vec<String>,
}

impl Block {
    pub fn is_root(&self) -> bool {
        self.level == ROOT_LEVEL
    }
}

// =============================================================================
// MATCHES
// =============================================================================

/// Which searchable field of a block a match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Title,
    Paragraphs,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Paragraphs => "paragraphs",
        }
    }
}

/// Inclusive `[start, end]` character offsets into a matched value.
///
/// Deserializing rejects `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchRange")]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Deserialize)]
struct RawMatchRange {
    start: usize,
    end: usize,
}

impl TryFrom<RawMatchRange> for MatchRange {
    type Error = String;

    fn try_from(raw: RawMatchRange) -> Result<Self, Self::Error> {
        if raw.start > raw.end {
            return Err(format!("inverted range [{}, {}]", raw.start, raw.end));
        }
        Ok(Self {
            start: raw.start,
            end: raw.end,
        })
    }
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted range [{start}, {end}]");
        Self { start, end }
    }

    /// Number of characters covered (both bounds inclusive).
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    /// Always `false`: an inclusive range covers at least `start`. Kept so
    /// `len` has its usual companion.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// One field value that matched, with the ranges the engine reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub key: FieldKey,
    pub value: String,
    pub ranges: Vec<MatchRange>,
    /// Slot in `paragraphs` for array-valued fields, `None` for the title.
    pub ref_index: Option<usize>,
}

/// A block the engine considers relevant to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub item: Block,
    /// Position of `item` in the indexed block collection.
    pub ref_index: usize,
    /// Lower is better; 0 is a perfect match.
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A result ready for the shell to draw. HTML fields are already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableResult {
    pub path: String,
    pub permalink: String,
    /// Highlighted title, or the raw title when only paragraphs matched.
    pub title: String,
    /// Concatenated `<li>` snippets, empty when no paragraph matched.
    pub paragraphs: String,
    pub raw_title: String,
    pub has_title: bool,
    pub has_paragraphs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_with_segment_array() {
        let json = r#"{
            "fullPath": ["content", "guide", "setup"],
            "permalink": "/guide/setup/",
            "htmlString": "<p>hi</p>"
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.full_path, vec!["content", "guide", "setup"]);
        assert_eq!(page.html_string, "<p>hi</p>");
    }

    #[test]
    fn test_parse_page_with_joined_path() {
        let json = r#"{
            "fullPath": "/content/ guide /setup",
            "permalink": "/guide/setup/",
            "htmlString": ""
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.full_path, vec!["content", "guide", "setup"]);
    }

    #[test]
    fn test_parse_page_ignores_unknown_fields() {
        let json = r#"{
            "fullPath": "a/b",
            "permalink": "/b/",
            "htmlString": "",
            "date": "2021-04-25"
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.permalink, "/b/");
    }

    #[test]
    fn test_segments_trim_and_drop_empty() {
        let page = Page::new(&[" content ", "", "setup"], "/", "");
        assert_eq!(page.segments(), vec!["content", "setup"]);
    }

    #[test]
    fn test_match_range_len_is_inclusive() {
        let range = MatchRange::new(3, 3);
        assert_eq!(range.len(), 1);
        assert!(range.contains(3));
        assert!(!range.contains(4));
    }

    #[test]
    fn test_match_range_rejects_inverted_json() {
        let range: MatchRange = serde_json::from_str(r#"{"start": 2, "end": 5}"#).unwrap();
        assert_eq!(range.len(), 4);

        let err = serde_json::from_str::<MatchRange>(r#"{"start": 5, "end": 2}"#).unwrap_err();
        assert!(err.to_string().contains("inverted range [5, 2]"));
    }

    #[test]
    fn test_renderable_result_serializes_camel_case() {
        let result = RenderableResult {
            path: String::new(),
            permalink: "/a/".to_string(),
            title: "A".to_string(),
            paragraphs: String::new(),
            raw_title: "A".to_string(),
            has_title: true,
            has_paragraphs: false,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rawTitle"], "A");
        assert_eq!(json["hasParagraphs"], false);
    }
}
