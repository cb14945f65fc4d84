// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet highlighting: match ranges back onto the original text.
//!
//! Two strategies, picked per value:
//!
//! - **Whole**: short values (titles, short paragraphs) are shown in full
//!   with every covered run wrapped in a span.
//! - **Split**: long paragraphs are cut into fragments around each useful
//!   range, with a little context on either side and `…` where the context
//!   was clipped mid-sentence.
//!
//! Ranges are character offsets, so everything here walks `char`s. Output is
//! HTML: every piece of original text goes through angle-bracket escaping
//! before it is concatenated with markup.

use serde::{Deserialize, Serialize};

use crate::types::{FieldKey, FieldMatch, MatchRange, MatchResult, RenderableResult};
use crate::util::escape::{push_escaped, push_escaped_char};

/// Span class for matched title characters.
pub const TITLE_CLASS: &str = "highlight-title";

/// Span class for matched paragraph characters.
pub const PARAGRAPH_CLASS: &str = "highlight-paragraph";

/// List item wrapping each highlighted paragraph.
pub const PARAGRAPH_ITEM_CLASS: &str = "search-result-paragraph";

/// Marker of the empty-result placeholder.
pub const NO_RESULTS_CLASS: &str = "no-search-results";

/// Appended or prepended where a context window cuts into running text.
pub const ELLIPSIS: &str = "…";

/// Between fragments of one split-highlighted paragraph.
pub const FRAGMENT_SEPARATOR: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

const CLOSE_SPAN: &str = "</span>";

/// Characters after which a clipped window reads as a natural break.
const BOUNDARIES: [char; 8] = [' ', '.', '。', '!', '！', '?', '？', '\n'];

/// Snippet tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightOptions {
    /// Paragraphs up to this many characters are highlighted whole.
    pub max_whole_chars: usize,
    /// Context characters kept on each side of a fragment.
    pub context_chars: usize,
    /// Fragments shown per paragraph.
    pub max_fragments: usize,
    /// A range shorter than `term_len - min_range_slack` is dropped from
    /// split highlighting.
    pub min_range_slack: usize,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            max_whole_chars: 50,
            context_chars: 15,
            max_fragments: 5,
            min_range_slack: 1,
        }
    }
}

/// Highlight every covered run of `value`.
pub fn whole_highlight(value: &str, ranges: &[MatchRange], class: &str) -> String {
    let mut out = String::with_capacity(value.len() + 32);
    let mut open = false;

    for (i, c) in value.chars().enumerate() {
        let covered = ranges.iter().any(|r| r.contains(i));
        if covered != open {
            if covered {
                open_span(&mut out, class);
            } else {
                out.push_str(CLOSE_SPAN);
            }
            open = covered;
        }
        push_escaped_char(&mut out, c);
    }

    if open {
        out.push_str(CLOSE_SPAN);
    }
    out
}

/// Highlight up to `max_fragments` ranges of a long value, each with its own
/// context window.
///
/// Ranges much shorter than the term are the matcher's scattered single
/// characters, not real hits, and are skipped.
pub fn split_highlight(
    value: &str,
    ranges: &[MatchRange],
    term_len: usize,
    class: &str,
    options: &HighlightOptions,
) -> String {
    let chars: Vec<char> = value.chars().collect();
    let min_len = term_len.saturating_sub(options.min_range_slack);

    ranges
        .iter()
        .filter(|r| r.len() >= min_len && r.end < chars.len())
        .take(options.max_fragments)
        .map(|r| fragment(&chars, *r, class, options.context_chars))
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

fn fragment(chars: &[char], range: MatchRange, class: &str, context: usize) -> String {
    let window_start = range.start.saturating_sub(context);
    let prefix_start = chars[window_start..range.start]
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(window_start, |p| window_start + p + 1);

    let after = range.end + 1;
    let window_end = (after + context).min(chars.len());
    let suffix_end = chars[after..window_end]
        .iter()
        .position(|&c| c == '\n')
        .map_or(window_end, |p| after + p);

    let mut out = String::new();

    if window_start > 0 && !is_boundary(chars[prefix_start - 1]) {
        out.push_str(ELLIPSIS);
    }
    push_escaped_chars(&mut out, &chars[prefix_start..range.start]);

    open_span(&mut out, class);
    push_escaped_chars(&mut out, &chars[range.start..after]);
    out.push_str(CLOSE_SPAN);

    push_escaped_chars(&mut out, &chars[after..suffix_end]);
    if window_end < chars.len() && !is_boundary(chars[suffix_end]) {
        out.push_str(ELLIPSIS);
    }

    out
}

/// One paragraph match as a `<li>`, or nothing if no fragment survived.
pub fn highlight_paragraph(m: &FieldMatch, term_len: usize, options: &HighlightOptions) -> String {
    let highlighted = if m.value.chars().count() <= options.max_whole_chars {
        whole_highlight(&m.value, &m.ranges, PARAGRAPH_CLASS)
    } else {
        split_highlight(&m.value, &m.ranges, term_len, PARAGRAPH_CLASS, options)
    };

    if highlighted.is_empty() {
        return highlighted;
    }
    format!("<li class=\"{PARAGRAPH_ITEM_CLASS}\">{highlighted}</li>")
}

/// Turn one match result into something the shell can draw.
///
/// Returns `None` when neither the title nor any paragraph produced output.
pub fn highlight_result(
    result: &MatchResult,
    term: &str,
    options: &HighlightOptions,
) -> Option<RenderableResult> {
    let term_len = term.trim().chars().count();
    let mut title = String::new();
    let mut paragraphs = String::new();

    for m in &result.matches {
        match m.key {
            FieldKey::Title => title.push_str(&whole_highlight(&m.value, &m.ranges, TITLE_CLASS)),
            FieldKey::Paragraphs => {
                paragraphs.push_str(&highlight_paragraph(m, term_len, options))
            }
        }
    }

    let has_title = !title.is_empty();
    let has_paragraphs = !paragraphs.is_empty();
    if !has_title && !has_paragraphs {
        return None;
    }

    let block = &result.item;
    Some(RenderableResult {
        path: block.path.clone(),
        permalink: block.permalink.clone(),
        title: if has_title { title } else { block.title.clone() },
        paragraphs,
        raw_title: block.title.clone(),
        has_title,
        has_paragraphs,
    })
}

/// [`highlight_result`] over a whole result list, order kept.
pub fn highlight_results(
    results: &[MatchResult],
    term: &str,
    options: &HighlightOptions,
) -> Vec<RenderableResult> {
    results
        .iter()
        .filter_map(|r| highlight_result(r, term, options))
        .collect()
}

#[inline]
fn is_boundary(c: char) -> bool {
    BOUNDARIES.contains(&c)
}

fn open_span(out: &mut String, class: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
}

fn push_escaped_chars(out: &mut String, chars: &[char]) {
    for &c in chars {
        push_escaped_char(out, c);
    }
}

/// The placeholder list item shown when nothing matched.
pub fn no_results_item(message: &str) -> String {
    let mut out = format!("<li><div class=\"{NO_RESULTS_CLASS}\">");
    push_escaped(&mut out, message);
    out.push_str("</div></li>");
    out
}
