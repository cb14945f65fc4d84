// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet highlighting.
//!
//! Ranges arrive from the matcher in character offsets, so the highlighter
//! slices by char. Multibyte text and ranges touching either end are where
//! an off-by-one would panic.

#![no_main]

use arbitrary::Arbitrary;
use blockfind::highlight::{split_highlight, whole_highlight, PARAGRAPH_CLASS};
use blockfind::{HighlightOptions, MatchRange};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    value: String,
    ranges: Vec<(u16, u16)>,
    term_len: u8,
    context_chars: u8,
    max_fragments: u8,
}

fuzz_target!(|input: Input| {
    let char_count = input.value.chars().count();
    if char_count == 0 {
        return;
    }

    let ranges: Vec<MatchRange> = input
        .ranges
        .iter()
        .map(|&(a, b)| {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            MatchRange::new(lo as usize % char_count, (hi as usize % char_count).max(lo as usize % char_count))
        })
        .collect();

    let options = HighlightOptions {
        context_chars: input.context_chars as usize,
        max_fragments: input.max_fragments as usize,
        ..HighlightOptions::default()
    };

    let whole = whole_highlight(&input.value, &ranges, PARAGRAPH_CLASS);
    assert!(!whole.contains('<') || whole.contains("<span"));

    let split = split_highlight(
        &input.value,
        &ranges,
        input.term_len as usize,
        PARAGRAPH_CLASS,
        &options,
    );
    assert!(split.matches("<span").count() <= options.max_fragments);
});
