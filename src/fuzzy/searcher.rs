// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A compiled query term, ready to run against many field values.
//!
//! Patterns longer than [`MAX_BITS`] are cut into word-sized chunks. Every
//! chunk but the last starts at a multiple of `MAX_BITS`; the last one is
//! anchored to the end of the pattern so it is always full width (and may
//! overlap its neighbour). The value matches if any chunk matches; the score
//! is the mean over all chunks.

use std::collections::HashMap;

use super::bitap::{self, MAX_BITS};
use super::MatchOptions;
use crate::types::MatchRange;
use crate::util::normalize::fold_chars;

#[derive(Debug, Clone)]
struct Chunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, u64>,
    start_index: usize,
}

/// Outcome of matching the whole term against one value.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub is_match: bool,
    pub score: f64,
    pub ranges: Vec<MatchRange>,
}

impl SearchOutcome {
    fn miss() -> Self {
        Self {
            is_match: false,
            score: 1.0,
            ranges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BitapSearcher {
    pattern: Vec<char>,
    chunks: Vec<Chunk>,
    options: MatchOptions,
}

impl BitapSearcher {
    pub fn new(pattern: &str, options: MatchOptions) -> Self {
        let pattern = fold_chars(pattern, options.fold());
        let len = pattern.len();
        let mut chunks = Vec::new();

        let mut add_chunk = |slice: &[char], start_index: usize| {
            chunks.push(Chunk {
                pattern: slice.to_vec(),
                alphabet: bitap::pattern_alphabet(slice),
                start_index,
            });
        };

        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                add_chunk(&pattern[i..i + MAX_BITS], i);
                i += MAX_BITS;
            }
            if remainder > 0 {
                let start_index = len - MAX_BITS;
                add_chunk(&pattern[start_index..], start_index);
            }
        } else if len > 0 {
            add_chunk(&pattern, 0);
        }

        Self {
            pattern,
            chunks,
            options,
        }
    }

    /// The folded pattern this searcher was compiled from.
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Match the term against `text`. Ranges index `text`'s characters.
    pub fn search_in(&self, text: &str) -> SearchOutcome {
        let text = fold_chars(text, self.options.fold());

        if text == self.pattern {
            return SearchOutcome {
                is_match: true,
                score: 0.0,
                ranges: if self.options.include_matches && !text.is_empty() {
                    vec![MatchRange::new(0, text.len() - 1)]
                } else {
                    Vec::new()
                },
            };
        }

        if self.chunks.is_empty() {
            return SearchOutcome::miss();
        }

        let mut ranges = Vec::new();
        let mut total_score = 0.0;
        let mut has_matches = false;

        for chunk in &self.chunks {
            let outcome = bitap::search(
                &text,
                &chunk.pattern,
                &chunk.alphabet,
                self.options.location + chunk.start_index,
                &self.options,
            );
            total_score += outcome.score;
            if outcome.is_match {
                has_matches = true;
                ranges.extend(outcome.ranges);
            }
        }

        if !has_matches {
            return SearchOutcome::miss();
        }

        SearchOutcome {
            is_match: true,
            score: total_score / self.chunks.len() as f64,
            ranges: if self.options.include_matches {
                ranges
            } else {
                Vec::new()
            },
        }
    }
}
