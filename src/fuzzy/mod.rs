// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bit-parallel approximate search.
//!
//! [`bitap`] matches one word-sized pattern chunk; [`BitapSearcher`] compiles
//! a whole term into chunks and runs them against field values. Offsets are
//! always character offsets into the value as given, never into a
//! normalized copy.

pub mod bitap;
mod searcher;

pub use searcher::{BitapSearcher, SearchOutcome};

use serde::{Deserialize, Serialize};

use crate::util::normalize::FoldOptions;

/// Knobs for the approximate matcher.
///
/// Defaults are tuned for short headings and paragraph text: moderately
/// loose (`threshold = 0.4`) and position-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchOptions {
    /// Where in the value the term is expected (ignored with `ignore_location`).
    pub location: usize,
    /// How far from `location` a match may drift before its score hits 1.
    pub distance: usize,
    /// 0 requires a perfect match, 1 matches anything.
    pub threshold: f64,
    /// Keep scanning the whole value after a good match is found.
    pub find_all_matches: bool,
    /// Shortest run of matched characters reported as a range.
    pub min_match_char_length: usize,
    /// Report match ranges (needed for highlighting).
    pub include_matches: bool,
    /// Score by edit count only, not by position.
    pub ignore_location: bool,
    pub is_case_sensitive: bool,
    /// Fold accented letters to their base letter before comparing.
    pub ignore_diacritics: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            location: 0,
            distance: 100,
            threshold: 0.4,
            find_all_matches: false,
            min_match_char_length: 1,
            include_matches: true,
            ignore_location: true,
            is_case_sensitive: false,
            ignore_diacritics: false,
        }
    }
}

impl MatchOptions {
    pub fn fold(&self) -> FoldOptions {
        FoldOptions {
            case_sensitive: self.is_case_sensitive,
            ignore_diacritics: self.ignore_diacritics,
        }
    }
}
