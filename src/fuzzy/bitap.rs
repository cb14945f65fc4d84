// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bitap (shift-or) approximate matching for one pattern chunk.
//!
//! The pattern is at most [`MAX_BITS`] characters so every state fits in one
//! machine word. For `k` errors we keep one bit array per text position; bit
//! `m` set at position `j` means "the first `m+1` pattern chars match ending
//! here with at most `k` edits". Each error level derives from the previous
//! one, and we stop raising `k` once `k / pattern_len` can no longer beat the
//! best score seen.
//!
//! Two passes:
//!
//! 1. Exact occurrences (cheap `find`) tighten the threshold and mark their
//!    characters as matched.
//! 2. The bit-parallel scan over the window the threshold still allows.
//!    Every scanned character that occurs *anywhere* in the pattern is
//!    marked too. That is what produces the short, scattered ranges the
//!    highlighter later filters out.
//!
//! All offsets are character offsets into `text`.

use std::collections::HashMap;

use super::MatchOptions;
use crate::types::MatchRange;

/// Longest pattern a single chunk can hold.
pub const MAX_BITS: usize = 32;

/// Scores below this are reported as this, so "perfect" stays reserved for
/// whole-value equality.
const MIN_SCORE: f64 = 0.001;

/// Outcome of matching one chunk against one text.
#[derive(Debug, Clone, PartialEq)]
pub struct BitapOutcome {
    pub is_match: bool,
    /// 0 is perfect, 1 is no match.
    pub score: f64,
    pub ranges: Vec<MatchRange>,
}

/// Per-character bitmask: bit `len - 1 - i` is set for every `i` where
/// `pattern[i] == c`.
pub fn pattern_alphabet(pattern: &[char]) -> HashMap<char, u64> {
    let len = pattern.len();
    let mut alphabet = HashMap::with_capacity(len);
    for (i, &c) in pattern.iter().enumerate() {
        *alphabet.entry(c).or_insert(0) |= 1u64 << (len - i - 1);
    }
    alphabet
}

/// Score for a candidate with `errors` edits at `current_location`.
pub fn compute_score(
    pattern_len: usize,
    errors: usize,
    current_location: usize,
    expected_location: usize,
    options: &MatchOptions,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if options.ignore_location {
        return accuracy;
    }

    let proximity = current_location.abs_diff(expected_location);
    if options.distance == 0 {
        return if proximity == 0 { accuracy } else { 1.0 };
    }

    accuracy + proximity as f64 / options.distance as f64
}

/// Collapse a per-character match mask into inclusive ranges of at least
/// `min_len` characters.
pub fn mask_to_ranges(mask: &[bool], min_len: usize) -> Vec<MatchRange> {
    let mut ranges = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &matched) in mask.iter().enumerate() {
        match (matched, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= min_len {
                    ranges.push(MatchRange::new(s, i - 1));
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        if mask.len() - s >= min_len {
            ranges.push(MatchRange::new(s, mask.len() - 1));
        }
    }

    ranges
}

/// Match one pattern chunk (already folded) against folded `text`.
pub fn search(
    text: &[char],
    pattern: &[char],
    alphabet: &HashMap<char, u64>,
    location: usize,
    options: &MatchOptions,
) -> BitapOutcome {
    debug_assert!(!pattern.is_empty() && pattern.len() <= MAX_BITS);

    let pattern_len = pattern.len();
    let text_len = text.len();
    let expected_location = location.min(text_len);
    let compute_matches = options.min_match_char_length > 1 || options.include_matches;

    let mut current_threshold = options.threshold;
    let mut match_mask = vec![false; if compute_matches { text_len } else { 0 }];

    // Pass 1: exact occurrences
    let mut from = expected_location;
    while let Some(index) = find_from(text, pattern, from) {
        let score = compute_score(pattern_len, 0, index, expected_location, options);
        current_threshold = current_threshold.min(score);
        from = index + pattern_len;
        if compute_matches {
            match_mask[index..index + pattern_len].fill(true);
        }
    }

    // Pass 2: bit-parallel scan, one error level at a time
    let mut best_location: Option<usize> = None;
    let mut last_bits: Vec<u64> = Vec::new();
    let mut final_score = 1.0;
    let mut bin_max = pattern_len + text_len;
    let mask = 1u64 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Widest window where `errors` edits could still beat the threshold
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = compute_score(
                pattern_len,
                errors,
                expected_location + bin_mid,
                expected_location,
                options,
            );
            if score <= current_threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected_location as isize - bin_mid as isize + 1).max(1) as usize;
        let finish = if options.find_all_matches {
            text_len
        } else {
            (expected_location + bin_mid).min(text_len) + pattern_len
        };

        let mut bits = vec![0u64; finish + 2];
        bits[finish + 1] = (1u64 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let current_location = j - 1;
            let char_match = text
                .get(current_location)
                .and_then(|c| alphabet.get(c))
                .copied()
                .unwrap_or(0);

            if compute_matches && current_location < text_len {
                match_mask[current_location] = char_match != 0;
            }

            bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                let prev_next = last_bits.get(j + 1).copied().unwrap_or(0);
                let prev_here = last_bits.get(j).copied().unwrap_or(0);
                bits[j] |= ((prev_next | prev_here) << 1) | 1 | prev_next;
            }

            if bits[j] & mask != 0 {
                final_score = compute_score(
                    pattern_len,
                    errors,
                    current_location,
                    expected_location,
                    options,
                );
                if final_score <= current_threshold {
                    current_threshold = final_score;
                    best_location = Some(current_location);
                    if current_location <= expected_location {
                        break;
                    }
                    // Already past the expected location: no point scanning
                    // further away than we are now
                    start = (2 * expected_location as isize - current_location as isize).max(1)
                        as usize;
                }
            }

            j -= 1;
        }

        let next_score = compute_score(
            pattern_len,
            errors + 1,
            expected_location,
            expected_location,
            options,
        );
        if next_score > current_threshold {
            break;
        }
        last_bits = bits;
    }

    let mut outcome = BitapOutcome {
        is_match: best_location.is_some(),
        score: f64::max(MIN_SCORE, final_score),
        ranges: Vec::new(),
    };

    if compute_matches {
        let ranges = mask_to_ranges(&match_mask, options.min_match_char_length);
        if ranges.is_empty() {
            outcome.is_match = false;
        } else if options.include_matches {
            outcome.ranges = ranges;
        }
    }

    outcome
}

/// First index `>= from` where `pattern` occurs in `text`.
fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.len() > text.len() || from > text.len() - pattern.len() {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|w| w == pattern)
        .map(|p| p + from)
}
