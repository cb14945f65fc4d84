// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character folding for matching.
//!
//! Unlike a whole-string normalizer, folding here is strictly one `char` in,
//! one `char` out. The matcher reports ranges against the folded text and the
//! highlighter slices the *original* value with those ranges, so a fold that
//! changed the character count (`'ß'.to_uppercase()`, `"é".nfd()`) would put
//! every highlight in the wrong place.
//!
//! - Lowercasing keeps the first scalar of `char::to_lowercase` ('İ' -> 'i').
//! - Diacritic stripping (with the `unicode-normalization` feature) keeps the
//!   base scalar of the NFD decomposition ('é' -> 'e', 'ṣ' -> 's').

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::char::decompose_canonical;

/// How to fold characters before comparing them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldOptions {
    pub case_sensitive: bool,
    pub ignore_diacritics: bool,
}

/// Fold a single character. Always returns exactly one `char`.
#[inline]
pub fn fold_char(c: char, options: FoldOptions) -> char {
    let c = if options.ignore_diacritics {
        strip_diacritic(c)
    } else {
        c
    };
    if options.case_sensitive || c.is_ascii_lowercase() {
        c
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Fold every character of `value`, preserving the character count.
pub fn fold_chars(value: &str, options: FoldOptions) -> Vec<char> {
    value.chars().map(|c| fold_char(c, options)).collect()
}

#[cfg(feature = "unicode-normalization")]
fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let mut base = None;
    decompose_canonical(c, |d| {
        if base.is_none() && !is_combining_mark(d) {
            base = Some(d);
        }
    });
    base.unwrap_or(c)
}

/// Without NFD tables there is nothing to strip; the option is a no-op.
#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritic(c: char) -> char {
    c
}

/// Unicode category Mn ranges that show up as accents in Latin and Indic text.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
