// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how match results get their numbers.
//!
//! Lower is better throughout, 0 is perfect. A result's score is the product
//! of its per-value match scores, each raised to `weight * norm`:
//!
//! ```text
//! score(result) = Π score_i ^ (weight_i * norm_i)
//! ```
//!
//! Since every `score_i` is in `[0, 1]`, a larger exponent pushes the factor
//! toward 0. Heavier keys (title) and shorter values (higher norm) therefore
//! pull a result up the list. A perfect value match contributes
//! `f64::EPSILON` instead of 0 so it doesn't erase the other factors.

use std::cmp::Ordering;

/// Decimal places kept on field-length norms.
const NORM_MANTISSA: f64 = 1000.0;

/// Field-length norm: `1 / sqrt(token_count)`, rounded to 3 decimals.
///
/// Tokens are runs of non-space characters. A value with no tokens gets the
/// norm of a one-token value.
pub fn field_norm(value: &str) -> f64 {
    let tokens = value.split(' ').filter(|t| !t.is_empty()).count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * NORM_MANTISSA).round() / NORM_MANTISSA
}

/// One factor of a result score.
#[inline]
pub fn weighted_factor(score: f64, weight: f64, norm: f64) -> f64 {
    let base = if score == 0.0 { f64::EPSILON } else { score };
    base.powf(weight * norm)
}

/// Order by score ascending, then by position in the index.
pub fn compare_ranked(a: (f64, usize), b: (f64, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}
