// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the segmenter, the matcher, and the highlighter.
//!
//! Escaping keeps arbitrary page text safe to splice into result markup.
//! Folding makes matching case- and accent-insensitive without shifting a
//! single character offset.

pub mod escape;
pub mod normalize;

pub use escape::{angle_brackets_to_entity, entity_to_angle_brackets};
pub use normalize::{fold_char, fold_chars, FoldOptions};
