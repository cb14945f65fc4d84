// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page segmentation: one page in, a root block plus one block per heading out.
//!
//! Two steps, kept apart so each is testable on its own:
//!
//! 1. [`tree::parse`] turns the page body into classified [`ContentNode`]s.
//! 2. [`blocks::build_blocks`] walks those nodes with a stack of open blocks.

pub mod blocks;
pub mod tree;

pub use blocks::{build_blocks, root_block, HEADING_SEPARATOR, PAGE_SEPARATOR};
pub use tree::{parse, ContentNode};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::types::{Block, Page};

/// Segment one page into blocks.
pub fn segment(page: &Page) -> Vec<Block> {
    let nodes = tree::parse(&page.html_string);
    let blocks = blocks::build_blocks(page, nodes);
    debug!(
        permalink = %page.permalink,
        blocks = blocks.len(),
        "segmented page"
    );
    blocks
}

/// Segment every page and flatten, keeping page order.
#[cfg(feature = "parallel")]
pub fn segment_all(pages: &[Page]) -> Vec<Block> {
    pages
        .par_iter()
        .map(segment)
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Segment every page and flatten, keeping page order.
#[cfg(not(feature = "parallel"))]
pub fn segment_all(pages: &[Page]) -> Vec<Block> {
    pages.iter().flat_map(segment).collect()
}
