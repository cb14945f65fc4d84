// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;

use blockfind::types::ROOT_LEVEL;
use blockfind::{load_pages_from_path, Block, Page};

pub use blockfind::testing::{heading_html, make_block, make_page};

/// Path to the sample content index.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/content_index.json")
}

/// Pages of the sample content index (the one without a permalink dropped).
pub fn fixture_pages() -> Vec<Page> {
    load_pages_from_path(&fixture_path()).expect("fixture should load")
}

/// Every page contributes its root first, and levels only go 1..=6.
pub fn assert_blocks_well_formed(pages: &[Page], blocks: &[Block]) {
    let roots: Vec<&Block> = blocks.iter().filter(|b| b.is_root()).collect();
    assert_eq!(roots.len(), pages.len(), "one root per page");
    if let Some(first) = blocks.first() {
        assert_eq!(first.level, ROOT_LEVEL, "first block is a page root");
    }
    for block in blocks {
        assert!((1..=6).contains(&block.level), "level {} out of range", block.level);
        assert!(
            block.paragraphs.iter().all(|p| !p.trim().is_empty()),
            "blank paragraph in {:?}",
            block.title
        );
    }
}
