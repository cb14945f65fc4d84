// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for page segmentation.
//!
//! Arbitrary HTML goes through the segmenter, which must never panic and must
//! always hand back a root block followed by one block per heading.

#![no_main]

use blockfind::types::ROOT_LEVEL;
use blockfind::{segment, Page};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|html: &str| {
    let page = Page::new(&["content", "fuzz"], "/fuzz/", html);
    let blocks = segment(&page);

    assert!(!blocks.is_empty(), "segmentation lost the root block");
    assert_eq!(blocks[0].level, ROOT_LEVEL);

    for block in &blocks {
        assert!(
            block.paragraphs.iter().all(|p| !p.trim().is_empty()),
            "blank paragraph survived in block {:?}",
            block.title
        );
        assert!(block.permalink.starts_with("/fuzz/"));
    }
    for block in &blocks[1..] {
        assert!(block.level > ROOT_LEVEL, "heading block at root level");
    }
});
