// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary terms go through search and highlighting over a small fixed
//! site. Results must stay sorted and every range must land inside its value.

#![no_main]

use std::sync::OnceLock;

use blockfind::{initialize, Page, SearchWidget};
use libfuzzer_sys::fuzz_target;

const PAGES: &[(&str, &str)] = &[
    (
        "/guide/setup/",
        "<p>Getting started</p><h2 id=\"install\">Install</h2><p>Run the installer.</p>\
         <h3 id=\"requirements\">Requirements</h3><ul><li>A recent toolchain</li></ul>",
    ),
    (
        "/guide/search/",
        "<h2 id=\"ranking\">Ranking &lt;T&gt;</h2><p>Lower scores rank first.\nTies keep index order.</p>",
    ),
    (
        "/blog/unicode/",
        "<h2 id=\"cjk\">搜索引擎</h2><p>全文检索 with mixed text, ﬁ ligatures and émoji 🦀</p>",
    ),
];

fuzz_target!(|term: &str| {
    static WIDGET: OnceLock<SearchWidget> = OnceLock::new();
    let widget = WIDGET.get_or_init(|| {
        let pages: Vec<Page> = PAGES
            .iter()
            .map(|(permalink, html)| Page::new(&["content"], permalink, html))
            .collect();
        initialize(&pages)
    });

    let results = widget.search(term);
    for pair in results.windows(2) {
        assert!(pair[0].score <= pair[1].score, "results out of order");
    }
    for result in &results {
        for m in &result.matches {
            let len = m.value.chars().count();
            for r in &m.ranges {
                assert!(r.start <= r.end && r.end < len, "range {:?} outside {:?}", r, m.value);
            }
        }
    }

    let _ = widget.query(term);
});
