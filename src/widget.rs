// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two calls a host makes: build once, query per keystroke.
//!
//! ```ignore
//! let widget = blockfind::initialize(&pages);
//! let results = blockfind::query(&widget, "install");
//! ```
//!
//! The widget owns its index. Nothing here keeps per-query state, so a single
//! widget can serve concurrent readers.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::highlight::{highlight_results, HighlightOptions};
use crate::index::IndexOptions;
use crate::loader::load_pages_or_empty;
use crate::search::{self, FuzzyEngine, MatchEngine};
use crate::segment::segment_all;
use crate::types::{MatchResult, Page, RenderableResult};

/// Index and snippet settings together, as read from an options file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    pub index: IndexOptions,
    pub highlight: HighlightOptions,
}

/// A built index plus everything needed to answer queries against it.
pub struct SearchWidget<E: MatchEngine = FuzzyEngine> {
    engine: E,
    index: E::Index,
    highlight: HighlightOptions,
}

impl SearchWidget<FuzzyEngine> {
    pub fn new(pages: &[Page]) -> Self {
        Self::with_options(pages, WidgetOptions::default())
    }

    pub fn with_options(pages: &[Page], options: WidgetOptions) -> Self {
        Self::with_engine(FuzzyEngine, pages, &options.index, options.highlight)
    }
}

impl<E: MatchEngine> SearchWidget<E> {
    /// Segment `pages` and index the blocks with `engine`.
    pub fn with_engine(
        engine: E,
        pages: &[Page],
        index_options: &IndexOptions,
        highlight: HighlightOptions,
    ) -> Self {
        let blocks = segment_all(pages);
        let index = engine.index(blocks, index_options);
        info!(
            pages = pages.len(),
            blocks = engine.block_count(&index),
            "search widget ready"
        );
        Self {
            engine,
            index,
            highlight,
        }
    }

    /// Raw engine results for `term`, best first.
    pub fn search(&self, term: &str) -> Vec<MatchResult> {
        search::search(&self.engine, &self.index, term)
    }

    /// Highlighted results for `term`, ready to render.
    pub fn query(&self, term: &str) -> Vec<RenderableResult> {
        let term = term.trim();
        highlight_results(&self.search(term), term, &self.highlight)
    }

    pub fn block_count(&self) -> usize {
        self.engine.block_count(&self.index)
    }

    pub fn index(&self) -> &E::Index {
        &self.index
    }

    pub fn highlight_options(&self) -> &HighlightOptions {
        &self.highlight
    }
}

/// Build a widget over `pages` with default options.
pub fn initialize(pages: &[Page]) -> SearchWidget {
    SearchWidget::new(pages)
}

/// Build a widget straight from content index JSON.
///
/// A bad index leaves search empty rather than failing the host.
pub fn initialize_from_json(json: &str) -> SearchWidget {
    SearchWidget::new(&load_pages_or_empty(json))
}

pub fn query(widget: &SearchWidget, term: &str) -> Vec<RenderableResult> {
    widget.query(term)
}
