// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: where a typed term becomes ranked match results.
//!
//! The engine sits behind [`MatchEngine`] so the approximate matcher can be
//! swapped without touching segmentation or highlighting. [`FuzzyEngine`]
//! (Bitap over [`SearchIndex`]) is what the widget uses by default.

mod evaluate;
mod query;

pub use evaluate::execute;
pub use query::Query;

use tracing::debug;

use crate::index::{IndexOptions, SearchIndex};
use crate::types::{Block, MatchResult};

/// Anything that can index blocks and answer structured queries.
pub trait MatchEngine {
    type Index;

    fn index(&self, blocks: Vec<Block>, options: &IndexOptions) -> Self::Index;

    fn search(&self, index: &Self::Index, query: &Query) -> Vec<MatchResult>;

    fn block_count(&self, index: &Self::Index) -> usize;
}

/// Bitap matching over a [`SearchIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyEngine;

impl MatchEngine for FuzzyEngine {
    type Index = SearchIndex;

    fn index(&self, blocks: Vec<Block>, options: &IndexOptions) -> SearchIndex {
        SearchIndex::build(blocks, options.clone())
    }

    fn search(&self, index: &SearchIndex, query: &Query) -> Vec<MatchResult> {
        execute(index, query)
    }

    fn block_count(&self, index: &SearchIndex) -> usize {
        index.len()
    }
}

/// Search `index` for `term` with the widget's query shape.
///
/// The term is trimmed; an empty term searches nothing and returns nothing.
pub fn search<E: MatchEngine>(engine: &E, index: &E::Index, term: &str) -> Vec<MatchResult> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let results = engine.search(index, &Query::for_term(term));
    debug!(term, results = results.len(), "executed query");
    results
}
