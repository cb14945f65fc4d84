// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: flatten every page's blocks into one searchable set.
//!
//! The "index" here is deliberately thin. Blocks stay as they are; next to
//! each we keep a record of which field values are worth searching and the
//! length norm of each. Everything else (pattern compilation, scanning) is
//! per query, since a typical site has a few thousand blocks at most.
//!
//! Key weights are normalized to sum to 1 at build time, so `[2, 1]` and
//! `[4, 2]` rank identically.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fuzzy::MatchOptions;
use crate::scoring::field_norm;
use crate::types::{Block, FieldKey};

/// A searchable field and how much it counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedKey {
    #[serde(rename = "name")]
    pub key: FieldKey,
    pub weight: f64,
}

/// Index configuration. Every field is optional when read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexOptions {
    /// Sort results best-first. Off keeps index order.
    pub should_sort: bool,
    /// Treat every value as one token long when scoring.
    pub ignore_field_norm: bool,
    pub keys: Vec<WeightedKey>,
    #[serde(flatten)]
    pub matching: MatchOptions,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            should_sort: true,
            ignore_field_norm: false,
            keys: vec![
                WeightedKey {
                    key: FieldKey::Title,
                    weight: 2.0,
                },
                WeightedKey {
                    key: FieldKey::Paragraphs,
                    weight: 1.0,
                },
            ],
            matching: MatchOptions::default(),
        }
    }
}

/// One searchable value of a block's field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedValue {
    /// Slot in `paragraphs`, `None` for the title.
    pub slot: Option<usize>,
    pub norm: f64,
}

/// Searchable values of one block, per field. Blank values are left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexRecord {
    pub title: Vec<IndexedValue>,
    pub paragraphs: Vec<IndexedValue>,
}

impl IndexRecord {
    fn from_block(block: &Block) -> Self {
        let title = if block.title.trim().is_empty() {
            Vec::new()
        } else {
            vec![IndexedValue {
                slot: None,
                norm: field_norm(&block.title),
            }]
        };

        let paragraphs = block
            .paragraphs
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.trim().is_empty())
            .map(|(slot, p)| IndexedValue {
                slot: Some(slot),
                norm: field_norm(p),
            })
            .collect();

        Self { title, paragraphs }
    }

    pub fn values(&self, key: FieldKey) -> &[IndexedValue] {
        match key {
            FieldKey::Title => &self.title,
            FieldKey::Paragraphs => &self.paragraphs,
        }
    }
}

/// All blocks of the site plus what the matcher needs to score them.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    blocks: Vec<Block>,
    records: Vec<IndexRecord>,
    options: IndexOptions,
    /// Normalized weight per key, same order as `options.keys`.
    weights: Vec<(FieldKey, f64)>,
}

impl SearchIndex {
    pub fn build(blocks: Vec<Block>, options: IndexOptions) -> Self {
        let records: Vec<IndexRecord> = blocks.iter().map(IndexRecord::from_block).collect();
        let weights = normalize_weights(&options.keys);

        debug!(
            blocks = blocks.len(),
            values = records
                .iter()
                .map(|r| r.title.len() + r.paragraphs.len())
                .sum::<usize>(),
            "built search index"
        );

        Self {
            blocks,
            records,
            options,
            weights,
        }
    }

    pub fn empty() -> Self {
        Self::build(Vec::new(), IndexOptions::default())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Normalized weight of `key`; 0 for keys the index doesn't search.
    pub fn weight(&self, key: FieldKey) -> f64 {
        self.weights
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(0.0, |(_, w)| *w)
    }

    /// Whether `key` is one of the configured search keys.
    pub fn searches(&self, key: FieldKey) -> bool {
        self.weights.iter().any(|(k, _)| *k == key)
    }

    /// The text of one indexed value.
    pub fn value_text<'a>(&'a self, block: &'a Block, value: &IndexedValue) -> &'a str {
        match value.slot {
            None => &block.title,
            Some(slot) => &block.paragraphs[slot],
        }
    }
}

/// Weights scaled to sum to 1. Non-positive weights count as 1.
fn normalize_weights(keys: &[WeightedKey]) -> Vec<(FieldKey, f64)> {
    let sanitized: Vec<(FieldKey, f64)> = keys
        .iter()
        .map(|k| (k.key, if k.weight > 0.0 { k.weight } else { 1.0 }))
        .collect();
    let total: f64 = sanitized.iter().map(|(_, w)| w).sum();
    sanitized
        .into_iter()
        .map(|(key, w)| (key, w / total))
        .collect()
}
