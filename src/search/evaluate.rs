// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Running a query against the index.
//!
//! The query is compiled once (each leaf term becomes a [`BitapSearcher`]),
//! then evaluated block by block. A leaf produces one hit per field value
//! that matches, so a block whose title and three paragraphs match carries
//! four hits.

use super::query::Query;
use crate::fuzzy::{BitapSearcher, MatchOptions};
use crate::index::{IndexRecord, SearchIndex};
use crate::scoring::{compare_ranked, weighted_factor};
use crate::types::{Block, FieldKey, FieldMatch, MatchResult};

enum Compiled {
    Leaf {
        key: FieldKey,
        searcher: BitapSearcher,
    },
    And(Vec<Compiled>),
    Or(Vec<Compiled>),
}

fn compile(query: &Query, options: MatchOptions) -> Compiled {
    match query {
        Query::Field { key, term } => Compiled::Leaf {
            key: *key,
            searcher: BitapSearcher::new(term, options),
        },
        Query::And(children) => {
            Compiled::And(children.iter().map(|c| compile(c, options)).collect())
        }
        Query::Or(children) => Compiled::Or(children.iter().map(|c| compile(c, options)).collect()),
    }
}

/// A matched value plus what scoring needs to know about it.
struct Hit {
    field_match: FieldMatch,
    score: f64,
    norm: f64,
}

struct Evaluator<'a> {
    index: &'a SearchIndex,
    block: &'a Block,
    record: &'a IndexRecord,
}

impl Evaluator<'_> {
    fn evaluate(&self, node: &Compiled) -> Vec<Hit> {
        match node {
            Compiled::Leaf { key, searcher } => self.leaf(*key, searcher),
            Compiled::And(children) => {
                let mut hits = Vec::new();
                for child in children {
                    let found = self.evaluate(child);
                    if found.is_empty() {
                        return Vec::new();
                    }
                    hits.extend(found);
                }
                hits
            }
            Compiled::Or(children) => children
                .iter()
                .map(|child| self.evaluate(child))
                .find(|found| !found.is_empty())
                .unwrap_or_default(),
        }
    }

    fn leaf(&self, key: FieldKey, searcher: &BitapSearcher) -> Vec<Hit> {
        if !self.index.searches(key) {
            return Vec::new();
        }
        self.record
            .values(key)
            .iter()
            .filter_map(|value| {
                let text = self.index.value_text(self.block, value);
                let outcome = searcher.search_in(text);
                outcome.is_match.then(|| Hit {
                    field_match: FieldMatch {
                        key,
                        value: text.to_string(),
                        ranges: outcome.ranges,
                        ref_index: value.slot,
                    },
                    score: outcome.score,
                    norm: value.norm,
                })
            })
            .collect()
    }
}

/// Evaluate `query` over every block in `index`.
pub fn execute(index: &SearchIndex, query: &Query) -> Vec<MatchResult> {
    let options = index.options();
    let compiled = compile(query, options.matching);

    let mut results: Vec<MatchResult> = index
        .blocks()
        .iter()
        .zip(index.records())
        .enumerate()
        .filter_map(|(ref_index, (block, record))| {
            let evaluator = Evaluator {
                index,
                block,
                record,
            };
            let hits = evaluator.evaluate(&compiled);
            if hits.is_empty() {
                return None;
            }

            let score = hits
                .iter()
                .map(|hit| {
                    let norm = if options.ignore_field_norm { 1.0 } else { hit.norm };
                    weighted_factor(hit.score, index.weight(hit.field_match.key), norm)
                })
                .product();

            let matches = hits
                .into_iter()
                .map(|hit| hit.field_match)
                .filter(|m| !m.ranges.is_empty())
                .collect();

            Some(MatchResult {
                item: block.clone(),
                ref_index,
                score,
                matches,
            })
        })
        .collect();

    if options.should_sort {
        results.sort_by(|a, b| compare_ranked((a.score, a.ref_index), (b.score, b.ref_index)));
    }

    results
}
