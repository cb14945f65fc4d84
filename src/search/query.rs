// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured queries: field leaves combined with AND / OR.

use serde::{Deserialize, Serialize};

use crate::types::FieldKey;

/// A logical query over block fields.
///
/// `And` yields the matches of every child, or nothing if any child misses.
/// `Or` yields the matches of its first child that hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Query {
    Field { key: FieldKey, term: String },
    And(Vec<Query>),
    Or(Vec<Query>),
}

impl Query {
    pub fn field(key: FieldKey, term: &str) -> Self {
        Query::Field {
            key,
            term: term.to_string(),
        }
    }

    /// The widget's query for a typed term:
    ///
    /// ```text
    /// Or[ And[title, paragraphs], title, paragraphs ]
    /// ```
    ///
    /// Blocks hitting both fields come back with both sets of matches; blocks
    /// hitting one field still come back.
    pub fn for_term(term: &str) -> Self {
        Query::Or(vec![
            Query::And(vec![
                Query::field(FieldKey::Title, term),
                Query::field(FieldKey::Paragraphs, term),
            ]),
            Query::field(FieldKey::Title, term),
            Query::field(FieldKey::Paragraphs, term),
        ])
    }
}
