// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Block-level fuzzy search for static sites.
//!
//! Pages from a site generator's content index are split into blocks (the
//! page itself plus one block per heading), indexed once, and searched per
//! keystroke with an approximate matcher. Each hit comes back as highlighted
//! HTML snippets that a search box can drop straight into the page.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌──────────┐   ┌─────────────┐
//! │  loader  │──▶│  segment  │──▶│  index   │──▶│  search  │──▶│  highlight  │
//! │  (JSON)  │   │ (blocks)  │   │ (weights)│   │ (bitap)  │   │ (snippets)  │
//! └──────────┘   └───────────┘   └──────────┘   └──────────┘   └─────────────┘
//!                                                                     │
//!                                              widget (initialize/query)
//!                                                                     │
//!                                              shell (markup, keyboard)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use blockfind::{initialize, query, Page};
//!
//! let pages = vec![Page::new(
//!     &["content", "guide", "setup"],
//!     "/guide/setup/",
//!     "<h2 id=\"install\">Install</h2><p>Run this command</p>",
//! )];
//! let widget = initialize(&pages);
//! for result in query(&widget, "install") {
//!     println!("{} -> {}", result.raw_title, result.permalink);
//! }
//! ```

pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod loader;
pub mod scoring;
pub mod search;
pub mod segment;
pub mod shell;
pub mod testing;
pub mod types;
pub mod util;
pub mod widget;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Error, Result};
pub use fuzzy::{BitapSearcher, MatchOptions};
pub use highlight::{highlight_result, highlight_results, HighlightOptions};
pub use index::{IndexOptions, SearchIndex, WeightedKey};
pub use loader::{load_options, load_pages, load_pages_from_path, load_pages_or_empty};
pub use search::{execute, FuzzyEngine, MatchEngine, Query};
pub use segment::{segment, segment_all};
pub use shell::{render_results, toolbar_summary, FocusState, SearchView};
pub use types::{
    Block, FieldKey, FieldMatch, Level, MatchRange, MatchResult, Page, RenderableResult,
};
pub use util::{angle_brackets_to_entity, entity_to_angle_brackets, FoldOptions};
pub use widget::{initialize, initialize_from_json, query, SearchWidget, WidgetOptions};
