// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The DOM-free half of the search box: markup and keyboard state.
//!
//! Hosts own the elements and event listeners; they hand the rendered
//! strings to `innerHTML` and feed key presses to [`FocusState`].

pub mod focus;

pub use focus::{Action, Focus, FocusState, Key, KeyPress};

use crate::highlight::no_results_item;
use crate::types::RenderableResult;
use crate::util::escape::{push_attribute, push_escaped};

/// Text of the no-results placeholder.
pub const NO_RESULTS_MESSAGE: &str = "No results";

/// What the results list currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchView {
    /// Nothing searched yet, or the input was cleared.
    #[default]
    Idle,
    NoResults,
    Results(Vec<RenderableResult>),
}

impl SearchView {
    /// The view for `results` of a query for `term`.
    pub fn from_query(term: &str, results: Vec<RenderableResult>) -> Self {
        if term.trim().is_empty() {
            SearchView::Idle
        } else if results.is_empty() {
            SearchView::NoResults
        } else {
            SearchView::Results(results)
        }
    }

    /// Number of result links on screen.
    pub fn link_count(&self) -> usize {
        match self {
            SearchView::Results(results) => results.len(),
            _ => 0,
        }
    }

    /// Markup for the results list.
    pub fn render(&self) -> String {
        match self {
            SearchView::Idle => String::new(),
            SearchView::NoResults => no_results_item(NO_RESULTS_MESSAGE),
            SearchView::Results(results) => render_results(results),
        }
    }

    /// Markup for the toolbar above the list, empty while idle.
    pub fn toolbar(&self, mobile: bool) -> String {
        match self {
            SearchView::Idle => String::new(),
            _ => toolbar_summary(self.link_count(), mobile),
        }
    }
}

/// One `<li>` per result, or the no-results placeholder.
pub fn render_results(results: &[RenderableResult]) -> String {
    if results.is_empty() {
        return no_results_item(NO_RESULTS_MESSAGE);
    }

    let mut out = String::new();
    for result in results {
        out.push_str("<li><a href=\"");
        push_attribute(&mut out, &result.permalink);
        out.push_str("\" tabindex=\"0\"><div class=\"search-result-title\">");
        out.push_str(&result.path);
        if result.has_title {
            out.push_str(&result.title);
        } else {
            // Only-paragraph hits carry the raw title
            push_escaped(&mut out, &result.title);
        }
        out.push_str("</div><ul class=\"search-result-paragraphs\">");
        out.push_str(&result.paragraphs);
        out.push_str("</ul></a></li>");
    }
    out
}

/// Result count, plus the ctrl-jump hints where there is a keyboard.
pub fn toolbar_summary(count: usize, mobile: bool) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    let mut out = format!("<div>{count} {noun}</div>");
    if !mobile {
        out.push_str("<div>ctrl+↑ to top</div><div>ctrl+↓ to bottom</div>");
    }
    out
}
