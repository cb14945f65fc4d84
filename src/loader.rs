// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content index loading.
//!
//! The site generator emits one JSON array of pages. Reading or decoding it
//! can fail; a single page with no permalink only costs that page.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::types::Page;

/// Decode a content index, skipping pages that can't be linked to.
pub fn load_pages(json: &str) -> Result<Vec<Page>> {
    let pages: Vec<Page> = serde_json::from_str(json)?;
    let total = pages.len();

    let pages: Vec<Page> = pages
        .into_iter()
        .filter(|page| match validate_page(page) {
            Ok(()) => true,
            Err(e) => {
                warn!("skipping page: {e}");
                false
            }
        })
        .collect();

    debug!(total, kept = pages.len(), "loaded content index");
    Ok(pages)
}

/// Read and decode a content index file.
pub fn load_pages_from_path(path: &Path) -> Result<Vec<Page>> {
    let content = fs::read_to_string(path)?;
    load_pages(&content)
}

/// [`load_pages`], degrading to no pages on failure.
pub fn load_pages_or_empty(json: &str) -> Vec<Page> {
    load_pages(json).unwrap_or_else(|e| {
        error!("content index unavailable, search disabled: {e}");
        Vec::new()
    })
}

/// Read a JSON options file. Missing keys take their defaults.
pub fn load_options<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// A page is usable as long as it has somewhere to link to.
pub fn validate_page(page: &Page) -> Result<()> {
    if page.permalink.trim().is_empty() {
        return Err(Error::InvalidPage {
            permalink: page.permalink.clone(),
            reason: format!("empty permalink (path {:?})", page.full_path.join("/")),
        });
    }
    Ok(())
}
