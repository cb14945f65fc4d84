// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the fallible edges of the crate.
//!
//! Searching never fails. Only loading the content index (reading a file,
//! decoding JSON, rejecting a page with no path) can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid content index JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read content index: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page {permalink:?}: {reason}")]
    InvalidPage { permalink: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
