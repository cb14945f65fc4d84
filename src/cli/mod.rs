// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the blockfind command-line interface.
//!
//! Three subcommands over a content index JSON file: `search` to query it the
//! way the widget would, `blocks` to see how pages were segmented, and
//! `render` to print the exact markup the search box would receive.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blockfind",
    about = "Fuzzy block-level search over a static site's content index",
    version
)]
pub struct Cli {
    /// JSON file with index and highlight options (missing keys use defaults)
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a content index and display ranked blocks
    Search {
        /// Path to the content index (JSON array of pages)
        index: PathBuf,

        /// Search term
        term: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the blocks each page is split into
    Blocks {
        /// Path to the content index (JSON array of pages)
        index: PathBuf,

        /// Only show the page with this permalink
        #[arg(short, long)]
        page: Option<String>,

        /// Print blocks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the search box markup for a term
    Render {
        /// Path to the content index (JSON array of pages)
        index: PathBuf,

        /// Search term
        term: String,

        /// Leave out the keyboard hints, as on touch devices
        #[arg(long)]
        mobile: bool,
    },
}
