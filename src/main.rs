// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use blockfind::{
    highlight_result, load_options, load_pages_from_path, segment, Block, Page,
    RenderableResult, SearchView, SearchWidget, WidgetOptions,
};

mod cli;
use cli::display::{self, level_badge, pad_left, score_value, snippet, themed, use_colors};
use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> blockfind::Result<()> {
    let options = match &cli.options {
        Some(path) => load_options::<WidgetOptions>(path)?,
        None => WidgetOptions::default(),
    };

    match cli.command {
        Commands::Search {
            index,
            term,
            limit,
            json,
        } => run_search(&index, &term, limit, json, options),
        Commands::Blocks { index, page, json } => run_blocks(&index, page.as_deref(), json),
        Commands::Render {
            index,
            term,
            mobile,
        } => run_render(&index, &term, mobile, options),
    }
}

#[derive(Serialize)]
struct ScoredResult<'a> {
    score: f64,
    #[serde(flatten)]
    result: &'a RenderableResult,
}

fn run_search(
    index: &Path,
    term: &str,
    limit: usize,
    json: bool,
    options: WidgetOptions,
) -> blockfind::Result<()> {
    let pages = load_pages_from_path(index)?;
    let widget = SearchWidget::with_options(&pages, options);
    let term = term.trim();

    let matches = widget.search(term);
    let rendered: Vec<(f64, RenderableResult)> = matches
        .iter()
        .filter_map(|m| {
            highlight_result(m, term, widget.highlight_options()).map(|r| (m.score, r))
        })
        .take(limit)
        .collect();

    if json {
        let out: Vec<ScoredResult> = rendered
            .iter()
            .map(|(score, result)| ScoredResult {
                score: *score,
                result,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let colored = use_colors();
    display::section_top(&format!(
        "{} of {} blocks match \"{}\"",
        rendered.len(),
        widget.block_count(),
        term
    ));
    if rendered.is_empty() {
        display::row(&themed(display::GRAY, &[], "no results"));
    }
    for (rank, (score, result)) in rendered.iter().enumerate() {
        let heading = snippet(&format!("{}{}", result.path, result.title), colored);
        display::row(&format!(
            "{} {}  {}",
            pad_left(&(rank + 1).to_string(), 3),
            score_value(*score),
            heading
        ));
        display::row(&format!(
            "             {}",
            themed(display::BLUE, &[display::DIM], &result.permalink)
        ));
        for line in snippet(&result.paragraphs, colored).lines() {
            display::row(&format!("             {}", line));
        }
    }
    display::section_bot();
    Ok(())
}

fn run_blocks(index: &Path, permalink: Option<&str>, json: bool) -> blockfind::Result<()> {
    let pages = load_pages_from_path(index)?;
    let selected: Vec<&Page> = pages
        .iter()
        .filter(|p| permalink.is_none_or(|wanted| p.permalink == wanted))
        .collect();

    if json {
        let blocks: Vec<Block> = selected.iter().flat_map(|p| segment(p)).collect();
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    for page in selected {
        display::section_top(&page.permalink);
        for block in segment(page) {
            let indent = "  ".repeat(usize::from(block.level.saturating_sub(1)));
            display::row(&format!(
                "{}{} {}  {}",
                indent,
                level_badge(block.level),
                block.title,
                themed(display::GRAY, &[], &format!("({} paragraphs)", block.paragraphs.len()))
            ));
        }
        display::section_bot();
    }
    Ok(())
}

fn run_render(
    index: &Path,
    term: &str,
    mobile: bool,
    options: WidgetOptions,
) -> blockfind::Result<()> {
    let pages = load_pages_from_path(index)?;
    let widget = SearchWidget::with_options(&pages, options);
    let view = SearchView::from_query(term, widget.query(term));

    println!("{}", view.toolbar(mobile));
    println!("{}", view.render());
    Ok(())
}
