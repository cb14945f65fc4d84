// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content nodes -> blocks.
//!
//! A pure function over the node list. Open blocks live on a stack keyed by
//! level: a heading pops everything at or below its own depth, so whatever is
//! left on top is its parent. Content always lands on the top of the stack,
//! which is the most recently opened block.
//!
//! The root (level 1) is pushed first and never popped, since headings only
//! go from 2 to 6.

use tracing::warn;

use super::tree::ContentNode;
use crate::types::{Block, Level, Page, ROOT_LEVEL};
use crate::util::escape::push_escaped;

/// Between middle path segments of a page's breadcrumb.
pub const PAGE_SEPARATOR: &str = " <span class='separator'>/</span> ";

/// After a parent title in a heading block's breadcrumb.
pub const HEADING_SEPARATOR: &str = "<span class='separator'>＞</span>";

/// Build the page's blocks: its root followed by one block per heading.
pub fn build_blocks(page: &Page, nodes: Vec<ContentNode>) -> Vec<Block> {
    let mut open = OpenBlocks::new(root_block(page));

    for node in nodes {
        match node {
            ContentNode::Heading {
                level,
                text,
                anchor,
            } => {
                let permalink = match anchor {
                    Some(anchor) => format!("{}#{}", page.permalink, anchor),
                    None => page.permalink.clone(),
                };
                open.open_heading(level, text, permalink);
            }
            ContentNode::CodeFence { code: Some(code) } => open.push_paragraph(code),
            ContentNode::CodeFence { code: None } => {
                warn!(
                    permalink = %page.permalink,
                    "skipping code fence without a nested <code> element"
                );
            }
            ContentNode::List { items } => {
                for item in items {
                    open.push_paragraph(item);
                }
            }
            ContentNode::Text(text) => open.push_paragraph(text),
        }
    }

    open.finish()
}

/// The level-1 block standing for the whole page.
///
/// Title is the last path segment; the breadcrumb is built from the segments
/// between the first (the content section) and the last.
pub fn root_block(page: &Page) -> Block {
    let segments = page.segments();
    let title = segments
        .last()
        .map(|s| s.to_string())
        .unwrap_or_else(|| page.permalink.clone());

    let mut path = String::new();
    if segments.len() > 2 {
        for segment in &segments[1..segments.len() - 1] {
            push_escaped(&mut path, segment);
            path.push_str(PAGE_SEPARATOR);
        }
    }

    Block {
        title,
        path,
        permalink: page.permalink.clone(),
        level: ROOT_LEVEL,
        paragraphs: Vec::new(),
    }
}

struct OpenBlocks {
    blocks: Vec<Block>,
    /// Indices into `blocks`, levels strictly increasing from bottom to top.
    stack: Vec<usize>,
}

impl OpenBlocks {
    fn new(root: Block) -> Self {
        Self {
            blocks: vec![root],
            stack: vec![0],
        }
    }

    fn open_heading(&mut self, level: Level, title: String, permalink: String) {
        while self.stack.len() > 1 && self.top().level >= level {
            self.stack.pop();
        }

        let parent = self.top();
        let mut path = String::with_capacity(parent.path.len() + parent.title.len() + 32);
        path.push_str(&parent.path);
        push_escaped(&mut path, &parent.title);
        path.push_str(HEADING_SEPARATOR);

        self.blocks.push(Block {
            title,
            path,
            permalink,
            level,
            paragraphs: Vec::new(),
        });
        self.stack.push(self.blocks.len() - 1);
    }

    fn push_paragraph(&mut self, text: String) {
        if text.trim().is_empty() {
            return;
        }
        let top = self.stack[self.stack.len() - 1];
        self.blocks[top].paragraphs.push(text);
    }

    fn top(&self) -> &Block {
        &self.blocks[self.stack[self.stack.len() - 1]]
    }

    fn finish(self) -> Vec<Block> {
        self.blocks
    }
}
