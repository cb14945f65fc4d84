// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the blockfind CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `BLOCKFIND_THEME` first, then `COLORFGBG`, then defaults to dark.
//! `NO_COLOR` and non-TTY stdout turn color off entirely.
//!
//! Results come out of the library as HTML snippets; [`snippet`] turns them
//! back into terminal text, with highlight spans shown in color.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Node};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BLOCKFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 and up (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI codes excluded
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print an open row: │ content
///
/// Snippets run past the box width, so rows have no right border.
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{} {}", border, content);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal text for a highlighted HTML snippet.
///
/// Highlight spans become colored runs, list items start new lines, other
/// tags are dropped. The parser decodes entities, `&nbsp;` included.
pub fn snippet(html: &str, colored: bool) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    push_snippet(fragment.root_element(), colored, &mut out);
    out.replace('\u{a0}', " ")
}

fn push_snippet(element: ElementRef<'_>, colored: bool, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                if e.name() == "li" && !out.is_empty() {
                    out.push('\n');
                }
                let highlight =
                    colored && e.name() == "span" && e.classes().any(|c| c.starts_with("highlight-"));
                if highlight {
                    out.push_str(BOLD);
                    out.push_str(&BRIGHT_YELLOW());
                }
                push_snippet(child, colored, out);
                if highlight {
                    out.push_str(RESET);
                }
            }
            _ => {}
        }
    }
}

/// Block level as a short badge: `page`, `h2` .. `h6`.
pub fn level_badge(level: u8) -> String {
    let label = if level <= 1 {
        "page".to_string()
    } else {
        format!("h{level}")
    };
    if !use_colors() {
        return format!("[{label}]");
    }
    let color = match level {
        0 | 1 => GREEN(),
        2 => BLUE(),
        3 => CYAN(),
        _ => MAGENTA(),
    };
    format!("{}[{}]{}", color, label, RESET)
}

/// Match score, lower is better.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.4}", score);
    if !use_colors() {
        return text;
    }
    let color = if score < 0.01 {
        GREEN()
    } else if score < 0.2 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Left-pad to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}
