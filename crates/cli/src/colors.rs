// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used by help output.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}\x1b[0m")
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples help block when colors are enabled.
///
/// Lines ending in `:` are headers; `command    description` lines get the
/// command painted as a literal.
pub fn examples(text: &str) -> String {
    paint_examples(text, should_colorize())
}

pub(crate) fn paint_examples(text: &str, colorize: bool) -> String {
    if !colorize {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", literal(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Find where the description starts (2+ spaces after the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let mut space_start = None;
    for (i, c) in line.char_indices() {
        match (c, space_start) {
            (' ', None) => space_start = Some(i),
            (' ', Some(_)) => {}
            (_, Some(start)) if i - start >= 2 => return Some(start),
            _ => space_start = None,
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
