// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with the command list ahead of the options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

const LIBRARY_COMMANDS: &[(&str, &str)] = &[
    ("info", "Show library name, version and counts"),
    ("albums", "List albums"),
    ("folders", "List folders"),
    ("photos", "List photos (all, search, uuid or range)"),
    ("selection", "List the photos selected in Photos"),
    ("import", "Import files into the library"),
    ("export", "Export photos to a directory"),
    ("export-album", "Export every photo in an album"),
    ("album", "Create, delete or edit albums"),
    ("folder", "Create or delete folders"),
];

const SETUP_COMMANDS: &[(&str, &str)] = &[
    ("config", "Show or change settings"),
    ("schema", "Output JSON Schema for JSON output"),
    ("completion", "Generate shell completions"),
];

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let width = LIBRARY_COMMANDS
        .iter()
        .chain(SETUP_COMMANDS)
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let section = |title: &str, entries: &[(&str, &str)]| {
        let mut out = colors::header(title);
        for (name, about) in entries {
            let pad = " ".repeat(width - name.len() + 2);
            out.push_str(&format!("\n  {}{pad}{about}", colors::literal(name)));
        }
        out
    };

    format!(
        "{}\n\n{}",
        section("Library:", LIBRARY_COMMANDS),
        section("Setup & Configuration:", SETUP_COMMANDS)
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  photoscript info                          Check that Photos answers
  photoscript albums                        List every album
  photoscript export <uuid> --dest ~/out    Export a photo without clobbering files",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
