// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{parse_folder_path, parse_range, ExportArgs, FolderPath, PhotoSelection};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "photoscript")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Script Apple Photos from the command line")]
#[command(
    long_about = "Script Apple Photos from the command line.\n\n\
    List, import and export photos, albums and folders. Calls that time out are retried after restarting Photos."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Log more (-v info, -vv debug); overrides RUST_LOG
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Library
    // ─────────────────────────────────────────────────────────────────────────
    /// Show library name, version and counts
    Info {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List albums
    #[command(after_help = colors::examples("\
Examples:
  photoscript albums                List every album with its path
  photoscript albums --top-level    Only albums outside folders
  photoscript albums -o id          Only uuids"))]
    Albums {
        /// Only albums not inside a folder
        #[arg(long)]
        top_level: bool,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List folders
    Folders {
        /// Only folders not inside another folder
        #[arg(long)]
        top_level: bool,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List photos
    #[command(after_help = colors::examples("\
Examples:
  photoscript photos -n 20               First 20 photos in the library
  photoscript photos -s beach            Photos matching a search
  photoscript photos -r 100:110          The 100th to 109th photo
  photoscript photos -u <uuid> -o json   One photo as JSON"))]
    Photos {
        #[command(flatten)]
        selection: PhotoSelection,

        /// Stop after this many photos
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List the photos selected in Photos
    Selection {
        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Import files into the library
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  photoscript import ~/Desktop/*.jpeg            Import into the library
  photoscript import a.heic --album Lisbon       Import into an album
  photoscript import a.heic --skip-duplicates    Do not ask about duplicates")
    )]
    Import {
        /// Files to import
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Album to import into, by name
        #[arg(long, short = 'a', value_parser = non_empty_string)]
        album: Option<String>,

        /// Skip Photos' duplicate check
        #[arg(long = "skip-duplicates")]
        skip_duplicate_check: bool,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "id")]
        output: OutputFormat,
    },

    /// Export photos to a directory
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  photoscript export <uuid> -d ~/out              Export the edited version
  photoscript export <uuid> -d ~/out --original   Export the original
  photoscript export <uuid> -d ~/out --overwrite  Replace existing files

Existing files are never replaced unless --overwrite is given; a colliding
name gets the first free ' (N)' suffix.")
    )]
    Export {
        /// Photo uuids
        #[arg(required = true)]
        uuids: Vec<String>,

        #[command(flatten)]
        export: ExportArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Export every photo in an album
    #[command(arg_required_else_help = true)]
    ExportAlbum {
        /// Album name
        #[arg(value_parser = non_empty_string)]
        album: String,

        #[command(flatten)]
        export: ExportArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Create, delete or edit albums
    #[command(subcommand)]
    Album(AlbumCommand),

    /// Create or delete folders
    #[command(subcommand)]
    Folder(FolderCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Output JSON Schema for commands with JSON output
    ///
    /// Use these schemas to validate JSON output or generate type definitions.
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  photoscript schema photo     Schema for 'photoscript photos -o json'
  photoscript schema export    Schema for 'photoscript export -o json'

Available schemas: info, photo, album, folder, export, config")
    )]
    Schema(SchemaCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  photoscript completion bash > ~/.local/share/bash-completion/completions/photoscript
  photoscript completion zsh > ~/.zfunc/_photoscript
  photoscript completion fish > ~/.config/fish/completions/photoscript.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Album commands.
#[derive(Subcommand)]
pub enum AlbumCommand {
    /// Create an album, inside a folder path if given
    #[command(after_help = colors::examples("\
Examples:
  photoscript album create Lisbon                       Top-level album
  photoscript album create Lisbon --folder Travel/2024  Creates missing folders"))]
    Create {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Folder path such as Travel/2024; missing folders are created
        #[arg(long, short = 'f', value_parser = parse_folder_path)]
        folder: Option<FolderPath>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete an album; its photos stay in the library
    Delete {
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Add library photos to an album
    #[command(arg_required_else_help = true)]
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Photo uuids
        #[arg(required = true)]
        uuids: Vec<String>,
    },

    /// Remove photos from an album
    ///
    /// Photos has no way to remove a photo from an album, so the album is
    /// recreated without them. The album gets a new uuid.
    #[command(arg_required_else_help = true)]
    Remove {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Photo uuids
        #[arg(required = true)]
        uuids: Vec<String>,
    },
}

/// Folder commands.
#[derive(Subcommand)]
pub enum FolderCommand {
    /// Create a folder path, reusing folders that exist
    #[command(after_help = colors::examples("\
Examples:
  photoscript folder create Travel/2024    Create Travel and Travel/2024 as needed"))]
    Create {
        #[arg(value_parser = parse_folder_path)]
        path: FolderPath,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete a folder and everything in it
    Delete {
        #[arg(value_parser = parse_folder_path)]
        path: FolderPath,
    },
}

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the configuration file path
    Path,

    /// Set a configuration value
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  photoscript config set retry.max_attempts 5
  photoscript config set retry.backoff_secs 2.5
  photoscript config set script.path ~/photoscript.applescript

Keys: retry.enabled, retry.max_attempts, retry.backoff_secs, script.path,
      script.app_name, export.timeout_secs, export.norsrc")
    )]
    Set { key: String, value: String },
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'photoscript info' JSON output
    Info,
    /// Output JSON Schema for one photo in 'photoscript photos' JSON output
    Photo,
    /// Output JSON Schema for one album in 'photoscript albums' JSON output
    Album,
    /// Output JSON Schema for one folder in 'photoscript folders' JSON output
    Folder,
    /// Output JSON Schema for 'photoscript export' JSON output
    Export,
    /// Output JSON Schema for the configuration file
    Config,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
