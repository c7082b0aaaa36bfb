// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! Used with `#[command(flatten)]` by commands that share the same flags.

use std::path::PathBuf;

use clap::Args;

use crate::export::ExportOptions;

/// Flags common to the export commands.
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    /// Directory to export into (must exist)
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dest: PathBuf,

    /// Export the original file instead of the edited version
    #[arg(long)]
    pub original: bool,

    /// Replace files with the same name instead of numbering new ones
    #[arg(long)]
    pub overwrite: bool,

    /// Seconds Photos may spend on each photo [default: export.timeout_secs]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Select the exported files in Finder
    #[arg(long)]
    pub reveal: bool,

    /// Skip resource forks and extended attributes
    #[arg(long)]
    pub norsrc: bool,
}

impl ExportArgs {
    /// Options for these flags, with unset values from `config`.
    pub fn options(&self, config: &crate::config::ExportConfig) -> ExportOptions {
        ExportOptions {
            original: self.original,
            overwrite: self.overwrite,
            timeout_secs: self.timeout.unwrap_or(config.timeout_secs),
            reveal_in_finder: self.reveal,
            norsrc: self.norsrc || config.norsrc,
        }
    }
}

/// How `photos` picks photos. At most one may be given.
#[derive(Args, Clone, Debug, Default)]
#[group(multiple = false)]
pub struct PhotoSelection {
    /// Photos matching a text search
    #[arg(long, short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Photos with these uuids (comma-separated or repeated)
    #[arg(long, short = 'u', value_delimiter = ',')]
    pub uuid: Vec<String>,

    /// Zero-based half-open range, e.g. 0:10
    #[arg(long, short = 'r', value_name = "START:STOP", value_parser = parse_range)]
    pub range: Option<(usize, usize)>,
}

/// Parse `START:STOP`.
pub fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let (start, stop) = s
        .split_once(':')
        .ok_or_else(|| "expected START:STOP".to_string())?;
    let start = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start '{start}'"))?;
    let stop = stop
        .trim()
        .parse()
        .map_err(|_| format!("invalid stop '{stop}'"))?;
    Ok((start, stop))
}

/// Folder names from the top level down, written `Travel/2024`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderPath(pub Vec<String>);

/// Split a `/`-separated folder path, ignoring empty segments.
pub fn parse_folder_path(s: &str) -> Result<FolderPath, String> {
    let parts: Vec<String> = s
        .split('/')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();
    if parts.is_empty() {
        Err("folder path cannot be empty".to_string())
    } else {
        Ok(FolderPath(parts))
    }
}
