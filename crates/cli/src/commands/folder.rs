// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::{FolderCommand, OutputFormat};
use crate::display::format_folder;
use crate::error::Result;
use crate::library::PhotosLibrary;
use crate::schema::FolderJson;

use super::{find_folder, open_library, write_json, write_lines};

/// Execute a folder subcommand.
pub fn run(cmd: FolderCommand) -> Result<()> {
    let (lib, _) = open_library()?;
    run_impl(&lib, cmd, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl(
    lib: &PhotosLibrary,
    cmd: FolderCommand,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        FolderCommand::Create { path, output } => {
            let folder = lib.make_folders(path.0.as_slice())?;
            match output {
                OutputFormat::Id => writeln!(out, "{}", folder.uuid())?,
                OutputFormat::Json => write_json(out, &FolderJson::from_folder(&folder)?)?,
                OutputFormat::Text => {
                    write_lines(out, format_folder(&FolderJson::from_folder(&folder)?))?
                }
            }
        }
        FolderCommand::Delete { path } => {
            let folder = find_folder(lib, path.0.as_slice())?;
            lib.delete_folder(&folder)?;
            writeln!(out, "Deleted folder {}", path.0.join("/"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "folder_tests.rs"]
mod tests;
