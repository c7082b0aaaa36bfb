// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::display::format_photo_line;
use crate::error::{Error, Result};
use crate::library::PhotosLibrary;
use crate::schema::PhotoJson;

use super::{find_album, open_library, write_json};

pub fn run(
    files: Vec<PathBuf>,
    album: Option<String>,
    skip_duplicate_check: bool,
    output: OutputFormat,
) -> Result<()> {
    let files = resolve_files(files)?;
    let (lib, _) = open_library()?;
    run_impl(
        &lib,
        &files,
        album.as_deref(),
        skip_duplicate_check,
        output,
        &mut std::io::stdout().lock(),
    )
}

/// Absolute paths for `files`, which must all exist.
pub(crate) fn resolve_files(files: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    files
        .into_iter()
        .map(|path| {
            std::fs::canonicalize(&path).map_err(|e| {
                Error::InvalidArgument(format!("cannot import {}: {}", path.display(), e))
            })
        })
        .collect()
}

pub(crate) fn run_impl(
    lib: &PhotosLibrary,
    files: &[PathBuf],
    album: Option<&str>,
    skip_duplicate_check: bool,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let album = album.map(|name| find_album(lib, name)).transpose()?;

    let imported = lib.import_photos(files, album.as_ref(), skip_duplicate_check)?;
    tracing::info!(files = files.len(), imported = imported.len(), "import finished");

    match output {
        OutputFormat::Id => {
            for photo in &imported {
                writeln!(out, "{}", photo.uuid())?;
            }
        }
        OutputFormat::Json => {
            let json = imported
                .iter()
                .map(PhotoJson::from_photo)
                .collect::<Result<Vec<_>>>()?;
            write_json(out, &json)?;
        }
        OutputFormat::Text => {
            for photo in &imported {
                writeln!(out, "{}", format_photo_line(&PhotoJson::from_photo(photo)?))?;
            }
            let noun = if imported.len() == 1 { "photo" } else { "photos" };
            writeln!(out, "Imported {} {noun}", imported.len())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
