// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::{ExportArgs, OutputFormat};
use crate::config::{config_path, Config};
use crate::display::format_export;
use crate::error::Result;
use crate::export::{validate_destination, ExportOptions};
use crate::library::{PhotoQuery, PhotosLibrary};
use crate::photo::Photo;
use crate::schema::export::{ExportOutputJson, ExportedPhotoJson};

use super::{find_album, write_json, write_lines};

/// Export photos by uuid.
///
/// The destination is checked before Photos is contacted.
pub fn run(uuids: Vec<String>, args: ExportArgs, output: OutputFormat) -> Result<()> {
    validate_destination(&args.dest)?;
    let config = Config::load(&config_path()?)?;
    let options = args.options(&config.export);
    let lib = PhotosLibrary::new(config.gateway()?)?;
    run_impl(&lib, uuids, &args.dest, &options, output, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl(
    lib: &PhotosLibrary,
    uuids: Vec<String>,
    destination: &Path,
    options: &ExportOptions,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let photos = lib
        .photos(PhotoQuery::Uuids(uuids))?
        .collect::<Result<Vec<_>>>()?;
    let result = export_photos(lib, &photos, destination, options)?;
    write_result(&result, output, out)
}

/// Export every photo in the album named `name`.
pub fn album(name: &str, args: ExportArgs, output: OutputFormat) -> Result<()> {
    validate_destination(&args.dest)?;
    let config = Config::load(&config_path()?)?;
    let options = args.options(&config.export);
    let lib = PhotosLibrary::new(config.gateway()?)?;
    album_impl(&lib, name, &args.dest, &options, output, &mut std::io::stdout().lock())
}

pub(crate) fn album_impl(
    lib: &PhotosLibrary,
    name: &str,
    destination: &Path,
    options: &ExportOptions,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let photos = find_album(lib, name)?.photos()?;
    let result = export_photos(lib, &photos, destination, options)?;
    write_result(&result, output, out)
}

fn export_photos(
    lib: &PhotosLibrary,
    photos: &[Photo<'_>],
    destination: &Path,
    options: &ExportOptions,
) -> Result<ExportOutputJson> {
    let files = lib.export_photos(photos, destination, options)?;
    let exported = photos
        .iter()
        .zip(files)
        .map(|(photo, files)| ExportedPhotoJson {
            uuid: photo.uuid().to_string(),
            files,
        })
        .collect();
    Ok(ExportOutputJson {
        destination: destination.to_path_buf(),
        exported,
    })
}

fn write_result(
    result: &ExportOutputJson,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match output {
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Id => write_lines(
            out,
            result
                .exported
                .iter()
                .flat_map(|e| e.files.iter())
                .map(|p| p.display().to_string()),
        ),
        OutputFormat::Text => write_lines(out, format_export(result)),
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
