// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Listing commands: albums, folders, photos and the selection.

use std::io::Write;

use crate::cli::{OutputFormat, PhotoSelection};
use crate::display::{format_album_line, format_folder, format_photo_line};
use crate::error::Result;
use crate::library::{PhotoQuery, PhotosLibrary};
use crate::photo::Photo;
use crate::schema::{AlbumJson, FolderJson, PhotoJson};

use super::{open_library, write_json, write_lines};

pub fn albums(top_level: bool, output: OutputFormat) -> Result<()> {
    let (lib, _) = open_library()?;
    albums_impl(&lib, top_level, output, &mut std::io::stdout().lock())
}

pub(crate) fn albums_impl(
    lib: &PhotosLibrary,
    top_level: bool,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let albums = lib.albums(top_level)?;
    match output {
        OutputFormat::Id => write_lines(out, albums.iter().map(|a| a.uuid())),
        OutputFormat::Json => {
            let json = albums
                .iter()
                .map(AlbumJson::from_album)
                .collect::<Result<Vec<_>>>()?;
            write_json(out, &json)
        }
        OutputFormat::Text => {
            for album in &albums {
                writeln!(out, "{}", format_album_line(&AlbumJson::from_album(album)?))?;
            }
            Ok(())
        }
    }
}

pub fn folders(top_level: bool, output: OutputFormat) -> Result<()> {
    let (lib, _) = open_library()?;
    folders_impl(&lib, top_level, output, &mut std::io::stdout().lock())
}

pub(crate) fn folders_impl(
    lib: &PhotosLibrary,
    top_level: bool,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let folders = lib.folders(top_level)?;
    match output {
        OutputFormat::Id => write_lines(out, folders.iter().map(|f| f.uuid())),
        OutputFormat::Json => {
            let json = folders
                .iter()
                .map(FolderJson::from_folder)
                .collect::<Result<Vec<_>>>()?;
            write_json(out, &json)
        }
        OutputFormat::Text => {
            for folder in &folders {
                write_lines(out, format_folder(&FolderJson::from_folder(folder)?))?;
            }
            Ok(())
        }
    }
}

/// Which photos a `photos` invocation asks for.
pub(crate) fn query(selection: PhotoSelection) -> PhotoQuery {
    if let Some(text) = selection.search {
        PhotoQuery::Search(text)
    } else if let Some((start, stop)) = selection.range {
        PhotoQuery::Range { start, stop }
    } else if !selection.uuid.is_empty() {
        PhotoQuery::Uuids(selection.uuid)
    } else {
        PhotoQuery::All
    }
}

pub fn photos(selection: PhotoSelection, limit: Option<usize>, output: OutputFormat) -> Result<()> {
    let (lib, _) = open_library()?;
    photos_impl(
        &lib,
        query(selection),
        limit,
        output,
        &mut std::io::stdout().lock(),
    )
}

/// Photos are written as they are fetched, except JSON which is one array.
pub(crate) fn photos_impl(
    lib: &PhotosLibrary,
    query: PhotoQuery,
    limit: Option<usize>,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let photos = lib.photos(query)?.take(limit.unwrap_or(usize::MAX));
    if output == OutputFormat::Json {
        let json = photos
            .map(|photo| PhotoJson::from_photo(&photo?))
            .collect::<Result<Vec<_>>>()?;
        return write_json(out, &json);
    }
    for photo in photos {
        write_photo(&photo?, output, out)?;
    }
    Ok(())
}

pub fn selection(output: OutputFormat) -> Result<()> {
    let (lib, _) = open_library()?;
    selection_impl(&lib, output, &mut std::io::stdout().lock())
}

pub(crate) fn selection_impl(
    lib: &PhotosLibrary,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let photos = lib.selection()?;
    if output == OutputFormat::Json {
        let json = photos
            .iter()
            .map(PhotoJson::from_photo)
            .collect::<Result<Vec<_>>>()?;
        return write_json(out, &json);
    }
    for photo in &photos {
        write_photo(photo, output, out)?;
    }
    Ok(())
}

fn write_photo(photo: &Photo<'_>, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match output {
        OutputFormat::Id => writeln!(out, "{}", photo.uuid())?,
        _ => writeln!(out, "{}", format_photo_line(&PhotoJson::from_photo(photo)?))?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
