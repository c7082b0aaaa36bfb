// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::{AlbumCommand, FolderPath, OutputFormat};
use crate::display::format_album_line;
use crate::error::Result;
use crate::library::{PhotoQuery, PhotosLibrary};
use crate::photo::Photo;
use crate::schema::AlbumJson;

use super::{find_album, open_library, write_json};

/// Execute an album subcommand.
pub fn run(cmd: AlbumCommand) -> Result<()> {
    let (lib, _) = open_library()?;
    run_impl(&lib, cmd, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl(lib: &PhotosLibrary, cmd: AlbumCommand, out: &mut dyn Write) -> Result<()> {
    match cmd {
        AlbumCommand::Create {
            name,
            folder,
            output,
        } => create(lib, &name, folder.as_ref(), output, out),
        AlbumCommand::Delete { name } => {
            let album = find_album(lib, &name)?;
            lib.delete_album(&album)?;
            writeln!(out, "Deleted album {name}")?;
            Ok(())
        }
        AlbumCommand::Add { name, uuids } => {
            let album = find_album(lib, &name)?;
            let added = album.add(&photos(lib, uuids)?)?;
            writeln!(out, "Added {} to {name}", count(added.len()))?;
            Ok(())
        }
        AlbumCommand::Remove { name, uuids } => {
            let mut album = find_album(lib, &name)?;
            let photos = photos(lib, uuids)?;
            album.remove(&photos)?;
            writeln!(out, "Removed {} from {name}", count(photos.len()))?;
            Ok(())
        }
    }
}

fn create(
    lib: &PhotosLibrary,
    name: &str,
    folder: Option<&FolderPath>,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let album = match folder {
        Some(path) => lib.make_album_folders(name, path.0.as_slice())?,
        None => lib.create_album(name, None)?,
    };
    match output {
        OutputFormat::Id => writeln!(out, "{}", album.uuid())?,
        OutputFormat::Json => write_json(out, &AlbumJson::from_album(&album)?)?,
        OutputFormat::Text => writeln!(
            out,
            "Created {}",
            format_album_line(&AlbumJson::from_album(&album)?)
        )?,
    }
    Ok(())
}

fn photos(lib: &PhotosLibrary, uuids: Vec<String>) -> Result<Vec<Photo<'_>>> {
    lib.photos(PhotoQuery::Uuids(uuids))?.collect()
}

fn count(n: usize) -> String {
    if n == 1 {
        "1 photo".to_string()
    } else {
        format!("{n} photos")
    }
}

#[cfg(test)]
#[path = "album_tests.rs"]
mod tests;
