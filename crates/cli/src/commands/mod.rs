// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod album;
pub mod config;
pub mod export;
pub mod folder;
pub mod import;
pub mod info;
pub mod list;
pub mod schema;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Write;

use serde::Serialize;

use crate::album::Album;
use crate::config::{config_path, Config};
use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::library::{Lookup, PhotosLibrary};

/// Helper to load the configuration and connect to Photos.
pub fn open_library() -> Result<(PhotosLibrary, Config)> {
    let config = Config::load(&config_path()?)?;
    let lib = PhotosLibrary::new(config.gateway()?)?;
    Ok((lib, config))
}

/// Album named `name` at any level, or an error with a hint.
pub(crate) fn find_album<'a>(lib: &'a PhotosLibrary, name: &str) -> Result<Album<'a>> {
    lib.album(&Lookup::Name(name.to_string()), false)?
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "album '{name}' not found\n  hint: list albums with 'photoscript albums'"
            ))
        })
}

/// Folder at `path`, top-level name first, or an error.
pub(crate) fn find_folder<'a, S: AsRef<str>>(
    lib: &'a PhotosLibrary,
    path: &[S],
) -> Result<Folder<'a>> {
    lib.folder_by_path(path)?.ok_or_else(|| {
        let joined: Vec<&str> = path.iter().map(AsRef::as_ref).collect();
        Error::InvalidArgument(format!("folder '{}' not found", joined.join("/")))
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write each line followed by a newline.
pub(crate) fn write_lines<I, S>(out: &mut dyn Write, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
