// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output for listings.

use std::path::Path;

use crate::schema::export::ExportOutputJson;
use crate::schema::info::InfoJson;
use crate::schema::{AlbumJson, FolderJson, PhotoJson};

/// Date shown in photo listings.
const DATE_DISPLAY: &str = "%Y-%m-%d %H:%M";

/// `<uuid>  <date>  <filename>`, plus a star for favorites and the title if set.
pub fn format_photo_line(photo: &PhotoJson) -> String {
    let mut line = format!(
        "{}  {}  {}",
        photo.uuid,
        photo.date.format(DATE_DISPLAY),
        photo.filename
    );
    if photo.favorite {
        line.push_str(" *");
    }
    if !photo.name.is_empty() {
        line.push_str(&format!("  \"{}\"", photo.name));
    }
    line
}

/// `<uuid>  <path> (<n> photos)`.
pub fn format_album_line(album: &AlbumJson) -> String {
    let noun = if album.count == 1 { "photo" } else { "photos" };
    format!("{}  {} ({} {noun})", album.uuid, album.path, album.count)
}

/// `<uuid>  <path>/`, then one indented line per album.
pub fn format_folder(folder: &FolderJson) -> Vec<String> {
    let mut lines = vec![format!("{}  {}/", folder.uuid, folder.path)];
    lines.extend(folder.subfolders.iter().map(|name| format!("    {name}/")));
    lines.extend(folder.albums.iter().map(|name| format!("    {name}")));
    lines
}

pub fn format_info(info: &InfoJson) -> Vec<String> {
    vec![
        format!("{} {}", info.name, info.version),
        format!("Running: {}", if info.running { "yes" } else { "no" }),
        format!("Photos:  {}", info.photos),
        format!("Albums:  {}", info.albums),
        format!("Folders: {}", info.folders),
    ]
}

/// One line per written file, then a summary line.
pub fn format_export(output: &ExportOutputJson) -> Vec<String> {
    let mut lines: Vec<String> = output
        .exported
        .iter()
        .flat_map(|e| e.files.iter())
        .map(|path| display_relative(path, &output.destination))
        .collect();
    let count = output.file_count();
    let noun = if count == 1 { "file" } else { "files" };
    lines.push(format!(
        "Exported {count} {noun} to {}",
        output.destination.display()
    ));
    lines
}

/// `path` relative to `base` when inside it, as given otherwise.
fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
