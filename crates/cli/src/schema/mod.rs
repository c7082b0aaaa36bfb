// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! Each type is what one `-o json` listing prints per object, built from the
//! live object with one handler call per field.

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::Serialize;

use crate::album::Album;
use crate::error::Result;
use crate::folder::Folder;
use crate::photo::Photo;

pub mod export;
pub mod info;

/// Separator between folder names in `path` fields.
pub const PATH_DELIM: char = '/';

/// JSON representation of a photo.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct PhotoJson {
    /// Photo uuid, without the kind suffix.
    pub uuid: String,
    /// Original file name.
    pub filename: String,
    /// Title; empty if unset.
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub favorite: bool,
    /// Capture date, without time zone.
    pub date: NaiveDateTime,
    pub width: usize,
    pub height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl PhotoJson {
    pub fn from_photo(photo: &Photo<'_>) -> Result<Self> {
        let location = photo.location()?;
        Ok(PhotoJson {
            uuid: photo.uuid().to_string(),
            filename: photo.filename()?,
            name: photo.name()?,
            description: photo.description()?,
            keywords: photo.keywords()?,
            favorite: photo.favorite()?,
            date: photo.date()?,
            width: photo.width()?,
            height: photo.height()?,
            latitude: location.latitude,
            longitude: location.longitude,
        })
    }
}

/// JSON representation of an album.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct AlbumJson {
    pub uuid: String,
    pub name: String,
    /// Folder path and album name, `/`-separated.
    pub path: String,
    /// Number of photos in the album.
    pub count: usize,
}

impl AlbumJson {
    pub fn from_album(album: &Album<'_>) -> Result<Self> {
        Ok(AlbumJson {
            uuid: album.uuid().to_string(),
            name: album.name()?,
            path: album.path_str(PATH_DELIM)?,
            count: album.len()?,
        })
    }
}

/// JSON representation of a folder.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct FolderJson {
    pub uuid: String,
    pub name: String,
    /// Ancestor folder names and this folder's name, `/`-separated.
    pub path: String,
    /// Names of albums directly inside.
    pub albums: Vec<String>,
    /// Names of folders directly inside.
    pub subfolders: Vec<String>,
}

impl FolderJson {
    pub fn from_folder(folder: &Folder<'_>) -> Result<Self> {
        let albums = folder
            .albums()?
            .iter()
            .map(Album::name)
            .collect::<Result<_>>()?;
        let subfolders = folder
            .subfolders()?
            .iter()
            .map(Folder::name)
            .collect::<Result<_>>()?;
        Ok(FolderJson {
            uuid: folder.uuid().to_string(),
            name: folder.name()?,
            path: folder.path_str(PATH_DELIM)?,
            albums,
            subfolders,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
