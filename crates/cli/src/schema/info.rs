// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `photoscript info` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::Result;
use crate::library::PhotosLibrary;

/// Summary of the open library.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct InfoJson {
    /// Application name, normally "Photos".
    pub name: String,
    pub version: String,
    pub running: bool,
    pub photos: usize,
    /// Albums at every level.
    pub albums: usize,
    /// Folders at every level.
    pub folders: usize,
}

impl InfoJson {
    pub fn from_library(lib: &PhotosLibrary) -> Result<Self> {
        Ok(InfoJson {
            name: lib.name()?,
            version: lib.version().to_string(),
            running: lib.running()?,
            photos: lib.len()?,
            albums: lib.album_names(false)?.len(),
            folders: lib.folder_names(false)?.len(),
        })
    }
}
