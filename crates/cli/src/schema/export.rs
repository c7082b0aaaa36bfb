// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `photoscript export` JSON output.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::Serialize;

/// Files written for one exported photo.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct ExportedPhotoJson {
    pub uuid: String,
    /// Final paths in the destination, after collision renaming.
    pub files: Vec<PathBuf>,
}

/// JSON output structure for the export and export-album commands.
#[derive(Debug, Clone, PartialEq, JsonSchema, Serialize)]
pub struct ExportOutputJson {
    pub destination: PathBuf,
    pub exported: Vec<ExportedPhotoJson>,
}

impl ExportOutputJson {
    /// Number of files written across all photos.
    pub fn file_count(&self) -> usize {
        self.exported.iter().map(|e| e.files.len()).sum()
    }
}
