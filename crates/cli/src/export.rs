// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export deduplicator.
//!
//! Photos exports into a scratch directory it names files in itself; this
//! module moves those files to the caller's destination without clobbering
//! anything already there. A stem that collides gets the first free
//! `" (N)"` suffix, compared case-insensitively, and every file from one
//! batch that shares a stem (a live photo's `.jpeg` and `.mov`) gets the
//! same resolution.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::error::{Error, Result};

/// Seconds Photos may spend exporting one photo.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Prefix of scratch directories, for spotting leftovers.
pub const SCRATCH_PREFIX: &str = "photoscript_";

const DITTO: &str = "/usr/bin/ditto";

/// How a photo is exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Export the original file instead of the current (edited) version.
    pub original: bool,
    /// Replace files of the same name instead of picking a new name.
    pub overwrite: bool,
    pub timeout_secs: u64,
    /// Select the exported files in Finder afterwards.
    pub reveal_in_finder: bool,
    /// Skip resource forks and extended attributes when copying.
    pub norsrc: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            original: false,
            overwrite: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            reveal_in_finder: false,
            norsrc: false,
        }
    }
}

/// How files are materialized at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// `/usr/bin/ditto`, which keeps resource forks unless `norsrc`.
    Ditto { norsrc: bool },
    /// `std::fs::copy`.
    Std,
}

impl CopyMethod {
    /// `ditto` on macOS, a plain copy elsewhere.
    pub fn platform_default(norsrc: bool) -> Self {
        if cfg!(target_os = "macos") {
            CopyMethod::Ditto { norsrc }
        } else {
            CopyMethod::Std
        }
    }

    /// Copy `src` to `dest`, replacing `dest` if it exists.
    pub fn copy(&self, src: &Path, dest: &Path) -> Result<()> {
        let failed = |message: String| Error::CopyFailed {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            message,
        };

        match self {
            CopyMethod::Std => {
                fs::copy(src, dest).map_err(|e| failed(e.to_string()))?;
            }
            CopyMethod::Ditto { norsrc } => {
                let mut command = Command::new(DITTO);
                if *norsrc {
                    command.arg("--norsrc");
                }
                let output = command
                    .arg(src)
                    .arg(dest)
                    .output()
                    .map_err(|e| failed(e.to_string()))?;
                if !output.status.success() {
                    return Err(failed(
                        String::from_utf8_lossy(&output.stderr).trim().to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Stems already resolved within one export batch.
#[derive(Debug, Default)]
pub struct NameRegistry {
    resolved: HashMap<String, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination stem for `stem`, reusing an earlier resolution in this batch.
    pub fn resolve(&mut self, stem: &str, destination: &Path) -> String {
        self.resolved
            .entry(stem.to_string())
            .or_insert_with(|| resolve_stem(stem, destination))
            .clone()
    }
}

/// First of `stem`, `stem (1)`, `stem (2)`, ... whose stem is not taken in
/// `destination`, ignoring case.
pub fn resolve_stem(stem: &str, destination: &Path) -> String {
    let taken: Vec<String> = find_files(stem, destination)
        .iter()
        .map(|name| split_name(name).0.to_lowercase())
        .collect();

    let mut candidate = stem.to_string();
    let mut n = 1;
    while taken.contains(&candidate.to_lowercase()) {
        candidate = format!("{stem} ({n})");
        n += 1;
    }
    candidate
}

/// Names of entries in `dir` starting with `prefix`, ignoring case.
///
/// A missing or unreadable directory has no entries.
pub fn find_files(prefix: &str, dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let prefix = prefix.to_lowercase();
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect();
    names.sort();
    names
}

/// Fail with [`Error::InvalidDestination`] unless `destination` is a directory.
pub fn validate_destination(destination: &Path) -> Result<()> {
    if destination.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidDestination(destination.to_path_buf()))
    }
}

/// A fresh scratch directory for one export.
pub fn scratch_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?)
}

/// Move every file Photos left in `scratch` into `destination`.
///
/// Files are handled in file-name order. Returns the final paths in that
/// order. `post` runs with those paths once all copies succeed, if any file
/// was exported. `scratch` is removed on every return path.
///
/// # Errors
///
/// [`Error::InvalidDestination`] before anything is copied, or the first
/// copy failure. Files copied before a failure stay in place.
pub fn finalize_export(
    scratch: TempDir,
    destination: &Path,
    overwrite: bool,
    copy: &CopyMethod,
    post: Option<&dyn Fn(&[PathBuf])>,
) -> Result<Vec<PathBuf>> {
    validate_destination(destination)?;

    let mut registry = NameRegistry::new();
    let mut exported = Vec::new();
    for source in scratch_files(scratch.path())? {
        let Some(name) = source.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let (stem, suffix) = split_name(&name);
        let target = if overwrite {
            destination.join(&name)
        } else {
            let stem = registry.resolve(stem, destination);
            destination.join(format!("{stem}{suffix}"))
        };

        tracing::debug!(src = %source.display(), dest = %target.display(), "copying export");
        copy.copy(&source, &target)?;
        exported.push(target);
    }

    if let Some(post) = post {
        if !exported.is_empty() {
            post(&exported);
        }
    }

    scratch.close()?;
    Ok(exported)
}

/// Visible regular files in `dir`, sorted by name.
fn scratch_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Split a file name into stem and suffix (`"IMG.jpeg"` → `("IMG", ".jpeg")`).
///
/// Only the last extension counts; a leading dot is part of the stem.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(dot) => name.split_at(dot),
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
