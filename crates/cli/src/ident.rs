// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Photos object identifiers.
//!
//! From Photos 5.0 on, AppleScript ids carry a kind suffix after the uuid
//! (`<uuid>/L0/001` for a photo). Callers may pass either form.

use std::fmt;

/// First Photos version whose ids carry a kind suffix.
pub const SUFFIX_MIN_VERSION: f64 = 5.0;

/// Kind of object an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Photo,
    Album,
    Folder,
}

impl ObjectKind {
    /// Suffix appended to a bare uuid on Photos 5.0 and later.
    pub fn suffix(self) -> &'static str {
        match self {
            ObjectKind::Photo => "/L0/001",
            ObjectKind::Album => "/L0/040",
            ObjectKind::Folder => "/L0/020",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Photo => "photo",
            ObjectKind::Album => "album",
            ObjectKind::Folder => "folder",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object's full AppleScript id and its bare uuid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectId {
    pub id: String,
    pub uuid: String,
}

/// Split `raw` into id and uuid for a library at `version`.
pub fn normalize(kind: ObjectKind, raw: &str, version: f64) -> ObjectId {
    if version < SUFFIX_MIN_VERSION {
        return ObjectId {
            id: raw.to_string(),
            uuid: raw.to_string(),
        };
    }
    match raw.split_once('/') {
        Some((uuid, _)) => ObjectId {
            id: raw.to_string(),
            uuid: uuid.to_string(),
        },
        None => ObjectId {
            id: format!("{}{}", raw, kind.suffix()),
            uuid: raw.to_string(),
        },
    }
}

/// Numeric `major.minor` of a Photos version string such as `"10.0"` or `"9.0.1"`.
pub fn parse_version(version: &str) -> Option<f64> {
    let mut parts = version.trim().split('.');
    let major = parts.next()?.parse::<u32>().ok()?;
    let minor = match parts.next() {
        Some(minor) => minor.parse::<u32>().ok()?,
        None => 0,
    };
    format!("{major}.{minor}").parse().ok()
}

/// Like [`parse_version`], treating an unparseable version as pre-suffix.
pub fn version_number(version: &str) -> f64 {
    parse_version(version).unwrap_or_else(|| {
        tracing::warn!(version, "cannot parse Photos version, assuming ids without suffixes");
        0.0
    })
}

#[cfg(test)]
#[path = "ident_tests.rs"]
mod tests;
