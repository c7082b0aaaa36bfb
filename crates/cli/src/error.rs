// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All errors surfaced by the photoscript library and CLI.
///
/// Messages are user-facing; common mistakes carry a hint.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Photos timed out running '{operation}': {message}\n  hint: raise retry.max_attempts or check that Photos is responsive")]
    Timeout { operation: String, message: String },

    #[error("Photos failed running '{operation}': {message}")]
    Remote { operation: String, message: String },

    #[error("cannot load AppleScript handlers: {0}")]
    Configuration(String),

    #[error("invalid retry policy: {0}")]
    InvalidPolicy(String),

    #[error("invalid export destination '{}'\n  hint: the destination must be an existing directory", .0.display())]
    InvalidDestination(PathBuf),

    #[error("invalid {kind} id: {id}")]
    InvalidId { kind: &'static str, id: String },

    #[error("could not create {kind} '{name}'")]
    CreateFailed { kind: &'static str, name: String },

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("invalid location: {0}")]
    InvalidLocation(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("unexpected result from '{operation}': expected {expected}")]
    UnexpectedValue {
        operation: String,
        expected: &'static str,
    },

    #[error("not a Photos library: {}", .0.display())]
    NotALibrary(PathBuf),

    #[error("could not copy {} to {}: {message}", src.display(), dest.display())]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for photoscript operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn unexpected(operation: &str, expected: &'static str) -> Self {
        Error::UnexpectedValue {
            operation: operation.to_string(),
            expected,
        }
    }
}

impl From<photoscript_core::Error> for Error {
    fn from(e: photoscript_core::Error) -> Self {
        match e {
            photoscript_core::Error::Timeout { operation, message } => {
                Error::Timeout { operation, message }
            }
            photoscript_core::Error::Remote { operation, message } => {
                Error::Remote { operation, message }
            }
            photoscript_core::Error::Configuration(s) => Error::Configuration(s),
            photoscript_core::Error::InvalidPolicy(s) => Error::InvalidPolicy(s),
            photoscript_core::Error::Parse(s) => Error::Remote {
                operation: "osascript".to_string(),
                message: s,
            },
            photoscript_core::Error::Io(e) => Error::Io(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
