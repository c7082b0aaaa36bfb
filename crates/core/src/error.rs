// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for photoscript-core operations.

use thiserror::Error;

/// All possible errors that can occur while talking to the Photos app.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation} timed out: {message}\n  hint: Photos may be busy; retries are configured with 'photoscript config set retry.max_attempts <n>'")]
    Timeout { operation: String, message: String },

    #[error("{operation} failed: {message}")]
    Remote { operation: String, message: String },

    #[error("could not load AppleScript handlers: {0}")]
    Configuration(String),

    #[error("invalid retry policy: {0}")]
    InvalidPolicy(String),

    #[error("cannot parse AppleScript result: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if this error is the retryable timeout class.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Name of the remote operation that failed, if any.
    pub fn operation(&self) -> Option<&str> {
        match self {
            Error::Timeout { operation, .. } | Error::Remote { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

/// A specialized Result type for photoscript-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
