// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The seam between the gateway and whatever executes AppleScript handlers.

use crate::error::Error;
use crate::value::Value;

/// Substring that marks a remote failure as the recoverable timeout class.
pub const TIMEOUT_MARKER: &str = "timed out";

/// A failure reported by a [`RemoteTarget`], already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    /// The remote layer gave up waiting for Photos.
    Timeout(String),
    /// Any other failure.
    Other(String),
}

impl RemoteFailure {
    /// Classify a raw failure message from the remote layer.
    ///
    /// The match is case-sensitive, as produced by AppleScript
    /// (`AppleEvent timed out. (-1712)`).
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(TIMEOUT_MARKER) {
            RemoteFailure::Timeout(message)
        } else {
            RemoteFailure::Other(message)
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RemoteFailure::Timeout(m) | RemoteFailure::Other(m) => m,
        }
    }

    /// Attach the operation name, producing the caller-facing error.
    pub fn into_error(self, operation: &str) -> Error {
        match self {
            RemoteFailure::Timeout(message) => Error::Timeout {
                operation: operation.to_string(),
                message,
            },
            RemoteFailure::Other(message) => Error::Remote {
                operation: operation.to_string(),
                message,
            },
        }
    }
}

/// A loaded set of named operations that can be called with positional arguments.
pub trait RemoteTarget {
    /// Call `operation` with `args` in order and return its raw result.
    fn call(&self, operation: &str, args: &[Value]) -> Result<Value, RemoteFailure>;
}

impl<T: RemoteTarget + ?Sized> RemoteTarget for Box<T> {
    fn call(&self, operation: &str, args: &[Value]) -> Result<Value, RemoteFailure> {
        (**self).call(operation, args)
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
