// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! [`RemoteTarget`] backed by `osascript`.
//!
//! The handler bundle is AppleScript source. Each call appends a
//! `return <handler>(<args>)` statement and pipes the whole program to
//! `osascript -s s`, whose structured output is parsed back into a [`Value`].

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::literal;
use crate::target::{RemoteFailure, RemoteTarget};
use crate::value::Value;

/// Handler bundle compiled into the binary.
const BUNDLED_SCRIPT: &str = include_str!("../resources/photoscript.applescript");

/// Default interpreter.
const OSASCRIPT: &str = "/usr/bin/osascript";

/// Calls AppleScript handlers through `osascript`.
#[derive(Debug, Clone)]
pub struct OsaTarget {
    source: String,
    origin: Option<PathBuf>,
    interpreter: PathBuf,
}

impl OsaTarget {
    /// Target using the handler bundle shipped with this crate.
    pub fn bundled() -> Self {
        OsaTarget {
            source: BUNDLED_SCRIPT.to_string(),
            origin: None,
            interpreter: PathBuf::from(OSASCRIPT),
        }
    }

    /// Load a handler bundle from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the file is missing, unreadable or empty.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::Configuration(format!(
                "{} is not a valid script",
                path.display()
            )));
        }
        let source = fs::read_to_string(path)
            .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))?;
        if source.trim().is_empty() {
            return Err(Error::Configuration(format!(
                "{} is empty",
                path.display()
            )));
        }
        Ok(OsaTarget {
            source,
            origin: Some(path.to_path_buf()),
            interpreter: PathBuf::from(OSASCRIPT),
        })
    }

    /// Use a different `osascript` binary.
    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Path the bundle was loaded from, or `None` for the bundled script.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Full program text for one call.
    pub fn program(&self, operation: &str, args: &[Value]) -> String {
        let rendered: Vec<String> = args.iter().map(literal::to_literal).collect();
        format!(
            "{}\n\nreturn {}({})\n",
            self.source,
            operation,
            rendered.join(", ")
        )
    }

    fn run(&self, program: &str) -> std::result::Result<String, RemoteFailure> {
        let mut child = Command::new(&self.interpreter)
            .arg("-s")
            .arg("s")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                RemoteFailure::Other(format!(
                    "failed to start {}: {}",
                    self.interpreter.display(),
                    e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(program.as_bytes())
                .map_err(|e| RemoteFailure::Other(format!("failed to send script: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| RemoteFailure::Other(format!("osascript did not finish: {}", e)))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(RemoteFailure::classify(stderr.trim()))
        }
    }
}

/// Handler names are spliced into source, so only plain identifiers are accepted.
pub fn is_valid_operation(operation: &str) -> bool {
    let mut chars = operation.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl RemoteTarget for OsaTarget {
    fn call(&self, operation: &str, args: &[Value]) -> std::result::Result<Value, RemoteFailure> {
        if !is_valid_operation(operation) {
            return Err(RemoteFailure::Other(format!(
                "invalid operation name '{}'",
                operation
            )));
        }
        let stdout = self.run(&self.program(operation, args))?;
        literal::parse(&stdout).map_err(|e| RemoteFailure::Other(e.to_string()))
    }
}

#[cfg(test)]
#[path = "osa_tests.rs"]
mod tests;
