// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `PHOTOSCRIPT_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::PHOTOSCRIPT_CONFIG).map(PathBuf::from)
}

/// Returns the value of `PHOTOSCRIPT_SCRIPT` if set and non-empty.
pub fn script_path() -> Option<PathBuf> {
    non_empty(vars::PHOTOSCRIPT_SCRIPT).map(PathBuf::from)
}

/// Returns `true` if `RUST_LOG` is set (any value).
pub fn rust_log() -> bool {
    std::env::var(vars::RUST_LOG).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
