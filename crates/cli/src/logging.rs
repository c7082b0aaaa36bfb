// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter directive for a `-v` count.
pub fn directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_DIRECTIVE,
        1 => "info",
        _ => "debug",
    }
}

/// `-v` overrides `RUST_LOG`; otherwise `RUST_LOG` applies, falling back to `warn`.
fn build_filter(verbosity: u8, from_env: Option<&str>) -> EnvFilter {
    match (verbosity, from_env) {
        (0, Some(spec)) => {
            EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
        }
        (v, _) => EnvFilter::new(directive(v)),
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let from_env = if env::rust_log() {
        std::env::var(env::vars::RUST_LOG).ok()
    } else {
        None
    };
    let filter = build_filter(verbosity, from_env.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
