// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[yare::parameterized(
    quiet = { 0, "warn" },
    verbose = { 1, "info" },
    very_verbose = { 2, "debug" },
    capped = { 5, "debug" },
)]
fn test_directive(verbosity: u8, expected: &str) {
    assert_eq!(directive(verbosity), expected);
}

#[yare::parameterized(
    default = { 0, None, "warn" },
    env_directive = { 0, Some("photoscript_core=debug"), "photoscript_core=debug" },
    flag_beats_env = { 1, Some("error"), "info" },
    invalid_env_falls_back = { 0, Some("photoscript=loudest"), "warn" },
)]
fn test_build_filter(verbosity: u8, from_env: Option<&str>, expected: &str) {
    assert_eq!(build_filter(verbosity, from_env).to_string(), expected);
}
