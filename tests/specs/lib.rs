// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `photoscript` binary.
//!
//! The spec files under `cli/` are compiled as integration tests of the
//! `photoscript` crate. They only cover commands that run without a
//! Photos app: help, config, schema, completion and argument checks.
