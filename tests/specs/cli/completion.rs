// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn photoscript() -> Command {
    cargo_bin_cmd!("photoscript")
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = photoscript().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn bash_completion_names_subcommands() {
    photoscript()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("photoscript"))
        .stdout(predicate::str::contains("export-album"))
        .stdout(predicate::str::contains("selection"));
}

#[test]
fn completion_without_shell_shows_help() {
    photoscript()
        .arg("completion")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn completion_invalid_shell_fails() {
    photoscript()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
