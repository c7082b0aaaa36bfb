// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn photoscript() -> Command {
    let mut cmd = cargo_bin_cmd!("photoscript");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_command_groups() {
    photoscript()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library:"))
        .stdout(predicate::str::contains("Setup & Configuration:"))
        .stdout(predicate::str::contains("export-album"));
}

#[test]
fn h_and_help_produce_same_output() {
    let short = photoscript().args(["info", "-h"]).output().unwrap();
    let long = photoscript().args(["info", "--help"]).output().unwrap();
    assert!(short.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&short.stdout),
        String::from_utf8_lossy(&long.stdout)
    );
}

#[test]
fn long_help_adds_description() {
    photoscript()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("retried after restarting Photos"));
    photoscript()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("retried after restarting Photos").not());
}

#[test]
fn missing_command_fails_with_usage() {
    photoscript()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    info = { "info" },
    albums = { "albums" },
    folders = { "folders" },
    photos = { "photos" },
    selection = { "selection" },
    import = { "import" },
    export = { "export" },
    export_album = { "export-album" },
    album = { "album" },
    folder = { "folder" },
    config = { "config" },
    schema = { "schema" },
    completion = { "completion" },
)]
fn command_supports_help_flag(cmd: &str) {
    photoscript()
        .args([cmd, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn export_help_explains_collisions() {
    photoscript()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("' (N)' suffix"));
}

#[test]
fn unknown_command_fails() {
    photoscript()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn version_flag_prints_version() {
    photoscript()
        .arg("-V")
        .assert()
        .success()
        .stdout("photoscript 0.1.0\n");
}
