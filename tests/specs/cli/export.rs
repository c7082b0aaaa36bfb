// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export argument specs. A bad destination is rejected before Photos is
//! contacted, so these run anywhere.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn photoscript(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("photoscript");
    cmd.env("PHOTOSCRIPT_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn export_requires_destination() {
    let temp = TempDir::new().unwrap();
    photoscript(&temp)
        .args(["export", "ABC-123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dest"));
}

#[test]
fn export_requires_uuids() {
    let temp = TempDir::new().unwrap();
    photoscript(&temp)
        .args(["export", "-d"])
        .arg(temp.path())
        .assert()
        .failure();
}

#[test]
fn missing_destination_fails_before_photos() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nowhere");
    photoscript(&temp)
        .args(["export", "ABC-123", "-d"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: invalid export destination"))
        .stderr(predicate::str::contains("hint:"));
    assert!(!missing.exists());
}

#[test]
fn file_destination_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("photo.jpg");
    std::fs::write(&file, b"jpeg").unwrap();
    photoscript(&temp)
        .args(["export-album", "Lisbon", "-d"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid export destination"));
}

#[test]
fn invalid_output_format_fails() {
    let temp = TempDir::new().unwrap();
    photoscript(&temp)
        .args(["export", "ABC-123", "-o", "yaml", "-d"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
