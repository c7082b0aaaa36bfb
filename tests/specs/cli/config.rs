// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config command specs. Each test points `PHOTOSCRIPT_CONFIG` at a
//! scratch file.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

struct Scratch {
    _dir: TempDir,
    path: PathBuf,
}

impl Scratch {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        Scratch { _dir: dir, path }
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("photoscript");
        cmd.env("PHOTOSCRIPT_CONFIG", &self.path).env("NO_COLOR", "1");
        cmd
    }
}

#[test]
fn path_prints_override() {
    let scratch = Scratch::new();
    scratch
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn show_defaults_without_file() {
    let scratch = Scratch::new();
    scratch
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[retry]"))
        .stdout(predicate::str::contains("max_attempts = 3"));
    assert!(!scratch.path.exists());
}

#[test]
fn set_persists_value() {
    let scratch = Scratch::new();
    scratch
        .cmd()
        .args(["config", "set", "retry.max_attempts", "5"])
        .assert()
        .success()
        .stdout("Set retry.max_attempts = 5\n");

    let output = scratch
        .cmd()
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["retry"]["max_attempts"], 5);
}

#[parameterized(
    unknown_key = { "retry.nope", "1", "unknown key" },
    not_a_number = { "retry.max_attempts", "many", "retry.max_attempts" },
    zero_attempts = { "retry.max_attempts", "0", "max_attempts" },
    empty_app = { "script.app_name", " ", "cannot be empty" },
)]
fn set_rejects_bad_values(key: &str, value: &str, message: &str) {
    let scratch = Scratch::new();
    scratch
        .cmd()
        .args(["config", "set", key, value])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains(message));
    assert!(!scratch.path.exists());
}

#[test]
fn malformed_file_is_reported() {
    let scratch = Scratch::new();
    std::fs::write(&scratch.path, "retry = [").unwrap();
    scratch
        .cmd()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
