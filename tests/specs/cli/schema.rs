// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `photoscript schema`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn photoscript() -> Command {
    cargo_bin_cmd!("photoscript")
}

fn schema(name: &str) -> serde_json::Value {
    let output = photoscript().args(["schema", name]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn schema_requires_subcommand() {
    photoscript()
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    info = { "info" },
    photo = { "photo" },
    album = { "album" },
    folder = { "folder" },
    export = { "export" },
    config = { "config" },
)]
fn schema_has_schema_field(name: &str) {
    let json = schema(name);
    assert!(json["$schema"].is_string());
    assert_eq!(json["type"], "object");
}

#[test]
fn photo_schema_lists_fields() {
    let json = schema("photo");
    let properties = json["properties"].as_object().unwrap();
    for field in ["uuid", "filename", "keywords", "favorite", "date", "latitude"] {
        assert!(properties.contains_key(field), "missing {field}");
    }
}

#[test]
fn export_schema_lists_files() {
    let json = schema("export");
    let entry = &json["definitions"]["ExportedPhotoJson"];
    assert_eq!(entry["properties"]["files"]["type"], "array");
}

#[test]
fn unknown_schema_fails() {
    photoscript()
        .args(["schema", "issue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
