// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

const UUID: &str = "E7D5C0F7-5A7B-4D6B-8B1F-4A1E2C3D4F5A";

#[yare::parameterized(
    photo = { ObjectKind::Photo, "/L0/001" },
    album = { ObjectKind::Album, "/L0/040" },
    folder = { ObjectKind::Folder, "/L0/020" },
)]
fn test_bare_uuid_gains_suffix(kind: ObjectKind, suffix: &str) {
    let ident = normalize(kind, UUID, 10.0);
    assert_eq!(ident.id, format!("{UUID}{suffix}"));
    assert_eq!(ident.uuid, UUID);
}

#[test]
fn test_full_id_keeps_id_and_strips_uuid() {
    let raw = format!("{UUID}/L0/040");
    let ident = normalize(ObjectKind::Album, &raw, 5.0);
    assert_eq!(ident.id, raw);
    assert_eq!(ident.uuid, UUID);
}

#[test]
fn test_old_library_uses_raw_value() {
    let raw = format!("{UUID}/L0/001");
    let ident = normalize(ObjectKind::Photo, &raw, 4.0);
    assert_eq!(ident.id, raw);
    assert_eq!(ident.uuid, raw);
}

#[yare::parameterized(
    major_minor = { "10.0", Some(10.0) },
    major_only = { "7", Some(7.0) },
    patch = { "9.0.1", Some(9.0) },
    padded = { " 5.0\n", Some(5.0) },
    two_digit_minor = { "4.12", Some(4.12) },
    empty = { "", None },
    text = { "beta", None },
)]
fn test_parse_version(input: &str, expected: Option<f64>) {
    assert_eq!(parse_version(input), expected);
}

#[test]
fn test_version_number_falls_back_to_zero() {
    assert_eq!(version_number("unknown"), 0.0);
    assert_eq!(version_number("8.0"), 8.0);
}

#[test]
fn test_kind_display() {
    assert_eq!(ObjectKind::Folder.to_string(), "folder");
}
