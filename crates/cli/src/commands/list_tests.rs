// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use photoscript_core::Value;

fn output_of(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn with_photo_fields(ctx: &TestContext) {
    ctx.mock
        .on("photoFilename", "IMG_1.jpeg")
        .on("photoName", "")
        .on("photoDescription", "")
        .on("photoKeywords", Value::List(Vec::new()))
        .on("photoFavorite", false)
        .on("photoDate", "2024-05-01T09:30:00")
        .on("photoWidth", 100)
        .on("photoHeight", 50)
        .on("photoLocation", Value::List(vec![Value::Missing, Value::Missing]));
}

#[test]
fn album_ids() {
    let ctx = TestContext::new();
    ctx.list("photosLibraryAlbumIDs", &["A1/L0/040", "A2/L0/040"]);
    let lib = ctx.library();

    let text = output_of(|out| albums_impl(&lib, true, OutputFormat::Id, out));

    assert_eq!(text, "A1\nA2\n");
    assert_eq!(
        ctx.mock.calls_to("photosLibraryAlbumIDs"),
        vec![vec![Value::from(true)]]
    );
}

#[test]
fn album_text_lines() {
    let ctx = TestContext::new();
    ctx.list("photosLibraryAlbumIDs", &["A1/L0/040"]);
    ctx.mock
        .on("albumName", "Lisbon")
        .on("albumGetPath", "Travel/Lisbon")
        .on("albumCount", 3);
    let lib = ctx.library();

    let text = output_of(|out| albums_impl(&lib, false, OutputFormat::Text, out));

    assert_eq!(text, "A1  Travel/Lisbon (3 photos)\n");
}

#[test]
fn empty_album_list_as_json_is_empty_array() {
    let ctx = TestContext::new();
    ctx.list("photosLibraryAlbumIDs", &[]);
    let lib = ctx.library();

    let text = output_of(|out| albums_impl(&lib, false, OutputFormat::Json, out));

    assert_eq!(text, "[]\n");
}

#[test]
fn folder_text_shows_children() {
    let ctx = TestContext::new();
    ctx.list("photosLibraryFolderIDs", &["F1/L0/020"]);
    ctx.list("folderAlbums", &[]);
    ctx.list("folderFolders", &[]);
    ctx.mock
        .on("folderName", "Travel")
        .on("folderGetPath", "Travel");
    let lib = ctx.library();

    let text = output_of(|out| folders_impl(&lib, false, OutputFormat::Text, out));

    assert_eq!(text, "F1  Travel/\n");
}

#[yare::parameterized(
    all = { PhotoSelection::default(), PhotoQuery::All },
    search = {
        PhotoSelection { search: Some("beach".into()), ..Default::default() },
        PhotoQuery::Search("beach".into())
    },
    range = {
        PhotoSelection { range: Some((2, 5)), ..Default::default() },
        PhotoQuery::Range { start: 2, stop: 5 }
    },
    uuids = {
        PhotoSelection { uuid: vec!["P1".into()], ..Default::default() },
        PhotoQuery::Uuids(vec!["P1".into()])
    },
)]
fn selection_to_query(selection: PhotoSelection, expected: PhotoQuery) {
    assert_eq!(query(selection), expected);
}

#[test]
fn limit_stops_fetching() {
    let ctx = TestContext::new();
    ctx.mock.on("photosLibraryCount", 100);
    ctx.list("photosLibraryGetPhotoByRange", &["P1/L0/001"]);
    let lib = ctx.library();

    let text = output_of(|out| photos_impl(&lib, PhotoQuery::All, Some(2), OutputFormat::Id, out));

    assert_eq!(text, "P1\nP1\n");
    assert_eq!(ctx.mock.call_count("photosLibraryGetPhotoByRange"), 2);
}

#[test]
fn photo_text_line() {
    let ctx = TestContext::new();
    with_photo_fields(&ctx);
    let lib = ctx.library();

    let text = output_of(|out| {
        photos_impl(
            &lib,
            PhotoQuery::Uuids(vec!["P1".into()]),
            None,
            OutputFormat::Text,
            out,
        )
    });

    assert_eq!(text, "P1  2024-05-01 09:30  IMG_1.jpeg\n");
}

#[test]
fn photos_as_json_array() {
    let ctx = TestContext::new();
    with_photo_fields(&ctx);
    ctx.list("photosLibrarySearchPhotos", &["P1/L0/001", "P2/L0/001"]);
    let lib = ctx.library();

    let text = output_of(|out| {
        photos_impl(
            &lib,
            PhotoQuery::Search("x".into()),
            None,
            OutputFormat::Json,
            out,
        )
    });

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["uuid"], "P2");
}

#[test]
fn invalid_photo_stops_listing_with_error() {
    let ctx = TestContext::new();
    ctx.mock.on("photoExists", false);
    let lib = ctx.library();
    let mut out = Vec::new();

    let err = photos_impl(
        &lib,
        PhotoQuery::Uuids(vec!["P1".into()]),
        None,
        OutputFormat::Id,
        &mut out,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "invalid photo id: P1");
    assert!(out.is_empty());
}

#[test]
fn selection_ids() {
    let ctx = TestContext::new();
    ctx.list("photosLibraryGetSelection", &["P7/L0/001"]);
    let lib = ctx.library();

    let text = output_of(|out| selection_impl(&lib, OutputFormat::Id, out));

    assert_eq!(text, "P7\n");
}
