// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::library::Lookup;

const ALBUM: &str = "A1/L0/040";

#[test]
fn new_appends_suffix_to_bare_uuid() {
    let ctx = TestContext::new();
    let lib = ctx.library();

    let album = Album::new(&lib, "A1").unwrap();

    assert_eq!(album.uuid(), "A1");
    assert_eq!(album.id(), ALBUM);
    assert_eq!(ctx.targets("albumExists"), vec![ALBUM]);
}

#[test]
fn new_keeps_bare_uuid_on_old_photos() {
    let ctx = TestContext::with_version("4.0");
    let lib = ctx.library();

    let album = Album::new(&lib, "A1").unwrap();

    assert_eq!(album.id(), "A1");
}

#[test]
fn new_rejects_unknown_album() {
    let ctx = TestContext::new();
    ctx.mock.on("albumExists", false);
    let lib = ctx.library();

    let err = Album::new(&lib, "A1/L0/040").unwrap_err();

    assert!(matches!(err, Error::InvalidId { kind: "album", ref id } if id == "A1"));
}

#[test]
fn missing_name_is_empty() {
    let ctx = TestContext::new();
    ctx.mock.on("albumName", Value::Missing);
    let lib = ctx.library();

    let album = Album::new(&lib, "A1").unwrap();

    assert_eq!(album.name().unwrap(), "");
    assert_eq!(album.title().unwrap(), "");
}

#[test]
fn set_title_passes_id_then_name() {
    let ctx = TestContext::new();
    ctx.mock.on("albumSetName", Value::Missing);
    let lib = ctx.library();

    Album::new(&lib, "A1").unwrap().set_title("Lisbon").unwrap();

    assert_eq!(
        ctx.mock.calls_to("albumSetName"),
        vec![vec![Value::from(ALBUM), Value::from("Lisbon")]]
    );
}

#[test]
fn top_level_album_has_no_parent() {
    let ctx = TestContext::new();
    ctx.mock.on("albumParent", 0);
    let lib = ctx.library();

    let album = Album::new(&lib, "A1").unwrap();

    assert_eq!(album.parent_id().unwrap(), None);
    assert!(album.parent().unwrap().is_none());
}

#[test]
fn parent_is_a_folder() {
    let ctx = TestContext::new();
    ctx.mock.on("albumParent", "F1/L0/020");
    let lib = ctx.library();

    let parent = Album::new(&lib, "A1").unwrap().parent().unwrap().unwrap();

    assert_eq!(parent.uuid(), "F1");
}

#[test]
fn path_str_sends_delimiter() {
    let ctx = TestContext::new();
    ctx.mock.on("albumGetPath", "Travel>Lisbon");
    let lib = ctx.library();

    let path = Album::new(&lib, "A1").unwrap().path_str('>').unwrap();

    assert_eq!(path, "Travel>Lisbon");
    assert_eq!(
        ctx.mock.calls_to("albumGetPath")[0][1],
        Value::from(">")
    );
}

#[test]
fn photos_and_len() {
    let ctx = TestContext::new();
    ctx.list("albumPhotes", &["P1/L0/001", "P2/L0/001"]);
    ctx.mock.on("albumCount", 2);
    let lib = ctx.library();
    let album = Album::new(&lib, "A1").unwrap();

    let uuids: Vec<_> = album
        .photos()
        .unwrap()
        .iter()
        .map(|p| p.uuid().to_string())
        .collect();

    assert_eq!(uuids, vec!["P1", "P2"]);
    assert_eq!(album.len().unwrap(), 2);
    assert!(!album.is_empty().unwrap());
}

#[test]
fn add_sends_photo_ids() {
    let ctx = TestContext::new();
    ctx.list("albumAdd", &["P1/L0/001"]);
    let lib = ctx.library();
    let album = Album::new(&lib, "A1").unwrap();
    let photo = Photo::new(&lib, "P1").unwrap();

    let added = album.add(&[photo]).unwrap();

    assert_eq!(added.len(), 1);
    assert_eq!(
        ctx.mock.calls_to("albumAdd"),
        vec![vec![Value::from(ALBUM), Value::from(vec!["P1/L0/001"])]]
    );
}

#[test]
fn import_goes_to_this_album() {
    let ctx = TestContext::new();
    ctx.list("photosLibraryImportToAlbum", &["P9/L0/001"]);
    let lib = ctx.library();
    let album = Album::new(&lib, "A1").unwrap();

    let imported = album
        .import_photos(&[PathBuf::from("/tmp/IMG_1.jpeg")], true)
        .unwrap();

    assert_eq!(imported[0].uuid(), "P9");
    let args = &ctx.mock.calls_to("photosLibraryImportToAlbum")[0];
    assert_eq!(args[1], Value::from(ALBUM));
    assert_eq!(args[2], Value::from(true));
}

#[test]
fn remove_recreates_album_without_photos() {
    let ctx = TestContext::new();
    ctx.mock
        .on("albumParent", "F1/L0/020")
        .on("albumByName", 0)
        .on("photosLibraryCreateAlbumAtFolder", "A2/L0/040")
        .on("albumName", "Trip")
        .on("photosLibraryDeleteAlbum", Value::Missing)
        .on("albumSetName", Value::Missing);
    ctx.list("albumPhotes", &["P1/L0/001", "P2/L0/001", "P3/L0/001"]);
    ctx.list("albumAdd", &["P1/L0/001", "P3/L0/001"]);
    let lib = ctx.library();
    let mut album = Album::new(&lib, "A1").unwrap();

    album.remove_by_id(&["P2/L0/001"]).unwrap();

    assert_eq!(album.uuid(), "A2", "handle follows the replacement");
    let create = &ctx.mock.calls_to("photosLibraryCreateAlbumAtFolder")[0];
    assert_eq!(create[1], Value::from("F1/L0/020"));
    assert_eq!(
        ctx.mock.calls_to("albumAdd")[0][1],
        Value::from(vec!["P1/L0/001", "P3/L0/001"])
    );
    assert_eq!(ctx.targets("photosLibraryDeleteAlbum"), vec![ALBUM]);
    assert_eq!(
        ctx.mock.calls_to("albumSetName"),
        vec![vec![Value::from("A2/L0/040"), Value::from("Trip")]]
    );
}

#[test]
fn removing_every_photo_skips_add() {
    let ctx = TestContext::new();
    ctx.mock
        .on("albumParent", 0)
        .on("albumByName", 0)
        .on("photosLibraryCreateAlbum", "A2/L0/040")
        .on("albumName", "Trip")
        .on("photosLibraryDeleteAlbum", Value::Missing)
        .on("albumSetName", Value::Missing);
    ctx.list("albumPhotes", &["P1/L0/001"]);
    let lib = ctx.library();
    let mut album = Album::new(&lib, "A1").unwrap();
    let photo = Photo::new(&lib, "P1").unwrap();

    album.remove(&[photo]).unwrap();

    assert_eq!(ctx.mock.call_count("albumAdd"), 0);
    assert_eq!(ctx.mock.call_count("photosLibraryCreateAlbum"), 1);
}

#[test]
fn export_reveals_once_for_all_photos() {
    let ctx = TestContext::new();
    ctx.list("albumPhotes", &[]);
    ctx.mock.on("revealInFinder", Value::Missing);
    let lib = ctx.library();
    let album = Album::new(&lib, "A1").unwrap();
    let dest = tempfile::TempDir::new().unwrap();
    let options = ExportOptions {
        reveal_in_finder: true,
        ..ExportOptions::default()
    };

    let exported = album.export(dest.path(), &options).unwrap();

    assert!(exported.is_empty());
    assert_eq!(ctx.mock.call_count("revealInFinder"), 0, "nothing to reveal");
}

#[test]
fn lookup_by_name_finds_album() {
    let ctx = TestContext::new();
    ctx.mock.on("albumByName", ALBUM);
    let lib = ctx.library();

    let album = lib
        .album(&Lookup::Name("Trip".to_string()), false)
        .unwrap()
        .unwrap();

    assert_eq!(album, Album::new(&lib, "A1").unwrap());
}
