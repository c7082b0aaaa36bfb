// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["photoscript"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn parse_err(args: &[&str]) -> clap::Error {
    let mut argv = vec!["photoscript"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv) {
        Ok(_) => panic!("expected {args:?} to be rejected"),
        Err(e) => e,
    }
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn verbose_counts_and_is_global() {
    assert_eq!(parse(&["info"]).verbose, 0);
    assert_eq!(parse(&["-vv", "info"]).verbose, 2);
    assert_eq!(parse(&["albums", "-v"]).verbose, 1);
}

#[test]
fn export_collects_uuids_and_flags() {
    let cli = parse(&[
        "export", "P1", "P2", "-d", "/tmp/out", "--original", "--timeout", "30",
    ]);

    let Command::Export {
        uuids,
        export,
        output,
    } = cli.command
    else {
        panic!("expected export");
    };
    assert_eq!(uuids, vec!["P1", "P2"]);
    assert_eq!(export.dest, PathBuf::from("/tmp/out"));
    assert!(export.original);
    assert!(!export.overwrite);
    assert_eq!(export.timeout, Some(30));
    assert_eq!(output, OutputFormat::Text);
}

#[test]
fn export_requires_destination() {
    let err = parse_err(&["export", "P1"]);
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn export_options_fall_back_to_config() {
    let args = ExportArgs {
        dest: PathBuf::from("/tmp"),
        ..ExportArgs::default()
    };
    let config = crate::config::ExportConfig {
        timeout_secs: 45,
        norsrc: true,
    };

    let options = args.options(&config);

    assert_eq!(options.timeout_secs, 45);
    assert!(options.norsrc);
    assert!(!options.reveal_in_finder);
}

#[test]
fn photo_selection_is_exclusive() {
    let err = parse_err(&["photos", "--search", "beach", "--range", "0:5"]);
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn uuids_split_on_commas() {
    let Command::Photos { selection, .. } = parse(&["photos", "-u", "P1,P2", "-u", "P3"]).command
    else {
        panic!("expected photos");
    };
    assert_eq!(selection.uuid, vec!["P1", "P2", "P3"]);
}

#[yare::parameterized(
    simple = { "0:10", Ok((0, 10)) },
    spaced = { " 3 : 4 ", Ok((3, 4)) },
    no_colon = { "10", Err("expected START:STOP".to_string()) },
    bad_start = { "a:4", Err("invalid start 'a'".to_string()) },
    bad_stop = { "1:-4", Err("invalid stop '-4'".to_string()) },
)]
fn range_parsing(input: &str, expected: Result<(usize, usize), String>) {
    assert_eq!(parse_range(input), expected);
}

#[yare::parameterized(
    nested = { "Travel/2024", &["Travel", "2024"] },
    extra_slashes = { "/Travel//2024/", &["Travel", "2024"] },
    single = { "Travel", &["Travel"] },
)]
fn folder_path_parsing(input: &str, expected: &[&str]) {
    assert_eq!(parse_folder_path(input).unwrap().0, expected);
}

#[test]
fn empty_folder_path_is_rejected() {
    assert!(parse_folder_path(" / ").is_err());
}

#[test]
fn album_create_takes_folder_path() {
    let Command::Album(AlbumCommand::Create { name, folder, .. }) =
        parse(&["album", "create", "Lisbon", "--folder", "Travel/2024"]).command
    else {
        panic!("expected album create");
    };
    assert_eq!(name, "Lisbon");
    assert_eq!(
        folder,
        Some(FolderPath(vec!["Travel".to_string(), "2024".to_string()]))
    );
}

#[test]
fn blank_album_name_is_rejected() {
    let err = parse_err(&["album", "delete", "  "]);
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn output_accepts_ids_alias() {
    let Command::Albums { output, .. } = parse(&["albums", "-o", "ids"]).command else {
        panic!("expected albums");
    };
    assert_eq!(output, OutputFormat::Id);
}

#[test]
fn import_defaults_to_id_output() {
    let Command::Import { output, files, .. } = parse(&["import", "a.jpeg"]).command else {
        panic!("expected import");
    };
    assert_eq!(output, OutputFormat::Id);
    assert_eq!(files, vec![PathBuf::from("a.jpeg")]);
}

#[test]
fn schema_names() {
    let Command::Schema(cmd) = parse(&["schema", "export"]).command else {
        panic!("expected schema");
    };
    assert_eq!(cmd, SchemaCommand::Export);
}
