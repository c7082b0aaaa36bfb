// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::cell::RefCell;
use tempfile::TempDir;

/// A scratch directory holding `names`, each with its name as content.
fn scratch_with(names: &[&str]) -> TempDir {
    let scratch = scratch_dir().unwrap();
    for name in names {
        fs::write(scratch.path().join(name), name).unwrap();
    }
    scratch
}

fn export(names: &[&str], dest: &Path, overwrite: bool) -> Vec<PathBuf> {
    finalize_export(scratch_with(names), dest, overwrite, &CopyMethod::Std, None).unwrap()
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn no_collision_keeps_name() {
    let dest = TempDir::new().unwrap();

    let paths = export(&["IMG_2510.jpeg"], dest.path(), false);

    similar_asserts::assert_eq!(paths, vec![dest.path().join("IMG_2510.jpeg")]);
    assert_eq!(
        fs::read_to_string(&paths[0]).unwrap(),
        "IMG_2510.jpeg",
        "content is copied"
    );
}

#[test]
fn repeated_exports_count_up_from_one() {
    let dest = TempDir::new().unwrap();

    let first = export(&["IMG_2510.jpeg"], dest.path(), false);
    let second = export(&["IMG_2510.jpeg"], dest.path(), false);
    let third = export(&["IMG_2510.jpeg"], dest.path(), false);

    assert_eq!(first, vec![dest.path().join("IMG_2510.jpeg")]);
    assert_eq!(second, vec![dest.path().join("IMG_2510 (1).jpeg")]);
    assert_eq!(third, vec![dest.path().join("IMG_2510 (2).jpeg")]);
}

#[test]
fn overwrite_reuses_the_same_path() {
    let dest = TempDir::new().unwrap();

    let first = export(&["IMG_2510.jpeg"], dest.path(), true);
    let second = export(&["IMG_2510.jpeg"], dest.path(), true);

    assert_eq!(first, second);
    assert_eq!(names_in(dest.path()), vec!["IMG_2510.jpeg"]);
}

#[test]
fn collision_check_ignores_case() {
    let dest = TempDir::new().unwrap();
    fs::write(dest.path().join("img_2510.JPG"), "older").unwrap();

    let paths = export(&["IMG_2510.jpeg"], dest.path(), false);

    assert_eq!(paths, vec![dest.path().join("IMG_2510 (1).jpeg")]);
    assert_eq!(
        fs::read_to_string(dest.path().join("img_2510.JPG")).unwrap(),
        "older"
    );
}

#[test]
fn paired_files_share_a_resolved_stem() {
    let dest = TempDir::new().unwrap();
    fs::write(dest.path().join("IMG_0001.jpeg"), "older").unwrap();

    let paths = export(&["IMG_0001.jpeg", "IMG_0001.mov"], dest.path(), false);

    similar_asserts::assert_eq!(
        paths,
        vec![
            dest.path().join("IMG_0001 (1).jpeg"),
            dest.path().join("IMG_0001 (1).mov"),
        ]
    );
}

#[test]
fn files_are_discovered_in_name_order() {
    let dest = TempDir::new().unwrap();

    let paths = export(&["c.heic", "a.jpeg", "b.mov"], dest.path(), false);

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.jpeg", "b.mov", "c.heic"]);
}

#[test]
fn hidden_scratch_files_are_skipped() {
    let dest = TempDir::new().unwrap();

    let paths = export(&[".DS_Store", "IMG_1.jpeg"], dest.path(), false);

    assert_eq!(paths, vec![dest.path().join("IMG_1.jpeg")]);
    assert_eq!(names_in(dest.path()), vec!["IMG_1.jpeg"]);
}

#[test]
fn scratch_is_removed_after_success() {
    let dest = TempDir::new().unwrap();
    let scratch = scratch_with(&["IMG_1.jpeg"]);
    let scratch_path = scratch.path().to_path_buf();

    finalize_export(scratch, dest.path(), false, &CopyMethod::Std, None).unwrap();

    assert!(!scratch_path.exists());
}

#[test]
fn scratch_is_removed_on_invalid_destination() {
    let dest = TempDir::new().unwrap();
    let missing = dest.path().join("missing");
    let scratch = scratch_with(&["IMG_1.jpeg"]);
    let scratch_path = scratch.path().to_path_buf();

    let err = finalize_export(scratch, &missing, false, &CopyMethod::Std, None).unwrap_err();

    assert!(matches!(err, Error::InvalidDestination(ref p) if p == &missing));
    assert!(!scratch_path.exists());
}

#[test]
fn scratch_is_removed_when_a_copy_fails() {
    let dest = TempDir::new().unwrap();
    // A directory in the way makes the overwrite copy fail.
    fs::create_dir(dest.path().join("IMG_2.jpeg")).unwrap();
    let scratch = scratch_with(&["IMG_1.jpeg", "IMG_2.jpeg"]);
    let scratch_path = scratch.path().to_path_buf();

    let err = finalize_export(scratch, dest.path(), true, &CopyMethod::Std, None).unwrap_err();

    assert!(matches!(err, Error::CopyFailed { .. }), "{err}");
    assert!(!scratch_path.exists());
    assert!(
        dest.path().join("IMG_1.jpeg").is_file(),
        "earlier copies are kept"
    );
}

#[test]
fn post_action_receives_final_paths() {
    let dest = TempDir::new().unwrap();
    let seen = RefCell::new(Vec::new());
    let post = |paths: &[PathBuf]| seen.borrow_mut().push(paths.to_vec());

    let paths = finalize_export(
        scratch_with(&["IMG_1.jpeg"]),
        dest.path(),
        false,
        &CopyMethod::Std,
        Some(&post),
    )
    .unwrap();

    assert_eq!(seen.into_inner(), vec![paths]);
}

#[test]
fn post_action_skipped_when_nothing_exported() {
    let dest = TempDir::new().unwrap();
    let calls = RefCell::new(0);
    let post = |_: &[PathBuf]| *calls.borrow_mut() += 1;

    let paths = finalize_export(
        scratch_with(&[]),
        dest.path(),
        false,
        &CopyMethod::Std,
        Some(&post),
    )
    .unwrap();

    assert!(paths.is_empty());
    assert_eq!(calls.into_inner(), 0);
}

#[test]
fn resolve_stem_skips_taken_numbers() {
    let dest = TempDir::new().unwrap();
    for name in ["trip.jpg", "Trip (1).png", "trip (3).jpeg", "trips.jpg"] {
        fs::write(dest.path().join(name), "").unwrap();
    }

    assert_eq!(resolve_stem("trip", dest.path()), "trip (2)");
    assert_eq!(resolve_stem("other", dest.path()), "other");
}

#[test]
fn registry_reuses_resolution() {
    let dest = TempDir::new().unwrap();
    let mut registry = NameRegistry::new();

    assert_eq!(registry.resolve("IMG", dest.path()), "IMG");
    fs::write(dest.path().join("IMG.jpeg"), "").unwrap();
    assert_eq!(registry.resolve("IMG", dest.path()), "IMG");
    assert_eq!(resolve_stem("IMG", dest.path()), "IMG (1)");
}

#[test]
fn find_files_matches_prefix_ignoring_case() {
    let dest = TempDir::new().unwrap();
    for name in ["IMG_1.jpeg", "img_1 (1).JPG", "IMG_2.jpeg"] {
        fs::write(dest.path().join(name), "").unwrap();
    }

    assert_eq!(
        find_files("Img_1", dest.path()),
        vec!["IMG_1.jpeg", "img_1 (1).JPG"]
    );
}

#[test]
fn find_files_in_missing_dir_is_empty() {
    let dest = TempDir::new().unwrap();
    assert!(find_files("IMG", &dest.path().join("nope")).is_empty());
}

#[yare::parameterized(
    simple = { "IMG_2510.jpeg", "IMG_2510", ".jpeg" },
    numbered = { "IMG_2510 (1).jpeg", "IMG_2510 (1)", ".jpeg" },
    double_extension = { "archive.tar.gz", "archive.tar", ".gz" },
    no_extension = { "README", "README", "" },
    dotfile = { ".hidden", ".hidden", "" },
)]
fn split_name_cases(name: &str, stem: &str, suffix: &str) {
    assert_eq!(split_name(name), (stem, suffix));
}

#[test]
fn validate_destination_rejects_files() {
    let dest = TempDir::new().unwrap();
    let file = dest.path().join("file.txt");
    fs::write(&file, "").unwrap();

    assert!(validate_destination(dest.path()).is_ok());
    assert!(matches!(
        validate_destination(&file),
        Err(Error::InvalidDestination(_))
    ));
}

#[test]
fn scratch_dir_is_prefixed() {
    let scratch = scratch_dir().unwrap();
    let name = scratch.path().file_name().unwrap().to_string_lossy();
    assert!(name.starts_with(SCRATCH_PREFIX));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn platform_default_is_plain_copy_off_macos() {
    assert_eq!(CopyMethod::platform_default(true), CopyMethod::Std);
}

#[cfg(target_os = "macos")]
#[test]
fn platform_default_is_ditto_on_macos() {
    assert_eq!(
        CopyMethod::platform_default(true),
        CopyMethod::Ditto { norsrc: true }
    );
}
