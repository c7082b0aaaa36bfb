// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Photos library and its top-level operations.
//!
//! Every method is a call to a named handler through the [`Gateway`];
//! [`Album`], [`Folder`] and [`Photo`] borrow the library for theirs.

use std::path::{Path, PathBuf};

use chrono::Local;
use photoscript_core::{Gateway, Value};
use rand::Rng;

use crate::album::Album;
use crate::error::{Error, Result};
use crate::export::{self, CopyMethod, ExportOptions};
use crate::folder::Folder;
use crate::ident;
use crate::photo::Photo;
use crate::reply;

/// Seconds to wait for Photos to answer when opening the library.
pub const WAIT_FOR_PHOTOS_SECS: i64 = 300;

const TEMP_ALBUM_PREFIX: &str = "photoscript_";
const TEMP_SUFFIX_LEN: usize = 10;
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Name or uuid of an album or folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Name(String),
    Uuid(String),
}

/// Which photos [`PhotosLibrary::photos`] yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoQuery {
    /// Every photo, fetched one call at a time.
    All,
    /// Photos matching a text search.
    Search(String),
    /// Photos with these uuids or ids.
    Uuids(Vec<String>),
    /// Zero-based half-open range, like `start..stop`.
    Range { start: usize, stop: usize },
}

/// Handle on the running Photos app.
pub struct PhotosLibrary {
    gateway: Gateway,
    version: String,
    version_number: f64,
}

impl PhotosLibrary {
    /// Wait for Photos to answer, then cache its version.
    pub fn new(gateway: Gateway) -> Result<Self> {
        gateway.invoke(
            "photosLibraryWaitForPhotos",
            &[Value::from(WAIT_FOR_PHOTOS_SECS)],
        )?;
        let version = reply::text(
            "photosLibraryVersion",
            gateway.invoke("photosLibraryVersion", &[])?,
        )?;
        let version_number = ident::version_number(&version);
        tracing::debug!(%version, "connected to Photos");
        Ok(PhotosLibrary {
            gateway,
            version,
            version_number,
        })
    }

    pub(crate) fn call(&self, operation: &str, args: &[Value]) -> Result<Value> {
        Ok(self.gateway.invoke(operation, args)?)
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut Gateway {
        &mut self.gateway
    }

    /// Version of Photos as reported at startup.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub(crate) fn version_number(&self) -> f64 {
        self.version_number
    }

    pub fn activate(&self) -> Result<()> {
        self.call("photosLibraryActivate", &[])?;
        Ok(())
    }

    pub fn quit(&self) -> Result<()> {
        self.call("photosLibraryQuit", &[])?;
        Ok(())
    }

    /// Switch Photos to the library at `path`, waiting `delay_secs` for the user.
    pub fn open(&self, path: &Path, delay_secs: u64) -> Result<()> {
        if !path.is_dir() {
            return Err(Error::NotALibrary(path.to_path_buf()));
        }
        self.activate()?;
        let delay = i64::try_from(delay_secs).unwrap_or(i64::MAX);
        self.call("photosLibraryOpen", &[Value::from(path), Value::from(delay)])?;
        Ok(())
    }

    pub fn running(&self) -> Result<bool> {
        reply::boolean(
            "photosLibraryIsRunning",
            self.call("photosLibraryIsRunning", &[])?,
        )
    }

    pub fn hide(&self) -> Result<()> {
        self.call("photosLibraryHide", &[])?;
        Ok(())
    }

    /// True if Photos is hidden or not running.
    pub fn hidden(&self) -> Result<bool> {
        reply::boolean(
            "photosLibraryIsHidden",
            self.call("photosLibraryIsHidden", &[])?,
        )
    }

    pub fn name(&self) -> Result<String> {
        reply::text("photosLibraryName", self.call("photosLibraryName", &[])?)
    }

    pub fn frontmost(&self) -> Result<bool> {
        reply::boolean(
            "photosLibraryIsFrontMost",
            self.call("photosLibraryIsFrontMost", &[])?,
        )
    }

    /// Photos currently selected in the Photos window.
    pub fn selection(&self) -> Result<Vec<Photo<'_>>> {
        let ids = reply::text_list(
            "photosLibraryGetSelection",
            self.call("photosLibraryGetSelection", &[])?,
        )?;
        ids.iter().map(|id| Photo::new(self, id)).collect()
    }

    pub fn favorites(&self) -> Result<Album<'_>> {
        let id = reply::text(
            "photosLibraryFavorites",
            self.call("photosLibraryFavorites", &[])?,
        )?;
        Album::new(self, &id)
    }

    /// Number of photos in the library.
    pub fn len(&self) -> Result<usize> {
        reply::count("photosLibraryCount", self.call("photosLibraryCount", &[])?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Photos selected by `query`.
    ///
    /// Lookups run when the iterator advances, so a long listing can be
    /// consumed as it arrives.
    pub fn photos(&self, query: PhotoQuery) -> Result<PhotoIter<'_>> {
        let source = match query {
            PhotoQuery::All => Source::All {
                next: 1,
                count: self.len()?,
            },
            PhotoQuery::Search(text) => Source::Ids(
                reply::text_list(
                    "photosLibrarySearchPhotos",
                    self.call("photosLibrarySearchPhotos", &[Value::from(text)])?,
                )?
                .into_iter(),
            ),
            PhotoQuery::Uuids(uuids) => Source::Ids(uuids.into_iter()),
            PhotoQuery::Range { start, stop } => {
                self.check_range(start, stop)?;
                let ids = if start == stop {
                    Vec::new()
                } else {
                    reply::text_list(
                        "photosLibraryGetPhotoByRange",
                        self.call(
                            "photosLibraryGetPhotoByRange",
                            &[Value::from(start + 1), Value::from(stop)],
                        )?,
                    )?
                };
                Source::Ids(ids.into_iter())
            }
        };
        Ok(PhotoIter { lib: self, source })
    }

    fn check_range(&self, start: usize, stop: usize) -> Result<()> {
        if start > stop {
            return Err(Error::InvalidRange(format!(
                "start ({start}) must be <= stop ({stop})"
            )));
        }
        let count = self.len()?;
        if count == 0 || start > count - 1 || stop < 1 || stop > count {
            return Err(Error::InvalidRange(format!(
                "valid range is start: 0 to {}, stop: 1 to {}",
                count.saturating_sub(1),
                count
            )));
        }
        Ok(())
    }

    /// Import files, optionally straight into `album`.
    ///
    /// Unless `skip_duplicate_check`, Photos may block on a duplicate prompt.
    pub fn import_photos(
        &self,
        paths: &[PathBuf],
        album: Option<&Album<'_>>,
        skip_duplicate_check: bool,
    ) -> Result<Vec<Photo<'_>>> {
        let files = Value::from(paths.to_vec());
        let (operation, reply) = match album {
            Some(album) => (
                "photosLibraryImportToAlbum",
                self.call(
                    "photosLibraryImportToAlbum",
                    &[
                        files,
                        Value::from(album.id()),
                        Value::from(skip_duplicate_check),
                    ],
                )?,
            ),
            None => (
                "photosLibraryImport",
                self.call(
                    "photosLibraryImport",
                    &[files, Value::from(skip_duplicate_check)],
                )?,
            ),
        };
        reply::text_list(operation, reply)?
            .iter()
            .map(|id| Photo::new(self, id))
            .collect()
    }

    pub fn album_names(&self, top_level: bool) -> Result<Vec<String>> {
        reply::text_list(
            "photosLibraryAlbumNames",
            self.call("photosLibraryAlbumNames", &[Value::from(top_level)])?,
        )
    }

    pub fn folder_names(&self, top_level: bool) -> Result<Vec<String>> {
        reply::text_list(
            "photosLibraryFolderNames",
            self.call("photosLibraryFolderNames", &[Value::from(top_level)])?,
        )
    }

    /// Album by name (first match) or uuid.
    ///
    /// A name that matches nothing is `None`; an invalid uuid is an error.
    pub fn album(&self, lookup: &Lookup, top_level: bool) -> Result<Option<Album<'_>>> {
        match lookup {
            Lookup::Name(name) => {
                let found = reply::found_id(
                    "albumByName",
                    self.call("albumByName", &[Value::from(name), Value::from(top_level)])?,
                )?;
                found.map(|id| Album::new(self, &id)).transpose()
            }
            Lookup::Uuid(uuid) => Album::new(self, uuid).map(Some),
        }
    }

    pub fn albums(&self, top_level: bool) -> Result<Vec<Album<'_>>> {
        reply::text_list(
            "photosLibraryAlbumIDs",
            self.call("photosLibraryAlbumIDs", &[Value::from(top_level)])?,
        )?
        .iter()
        .map(|id| Album::new(self, id))
        .collect()
    }

    /// Create an album at the top level or inside `folder`.
    pub fn create_album(&self, name: &str, folder: Option<&Folder<'_>>) -> Result<Album<'_>> {
        let (operation, reply) = match folder {
            Some(folder) => (
                "photosLibraryCreateAlbumAtFolder",
                self.call(
                    "photosLibraryCreateAlbumAtFolder",
                    &[Value::from(name), Value::from(folder.id())],
                )?,
            ),
            None => (
                "photosLibraryCreateAlbum",
                self.call("photosLibraryCreateAlbum", &[Value::from(name)])?,
            ),
        };
        match reply::found_id(operation, reply)? {
            Some(id) => Album::new(self, &id),
            None => Err(Error::CreateFailed {
                kind: "album",
                name: name.to_string(),
            }),
        }
    }

    /// Delete an album; its photos stay in the library.
    pub fn delete_album(&self, album: &Album<'_>) -> Result<()> {
        self.call("photosLibraryDeleteAlbum", &[Value::from(album.id())])?;
        Ok(())
    }

    /// Folder by name (first match) or uuid.
    pub fn folder(&self, lookup: &Lookup, top_level: bool) -> Result<Option<Folder<'_>>> {
        match lookup {
            Lookup::Name(name) => {
                let found = reply::found_id(
                    "folderByName",
                    self.call("folderByName", &[Value::from(name), Value::from(top_level)])?,
                )?;
                found.map(|id| Folder::new(self, &id)).transpose()
            }
            Lookup::Uuid(uuid) => Folder::new(self, uuid).map(Some),
        }
    }

    /// Folder at `path`, top-level name first.
    pub fn folder_by_path<S: AsRef<str>>(&self, path: &[S]) -> Result<Option<Folder<'_>>> {
        let names: Vec<Value> = path.iter().map(|s| Value::from(s.as_ref())).collect();
        let found = reply::found_id(
            "folderByPath",
            self.call("folderByPath", &[Value::List(names)])?,
        )?;
        found.map(|id| Folder::new(self, &id)).transpose()
    }

    pub fn folders(&self, top_level: bool) -> Result<Vec<Folder<'_>>> {
        reply::text_list(
            "photosLibraryFolderIDs",
            self.call("photosLibraryFolderIDs", &[Value::from(top_level)])?,
        )?
        .iter()
        .map(|id| Folder::new(self, id))
        .collect()
    }

    /// Create a folder at the top level or inside `parent`.
    pub fn create_folder(&self, name: &str, parent: Option<&Folder<'_>>) -> Result<Folder<'_>> {
        let (operation, reply) = match parent {
            Some(parent) => (
                "photosLibraryCreateFolderAtFolder",
                self.call(
                    "photosLibraryCreateFolderAtFolder",
                    &[Value::from(name), Value::from(parent.id())],
                )?,
            ),
            None => (
                "photosLibraryCreateFolder",
                self.call("photosLibraryCreateFolder", &[Value::from(name)])?,
            ),
        };
        match reply::found_id(operation, reply)? {
            Some(id) => Folder::new(self, &id),
            None => Err(Error::CreateFailed {
                kind: "folder",
                name: name.to_string(),
            }),
        }
    }

    /// Create every missing folder along `path` and return the last one.
    pub fn make_folders<S: AsRef<str>>(&self, path: &[S]) -> Result<Folder<'_>> {
        let Some((first, rest)) = path.split_first() else {
            return Err(Error::InvalidArgument(
                "folder path cannot be empty".to_string(),
            ));
        };

        let first = first.as_ref();
        let mut folder = match self.folder(&Lookup::Name(first.to_string()), true)? {
            Some(folder) => folder,
            None => self.create_folder(first, None)?,
        };
        for name in rest {
            let name = name.as_ref();
            folder = match folder.folder(name)? {
                Some(sub) => sub,
                None => folder.create_folder(name)?,
            };
        }
        Ok(folder)
    }

    /// Album `name` inside the folder at `path`, creating whatever is missing.
    pub fn make_album_folders<S: AsRef<str>>(
        &self,
        name: &str,
        path: &[S],
    ) -> Result<Album<'_>> {
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "album name cannot be empty".to_string(),
            ));
        }
        let folder = self.make_folders(path)?;
        match folder.album(name)? {
            Some(album) => Ok(album),
            None => folder.create_album(name),
        }
    }

    pub fn delete_folder(&self, folder: &Folder<'_>) -> Result<()> {
        self.call("photosLibraryDeleteFolder", &[Value::from(folder.id())])?;
        Ok(())
    }

    /// An album name not used by any album in the library.
    pub fn temp_album_name(&self) -> Result<String> {
        loop {
            let name = temp_name(&mut rand::thread_rng());
            if self.album(&Lookup::Name(name.clone()), false)?.is_none() {
                return Ok(name);
            }
        }
    }

    /// Export `photo` into `destination` without clobbering existing files.
    ///
    /// The destination is checked before Photos is asked for anything.
    pub fn export_photo(
        &self,
        photo: &Photo<'_>,
        destination: &Path,
        options: &ExportOptions,
    ) -> Result<Vec<PathBuf>> {
        let copy = CopyMethod::platform_default(options.norsrc);
        self.export_with(photo, destination, options, copy)
    }

    /// Export each photo in turn, returning the files of each photo in order.
    ///
    /// Finder reveals every exported file once, at the end.
    pub fn export_photos(
        &self,
        photos: &[Photo<'_>],
        destination: &Path,
        options: &ExportOptions,
    ) -> Result<Vec<Vec<PathBuf>>> {
        let per_photo = ExportOptions {
            reveal_in_finder: false,
            ..options.clone()
        };
        let mut exported = Vec::with_capacity(photos.len());
        for photo in photos {
            let files = self.export_photo(photo, destination, &per_photo)?;
            tracing::info!(uuid = photo.uuid(), files = files.len(), "exported photo");
            exported.push(files);
        }

        let all: Vec<PathBuf> = exported.iter().flatten().cloned().collect();
        if options.reveal_in_finder && !all.is_empty() {
            self.reveal_in_finder(&all);
        }
        Ok(exported)
    }

    pub(crate) fn export_with(
        &self,
        photo: &Photo<'_>,
        destination: &Path,
        options: &ExportOptions,
        copy: CopyMethod,
    ) -> Result<Vec<PathBuf>> {
        export::validate_destination(destination)?;
        let scratch = export::scratch_dir()?;

        let timeout = i64::try_from(options.timeout_secs).unwrap_or(i64::MAX);
        let filename = self.call(
            "photoExport",
            &[
                Value::from(photo.id()),
                Value::from(scratch.path()),
                Value::from(options.original),
                Value::from(!options.original),
                Value::from(timeout),
            ],
        )?;
        if filename.is_missing() {
            tracing::info!(uuid = photo.uuid(), "Photos exported nothing");
            return Ok(Vec::new());
        }

        let reveal = |paths: &[PathBuf]| self.reveal_in_finder(paths);
        let post: Option<&dyn Fn(&[PathBuf])> = if options.reveal_in_finder {
            Some(&reveal)
        } else {
            None
        };
        export::finalize_export(scratch, destination, options.overwrite, &copy, post)
    }

    /// Select `paths` in Finder. Failures are logged and otherwise ignored.
    pub fn reveal_in_finder(&self, paths: &[PathBuf]) {
        if let Err(e) = self.call("revealInFinder", &[Value::from(paths.to_vec())]) {
            tracing::warn!(error = %e, "could not reveal exported files in Finder");
        }
    }
}

impl std::fmt::Debug for PhotosLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotosLibrary")
            .field("version", &self.version)
            .finish()
    }
}

/// `photoscript_<YYYYmmddHHMMSS>_<10 random letters>`.
fn temp_name(rng: &mut impl Rng) -> String {
    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let suffix: String = (0..TEMP_SUFFIX_LEN)
        .map(|_| char::from(LETTERS[rng.gen_range(0..LETTERS.len())]))
        .collect();
    format!("{TEMP_ALBUM_PREFIX}{stamp}_{suffix}")
}

enum Source {
    Ids(std::vec::IntoIter<String>),
    All { next: usize, count: usize },
}

/// Iterator over the photos of a [`PhotoQuery`].
pub struct PhotoIter<'a> {
    lib: &'a PhotosLibrary,
    source: Source,
}

impl<'a> Iterator for PhotoIter<'a> {
    type Item = Result<Photo<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            Source::Ids(ids) => ids.next().map(|id| Photo::new(self.lib, &id)),
            Source::All { next, count } => {
                if *next > *count {
                    return None;
                }
                let index = *next;
                *next += 1;
                Some(self.lib.photo_at(index))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Source::Ids(ids) => ids.size_hint(),
            Source::All { next, count } => {
                let left = (count + 1).saturating_sub(*next);
                (left, Some(left))
            }
        }
    }
}

impl PhotosLibrary {
    /// Photo at 1-based `index`.
    fn photo_at(&self, index: usize) -> Result<Photo<'_>> {
        let ids = reply::text_list(
            "photosLibraryGetPhotoByRange",
            self.call(
                "photosLibraryGetPhotoByRange",
                &[Value::from(index), Value::from(index)],
            )?,
        )?;
        match ids.first() {
            Some(id) => Photo::new(self, id),
            None => Err(Error::unexpected(
                "photosLibraryGetPhotoByRange",
                "one photo id",
            )),
        }
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
