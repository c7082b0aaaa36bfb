// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use photoscript_core::Value;

use crate::error::{Error, Result};
use crate::export::ExportOptions;
use crate::folder::Folder;
use crate::ident::{self, ObjectId, ObjectKind};
use crate::library::PhotosLibrary;
use crate::photo::Photo;
use crate::reply;

/// An album in the library.
#[derive(Debug, Clone)]
pub struct Album<'a> {
    lib: &'a PhotosLibrary,
    ident: ObjectId,
}

impl<'a> Album<'a> {
    /// Album for a uuid or full id; fails unless Photos knows it.
    pub(crate) fn new(lib: &'a PhotosLibrary, raw: &str) -> Result<Self> {
        let ident = ident::normalize(ObjectKind::Album, raw, lib.version_number());
        let exists = reply::boolean(
            "albumExists",
            lib.call("albumExists", &[Value::from(&ident.id)])?,
        )?;
        if !exists {
            return Err(Error::InvalidId {
                kind: "album",
                id: ident.uuid,
            });
        }
        Ok(Album { lib, ident })
    }

    pub fn uuid(&self) -> &str {
        &self.ident.uuid
    }

    /// Full AppleScript id.
    pub fn id(&self) -> &str {
        &self.ident.id
    }

    /// Name, empty if unnamed.
    pub fn name(&self) -> Result<String> {
        reply::text_or_empty("albumName", self.call("albumName", &[])?)
    }

    pub fn set_name(&self, name: &str) -> Result<()> {
        self.call("albumSetName", &[Value::from(name)])?;
        Ok(())
    }

    /// Alias for [`name`](Self::name).
    pub fn title(&self) -> Result<String> {
        self.name()
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        self.set_name(title)
    }

    /// Id of the containing folder, `None` at the top level.
    pub fn parent_id(&self) -> Result<Option<String>> {
        reply::found_id("albumParent", self.call("albumParent", &[])?)
    }

    pub fn parent(&self) -> Result<Option<Folder<'a>>> {
        self.parent_id()?
            .map(|id| Folder::new(self.lib, &id))
            .transpose()
    }

    /// Path within the library, e.g. `Travel/2024/Lisbon`.
    pub fn path_str(&self, delim: char) -> Result<String> {
        reply::text(
            "albumGetPath",
            self.call("albumGetPath", &[Value::from(delim.to_string())])?,
        )
    }

    pub fn photos(&self) -> Result<Vec<Photo<'a>>> {
        reply::text_list("albumPhotes", self.call("albumPhotes", &[])?)?
            .iter()
            .map(|id| Photo::new(self.lib, id))
            .collect()
    }

    /// Add library photos to this album; returns the photos added.
    pub fn add(&self, photos: &[Photo<'_>]) -> Result<Vec<Photo<'a>>> {
        let ids: Vec<&str> = photos.iter().map(|p| p.id()).collect();
        reply::text_list("albumAdd", self.call("albumAdd", &[Value::from(ids)])?)?
            .iter()
            .map(|id| Photo::new(self.lib, id))
            .collect()
    }

    /// Import files straight into this album.
    pub fn import_photos(
        &self,
        paths: &[PathBuf],
        skip_duplicate_check: bool,
    ) -> Result<Vec<Photo<'a>>> {
        self.lib.import_photos(paths, Some(self), skip_duplicate_check)
    }

    /// Export every photo in the album.
    ///
    /// Finder reveals all exported files once, at the end.
    pub fn export(&self, destination: &Path, options: &ExportOptions) -> Result<Vec<PathBuf>> {
        let exported = self
            .lib
            .export_photos(&self.photos()?, destination, options)?;
        Ok(exported.into_iter().flatten().collect())
    }

    /// Remove photos with the given ids.
    ///
    /// Photos cannot remove from an album through AppleScript, so this
    /// builds a replacement album in the same folder without those photos,
    /// deletes this one and takes over its name. `self` then refers to the
    /// replacement.
    pub fn remove_by_id<S: AsRef<str>>(&mut self, photo_ids: &[S]) -> Result<()> {
        let parent = self.parent()?;
        let replacement = self
            .lib
            .create_album(&self.lib.temp_album_name()?, parent.as_ref())?;

        let keep: Vec<Photo<'a>> = self
            .photos()?
            .into_iter()
            .filter(|photo| !photo_ids.iter().any(|id| id.as_ref() == photo.id()))
            .collect();
        if !keep.is_empty() {
            replacement.add(&keep)?;
        }

        let name = self.name()?;
        self.lib.delete_album(self)?;
        replacement.set_name(&name)?;
        tracing::info!(album = %name, removed = photo_ids.len(), "recreated album without photos");
        self.ident = replacement.ident;
        Ok(())
    }

    pub fn remove(&mut self, photos: &[Photo<'_>]) -> Result<()> {
        let ids: Vec<&str> = photos.iter().map(|p| p.id()).collect();
        self.remove_by_id(&ids)
    }

    pub fn spotlight(&self) -> Result<()> {
        self.call("albumSpotlight", &[])?;
        Ok(())
    }

    /// Number of photos in the album.
    pub fn len(&self) -> Result<usize> {
        reply::count("albumCount", self.call("albumCount", &[])?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Call `operation` with this album's id first.
    fn call(&self, operation: &str, args: &[Value]) -> Result<Value> {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Value::from(self.id()));
        all.extend_from_slice(args);
        self.lib.call(operation, &all)
    }
}

impl PartialEq for Album<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ident == other.ident
    }
}

#[cfg(test)]
#[path = "album_tests.rs"]
mod tests;
