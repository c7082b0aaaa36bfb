// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use photoscript_core::Value;

use crate::album::Album;
use crate::error::{Error, Result};
use crate::ident::{self, ObjectId, ObjectKind};
use crate::library::PhotosLibrary;
use crate::reply;

/// A folder of albums and other folders.
#[derive(Debug, Clone)]
pub struct Folder<'a> {
    lib: &'a PhotosLibrary,
    ident: ObjectId,
}

impl<'a> Folder<'a> {
    pub(crate) fn new(lib: &'a PhotosLibrary, raw: &str) -> Result<Self> {
        let ident = ident::normalize(ObjectKind::Folder, raw, lib.version_number());
        let exists = reply::boolean(
            "folderExists",
            lib.call("folderExists", &[Value::from(&ident.id)])?,
        )?;
        if !exists {
            return Err(Error::InvalidId {
                kind: "folder",
                id: ident.uuid,
            });
        }
        Ok(Folder { lib, ident })
    }

    pub fn uuid(&self) -> &str {
        &self.ident.uuid
    }

    pub fn id(&self) -> &str {
        &self.ident.id
    }

    pub fn name(&self) -> Result<String> {
        reply::text_or_empty("folderName", self.call("folderName", &[])?)
    }

    pub fn set_name(&self, name: &str) -> Result<()> {
        self.call("folderSetName", &[Value::from(name)])?;
        Ok(())
    }

    pub fn title(&self) -> Result<String> {
        self.name()
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        self.set_name(title)
    }

    pub fn parent_id(&self) -> Result<Option<String>> {
        reply::found_id("folderParent", self.call("folderParent", &[])?)
    }

    pub fn parent(&self) -> Result<Option<Folder<'a>>> {
        self.parent_id()?
            .map(|id| Folder::new(self.lib, &id))
            .transpose()
    }

    pub fn path_str(&self, delim: char) -> Result<String> {
        reply::text(
            "folderGetPath",
            self.call("folderGetPath", &[Value::from(delim.to_string())])?,
        )
    }

    /// Ancestor folders, top level first; empty for a top-level folder.
    pub fn path(&self) -> Result<Vec<Folder<'a>>> {
        self.folders_from("folderPathIDs")
    }

    pub fn albums(&self) -> Result<Vec<Album<'a>>> {
        reply::text_list("folderAlbums", self.call("folderAlbums", &[])?)?
            .iter()
            .map(|id| Album::new(self.lib, id))
            .collect()
    }

    /// First album directly inside this folder named `name`.
    pub fn album(&self, name: &str) -> Result<Option<Album<'a>>> {
        for album in self.albums()? {
            if album.name()? == name {
                return Ok(Some(album));
            }
        }
        Ok(None)
    }

    pub fn subfolders(&self) -> Result<Vec<Folder<'a>>> {
        self.folders_from("folderFolders")
    }

    /// First subfolder named `name`.
    pub fn folder(&self, name: &str) -> Result<Option<Folder<'a>>> {
        for folder in self.subfolders()? {
            if folder.name()? == name {
                return Ok(Some(folder));
            }
        }
        Ok(None)
    }

    pub fn create_album(&self, name: &str) -> Result<Album<'a>> {
        self.lib.create_album(name, Some(self))
    }

    pub fn create_folder(&self, name: &str) -> Result<Folder<'a>> {
        self.lib.create_folder(name, Some(self))
    }

    pub fn spotlight(&self) -> Result<()> {
        self.call("folderSpotlight", &[])?;
        Ok(())
    }

    /// Number of albums and folders directly inside.
    pub fn len(&self) -> Result<usize> {
        reply::count("folderCount", self.call("folderCount", &[])?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn folders_from(&self, operation: &str) -> Result<Vec<Folder<'a>>> {
        reply::text_list(operation, self.call(operation, &[])?)?
            .iter()
            .map(|id| Folder::new(self.lib, id))
            .collect()
    }

    fn call(&self, operation: &str, args: &[Value]) -> Result<Value> {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Value::from(self.id()));
        all.extend_from_slice(args);
        self.lib.call(operation, &all)
    }
}

impl PartialEq for Folder<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ident == other.ident
    }
}

#[cfg(test)]
#[path = "folder_tests.rs"]
mod tests;
