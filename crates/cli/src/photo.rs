// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use photoscript_core::Value;

use crate::album::Album;
use crate::error::{Error, Result};
use crate::export::ExportOptions;
use crate::ident::{self, ObjectId, ObjectKind};
use crate::library::PhotosLibrary;
use crate::reply;

/// Date format exchanged with the `photoDate` handlers.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Latitude and longitude in degrees; either may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(Error::InvalidLocation(format!(
                    "latitude must be in range -90.0 to 90.0, got {lat}"
                )));
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(Error::InvalidLocation(format!(
                    "longitude must be in range -180.0 to 180.0, got {lon}"
                )));
            }
        }
        Ok(())
    }
}

/// A photo or video in the library.
#[derive(Debug, Clone)]
pub struct Photo<'a> {
    lib: &'a PhotosLibrary,
    ident: ObjectId,
}

impl<'a> Photo<'a> {
    pub(crate) fn new(lib: &'a PhotosLibrary, raw: &str) -> Result<Self> {
        let ident = ident::normalize(ObjectKind::Photo, raw, lib.version_number());
        let exists = reply::boolean(
            "photoExists",
            lib.call("photoExists", &[Value::from(&ident.uuid)])?,
        )?;
        if !exists {
            return Err(Error::InvalidId {
                kind: "photo",
                id: ident.uuid,
            });
        }
        Ok(Photo { lib, ident })
    }

    pub fn uuid(&self) -> &str {
        &self.ident.uuid
    }

    pub fn id(&self) -> &str {
        &self.ident.id
    }

    pub fn name(&self) -> Result<String> {
        reply::text_or_empty("photoName", self.call("photoName", &[])?)
    }

    pub fn set_name(&self, name: &str) -> Result<()> {
        self.call("photoSetName", &[Value::from(name)])?;
        Ok(())
    }

    pub fn title(&self) -> Result<String> {
        self.name()
    }

    pub fn description(&self) -> Result<String> {
        reply::text_or_empty("photoDescription", self.call("photoDescription", &[])?)
    }

    pub fn set_description(&self, description: &str) -> Result<()> {
        self.call("photoSetDescription", &[Value::from(description)])?;
        Ok(())
    }

    pub fn keywords(&self) -> Result<Vec<String>> {
        reply::text_list("photoKeywords", self.call("photoKeywords", &[])?)
    }

    pub fn set_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> Result<()> {
        let keywords: Vec<&str> = keywords.iter().map(AsRef::as_ref).collect();
        self.call("photoSetKeywords", &[Value::from(keywords)])?;
        Ok(())
    }

    pub fn favorite(&self) -> Result<bool> {
        reply::boolean("photoFavorite", self.call("photoFavorite", &[])?)
    }

    pub fn set_favorite(&self, favorite: bool) -> Result<()> {
        self.call("photoSetFavorite", &[Value::from(favorite)])?;
        Ok(())
    }

    /// Height in pixels.
    pub fn height(&self) -> Result<usize> {
        reply::count("photoHeight", self.call("photoHeight", &[])?)
    }

    /// Width in pixels.
    pub fn width(&self) -> Result<usize> {
        reply::count("photoWidth", self.call("photoWidth", &[])?)
    }

    /// Altitude in meters, if Photos has one.
    pub fn altitude(&self) -> Result<Option<f64>> {
        reply::optional_real("photoAltitude", self.call("photoAltitude", &[])?)
    }

    pub fn location(&self) -> Result<Location> {
        const OP: &str = "photoLocation";
        let pair = match self.call(OP, &[])? {
            Value::Missing => return Ok(Location::default()),
            Value::List(items) if items.len() == 2 => items,
            _ => return Err(Error::unexpected(OP, "a latitude and longitude pair")),
        };
        let mut parts = pair.into_iter();
        let mut next = || match parts.next() {
            Some(value) => reply::optional_real(OP, value),
            None => Ok(None),
        };
        Ok(Location {
            latitude: next()?,
            longitude: next()?,
        })
    }

    /// Set or clear the GPS location. Unset components are cleared.
    pub fn set_location(&self, location: Location) -> Result<()> {
        location.validate()?;
        let pair = Value::List(vec![
            Value::from(location.latitude),
            Value::from(location.longitude),
        ]);
        self.call("photoSetLocation", &[pair])?;
        Ok(())
    }

    /// Capture date, without time zone.
    pub fn date(&self) -> Result<NaiveDateTime> {
        let text = reply::text("photoDate", self.call("photoDate", &[])?)?;
        NaiveDateTime::parse_from_str(&text, DATE_FORMAT)
            .map_err(|_| Error::unexpected("photoDate", "a YYYY-MM-DDTHH:MM:SS date"))
    }

    pub fn set_date(&self, date: NaiveDateTime) -> Result<()> {
        let text = date.format(DATE_FORMAT).to_string();
        self.call("photoSetDate", &[Value::from(text)])?;
        Ok(())
    }

    pub fn filename(&self) -> Result<String> {
        reply::text("photoFilename", self.call("photoFilename", &[])?)
    }

    /// Albums containing this photo.
    pub fn albums(&self) -> Result<Vec<Album<'a>>> {
        reply::text_list("photoAlbums", self.call("photoAlbums", &[])?)?
            .iter()
            .map(|id| Album::new(self.lib, id))
            .collect()
    }

    /// Export into `destination`; see [`PhotosLibrary::export_photo`].
    pub fn export(&self, destination: &Path, options: &ExportOptions) -> Result<Vec<PathBuf>> {
        self.lib.export_photo(self, destination, options)
    }

    /// Duplicate in the library and return the copy.
    pub fn duplicate(&self) -> Result<Photo<'a>> {
        let id = reply::text("photoDuplicate", self.call("photoDuplicate", &[])?)?;
        Photo::new(self.lib, &id)
    }

    pub fn spotlight(&self) -> Result<()> {
        self.call("photoSpotlight", &[])?;
        Ok(())
    }

    fn call(&self, operation: &str, args: &[Value]) -> Result<Value> {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Value::from(self.id()));
        all.extend_from_slice(args);
        self.lib.call(operation, &all)
    }
}

impl PartialEq for Photo<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ident == other.ident
    }
}

#[cfg(test)]
#[path = "photo_tests.rs"]
mod tests;
