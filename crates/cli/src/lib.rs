// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! photoscript - script Apple Photos from Rust.
//!
//! This crate provides the object model behind the `photoscript` CLI. Every
//! operation is a named AppleScript handler called through a
//! [`photoscript_core::Gateway`], which retries calls that time out after
//! restarting Photos.
//!
//! # Main Components
//!
//! - [`PhotosLibrary`] - the running Photos app and its top-level operations
//! - [`Album`], [`Folder`], [`Photo`] - handles borrowing the library
//! - [`export`] - the duplicate-safe export of files Photos produced
//! - [`Config`] - retry policy, handler script and export defaults
//!
//! ```rust,ignore
//! use photoscript::{Config, Lookup, PhotosLibrary};
//! use photoscript::export::ExportOptions;
//!
//! let config = Config::load(&photoscript::config::config_path()?)?;
//! let lib = PhotosLibrary::new(config.gateway()?)?;
//! if let Some(album) = lib.album(&Lookup::Name("Lisbon".into()), false)? {
//!     album.export(Path::new("/tmp/out"), &ExportOptions::default())?;
//! }
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
mod reply;
mod schema;

pub mod album;
pub mod config;
pub mod env;
pub mod error;
pub mod export;
pub mod folder;
pub mod ident;
pub mod library;
pub mod logging;
pub mod photo;

pub use album::Album;
pub use cli::{
    AlbumCommand, Cli, Command, ConfigCommand, ExportArgs, FolderCommand, FolderPath,
    OutputFormat, PhotoSelection, SchemaCommand,
};
pub use config::Config;
pub use error::{Error, Result};
pub use folder::Folder;
pub use library::{Lookup, PhotoQuery, PhotosLibrary};
pub use photo::{Location, Photo};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Info { output } => commands::info::run(output),
        Command::Albums { top_level, output } => commands::list::albums(top_level, output),
        Command::Folders { top_level, output } => commands::list::folders(top_level, output),
        Command::Photos {
            selection,
            limit,
            output,
        } => commands::list::photos(selection, limit, output),
        Command::Selection { output } => commands::list::selection(output),
        Command::Import {
            files,
            album,
            skip_duplicate_check,
            output,
        } => commands::import::run(files, album, skip_duplicate_check, output),
        Command::Export {
            uuids,
            export,
            output,
        } => commands::export::run(uuids, export, output),
        Command::ExportAlbum {
            album,
            export,
            output,
        } => commands::export::album(&album, export, output),
        Command::Album(cmd) => commands::album::run(cmd),
        Command::Folder(cmd) => commands::folder::run(cmd),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "photoscript", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
