// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use std::io::Write;

use crate::cli::SchemaCommand;
use crate::config::Config;
use crate::error::Result;
use crate::schema::export::ExportOutputJson;
use crate::schema::info::InfoJson;
use crate::schema::{AlbumJson, FolderJson, PhotoJson};
use schemars::schema_for;

use super::write_json;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    run_impl(cmd, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl(cmd: SchemaCommand, out: &mut dyn Write) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::Info => schema_for!(InfoJson),
        SchemaCommand::Photo => schema_for!(PhotoJson),
        SchemaCommand::Album => schema_for!(AlbumJson),
        SchemaCommand::Folder => schema_for!(FolderJson),
        SchemaCommand::Export => schema_for!(ExportOutputJson),
        SchemaCommand::Config => schema_for!(Config),
    };
    write_json(out, &schema)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
