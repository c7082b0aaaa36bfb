// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::OutputFormat;
use crate::display::format_info;
use crate::error::Result;
use crate::library::PhotosLibrary;
use crate::schema::info::InfoJson;

use super::{open_library, write_json, write_lines};

pub fn run(output: OutputFormat) -> Result<()> {
    let (lib, _) = open_library()?;
    run_impl(&lib, output, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl(
    lib: &PhotosLibrary,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let info = InfoJson::from_library(lib)?;
    match output {
        OutputFormat::Json => write_json(out, &info),
        OutputFormat::Text | OutputFormat::Id => write_lines(out, format_info(&info)),
    }
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
