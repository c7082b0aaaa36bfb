// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::{config_path, Config};
use crate::error::{Error, Result};

use super::write_json;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    run_impl(&config_path()?, cmd, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl(path: &Path, cmd: ConfigCommand, out: &mut dyn Write) -> Result<()> {
    match cmd {
        ConfigCommand::Show { output } => {
            let config = Config::load(path)?;
            match output {
                OutputFormat::Json => write_json(out, &config)?,
                OutputFormat::Text | OutputFormat::Id => {
                    let text = toml::to_string_pretty(&config)
                        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
                    write!(out, "{text}")?;
                }
            }
        }
        ConfigCommand::Path => writeln!(out, "{}", path.display())?,
        ConfigCommand::Set { key, value } => {
            let mut config = Config::load(path)?;
            config.set(&key, &value)?;
            config.save(path)?;
            tracing::info!(%key, %value, path = %path.display(), "updated config");
            writeln!(out, "Set {key} = {value}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
