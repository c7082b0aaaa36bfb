// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Stored as TOML at `<config dir>/photoscript/config.toml` unless
//! `PHOTOSCRIPT_CONFIG` points elsewhere. A missing file means defaults.
//!
//! ```toml
//! [retry]
//! enabled = true
//! max_attempts = 3
//! backoff_secs = 1.0
//!
//! [script]
//! app_name = "Photos"
//!
//! [export]
//! timeout_secs = 120
//! norsrc = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use photoscript_core::{Gateway, OsaTarget, ProcessKiller, RetryPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "photoscript";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Keys accepted by `photoscript config set`.
pub const KEYS: &[&str] = &[
    "retry.enabled",
    "retry.max_attempts",
    "retry.backoff_secs",
    "script.path",
    "script.app_name",
    "export.timeout_secs",
    "export.norsrc",
];

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    pub retry: RetryConfig,
    pub script: ScriptConfig,
    pub export: ExportConfig,
}

/// Retry policy for calls into Photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RetryConfig {
    /// Retry calls that time out.
    pub enabled: bool,
    /// Total attempts per call, including the first.
    pub max_attempts: u32,
    /// Seconds to wait after recovery before retrying.
    pub backoff_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        RetryConfig {
            enabled: policy.retry_enabled(),
            max_attempts: policy.max_attempts(),
            backoff_secs: policy.backoff().as_secs_f64(),
        }
    }
}

/// Where the AppleScript handlers come from and which app they drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScriptConfig {
    /// Handler script to load instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Process name terminated when a call times out.
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        ScriptConfig {
            path: None,
            app_name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    photoscript_core::recovery::DEFAULT_APP_NAME.to_string()
}

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExportConfig {
    /// Seconds Photos may spend on one export.
    pub timeout_secs: u64,
    /// Skip resource forks and extended attributes when copying.
    pub norsrc: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            timeout_secs: crate::export::DEFAULT_TIMEOUT_SECS,
            norsrc: false,
        }
    }
}

/// Location of the configuration file.
///
/// `PHOTOSCRIPT_CONFIG` wins over the platform config directory.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = env::config_path() {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            Error::Config(format!(
                "cannot determine the config directory\n  hint: set {} to a file path",
                env::vars::PHOTOSCRIPT_CONFIG
            ))
        })
}

impl Config {
    /// Load the configuration at `path`, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        config.retry_policy()?;
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The validated retry policy.
    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        Ok(RetryPolicy::new(
            self.retry.enabled,
            self.retry.max_attempts,
            self.retry.backoff_secs,
        )?)
    }

    /// Handler script override, `PHOTOSCRIPT_SCRIPT` first.
    pub fn script_path(&self) -> Option<PathBuf> {
        resolve_script_path(env::script_path(), self.script.path.as_deref())
    }

    /// Build a gateway from this configuration.
    ///
    /// Fails if a configured handler script cannot be loaded.
    pub fn gateway(&self) -> Result<Gateway> {
        let target = match self.script_path() {
            Some(path) => OsaTarget::from_path(&path)?,
            None => OsaTarget::bundled(),
        };
        Ok(Gateway::new(Box::new(target))
            .with_policy(self.retry_policy()?)
            .with_recovery(Box::new(ProcessKiller::new(&self.script.app_name))))
    }

    /// Set `key` from its textual `value`.
    ///
    /// Retry keys are validated as a whole policy; on error the config is unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "retry.enabled" => updated.retry.enabled = parse_value(key, value)?,
            "retry.max_attempts" => updated.retry.max_attempts = parse_value(key, value)?,
            "retry.backoff_secs" => updated.retry.backoff_secs = parse_value(key, value)?,
            "script.path" => {
                updated.script.path = match value.trim() {
                    "" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "script.app_name" => {
                if value.trim().is_empty() {
                    return Err(Error::Config("script.app_name cannot be empty".to_string()));
                }
                updated.script.app_name = value.to_string();
            }
            "export.timeout_secs" => updated.export.timeout_secs = parse_value(key, value)?,
            "export.norsrc" => updated.export.norsrc = parse_value(key, value)?,
            _ => {
                return Err(Error::Config(format!(
                    "unknown key '{}'\n  hint: valid keys are: {}",
                    key,
                    KEYS.join(", ")
                )))
            }
        }
        updated.retry_policy()?;
        *self = updated;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid value '{}' for {}", value, key)))
}

fn resolve_script_path(from_env: Option<PathBuf>, configured: Option<&Path>) -> Option<PathBuf> {
    from_env.or_else(|| configured.map(Path::to_path_buf))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
