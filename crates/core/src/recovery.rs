// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery action run between retries: terminate the Photos process.
//!
//! A stuck Photos instance is the usual cause of AppleEvent timeouts;
//! killing it lets the next call relaunch a fresh one. Recovery is
//! best-effort and never fails the caller.

use std::process::{Command, Stdio};

/// Application process name targeted by default.
pub const DEFAULT_APP_NAME: &str = "Photos";

/// Something the gateway runs before retrying a timed-out call.
pub trait Recovery {
    fn recover(&self);
}

/// Result of one termination attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillOutcome {
    /// The process was found and terminated.
    Terminated,
    /// No process with that name was running.
    NotRunning,
    /// The termination tool does not exist on this platform.
    Unavailable,
    /// The tool ran but failed for another reason.
    Unknown(String),
}

fn kill_with(program: &str, app_name: &str) -> KillOutcome {
    let output = Command::new(program)
        .arg(app_name)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(output) => classify_kill(
            output.status.success(),
            &String::from_utf8_lossy(&output.stderr),
        ),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => KillOutcome::Unavailable,
        Err(e) => KillOutcome::Unknown(e.to_string()),
    }
}

/// Map a finished `killall` run to an outcome.
///
/// macOS reports "No matching processes"; psmisc on Linux says "no process found".
pub fn classify_kill(success: bool, stderr: &str) -> KillOutcome {
    if success {
        KillOutcome::Terminated
    } else if stderr.contains("No matching processes") || stderr.contains("no process found") {
        KillOutcome::NotRunning
    } else {
        KillOutcome::Unknown(stderr.trim().to_string())
    }
}

/// [`Recovery`] that kills the scripted application by name.
#[derive(Debug, Clone)]
pub struct ProcessKiller {
    app_name: String,
    program: String,
}

impl ProcessKiller {
    pub fn new(app_name: impl Into<String>) -> Self {
        ProcessKiller {
            app_name: app_name.into(),
            program: "killall".to_string(),
        }
    }

    /// Use a different termination tool.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Run the termination tool and log the outcome.
    pub fn kill(&self) -> KillOutcome {
        let outcome = kill_with(&self.program, &self.app_name);
        match &outcome {
            KillOutcome::Terminated => {
                tracing::info!(app = %self.app_name, "terminated application");
            }
            KillOutcome::NotRunning => {
                tracing::info!(app = %self.app_name, "application was not running");
            }
            KillOutcome::Unavailable => {
                tracing::warn!(
                    program = %self.program,
                    "cannot terminate application: tool not found"
                );
            }
            KillOutcome::Unknown(reason) => {
                tracing::warn!(app = %self.app_name, %reason, "could not terminate application");
            }
        }
        outcome
    }
}

impl Default for ProcessKiller {
    fn default() -> Self {
        Self::new(DEFAULT_APP_NAME)
    }
}

impl Recovery for ProcessKiller {
    fn recover(&self) {
        self.kill();
    }
}

#[cfg(test)]
#[path = "recovery_tests.rs"]
mod tests;
