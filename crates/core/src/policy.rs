// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Retry policy for timed-out remote calls.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default number of attempts per call, including the first.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default pause between attempts, in seconds.
pub const DEFAULT_BACKOFF_SECS: f64 = 1.0;

/// How the gateway reacts to timeouts.
///
/// Policies are values: [`RetryPolicy::configure`] returns an updated copy
/// and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    retry_enabled: bool,
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// Build a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] if `max_attempts` is zero or
    /// `backoff_secs` is negative or not finite.
    pub fn new(retry_enabled: bool, max_attempts: u32, backoff_secs: f64) -> Result<Self> {
        Ok(RetryPolicy {
            retry_enabled,
            max_attempts: validate_attempts(max_attempts)?,
            backoff: validate_backoff(backoff_secs)?,
        })
    }

    /// A policy that calls exactly once.
    pub fn disabled() -> Self {
        RetryPolicy {
            retry_enabled: false,
            ..Self::default()
        }
    }

    /// Copy of this policy with the given fields replaced.
    ///
    /// `None` leaves a field unchanged.
    pub fn configure(
        &self,
        retry_enabled: Option<bool>,
        max_attempts: Option<u32>,
        backoff_secs: Option<f64>,
    ) -> Result<Self> {
        let mut next = *self;
        if let Some(enabled) = retry_enabled {
            next.retry_enabled = enabled;
        }
        if let Some(attempts) = max_attempts {
            next.max_attempts = validate_attempts(attempts)?;
        }
        if let Some(secs) = backoff_secs {
            next.backoff = validate_backoff(secs)?;
        }
        Ok(next)
    }

    pub fn retry_enabled(&self) -> bool {
        self.retry_enabled
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Number of attempts a single call may make under this policy.
    pub fn attempt_budget(&self) -> u32 {
        if self.retry_enabled {
            self.max_attempts
        } else {
            1
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            retry_enabled: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Duration::from_secs_f64(DEFAULT_BACKOFF_SECS),
        }
    }
}

fn validate_attempts(max_attempts: u32) -> Result<u32> {
    if max_attempts == 0 {
        return Err(Error::InvalidPolicy(
            "max_attempts must be at least 1".to_string(),
        ));
    }
    Ok(max_attempts)
}

fn validate_backoff(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::InvalidPolicy(format!(
            "backoff must be a non-negative number of seconds, got {}",
            secs
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| Error::InvalidPolicy(format!("backoff {} is out of range: {}", secs, e)))
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
