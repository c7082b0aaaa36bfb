// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote call gateway: named operations with bounded retry on timeout.
//!
//! A call goes `Calling → Success | Failed`. A failure classified as a
//! timeout, with attempts left, goes `Recovering → Waiting → Calling`.
//! Every other failure, and a timeout on the last attempt, is returned.

use crate::error::Result;
use crate::policy::RetryPolicy;
use crate::recovery::{ProcessKiller, Recovery};
use crate::target::{RemoteFailure, RemoteTarget};
use crate::value::Value;

/// Invokes operations on the installed [`RemoteTarget`].
pub struct Gateway {
    target: Box<dyn RemoteTarget>,
    policy: RetryPolicy,
    recovery: Box<dyn Recovery>,
}

impl Gateway {
    /// Gateway with the default policy, recovering by killing Photos.
    pub fn new(target: Box<dyn RemoteTarget>) -> Self {
        Gateway {
            target,
            policy: RetryPolicy::default(),
            recovery: Box::new(ProcessKiller::default()),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_recovery(mut self, recovery: Box<dyn Recovery>) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Replace the retry policy for all later calls.
    ///
    /// `None` leaves a field unchanged. On error the current policy stays.
    pub fn configure(
        &mut self,
        retry_enabled: Option<bool>,
        max_attempts: Option<u32>,
        backoff_secs: Option<f64>,
    ) -> Result<()> {
        self.policy = self
            .policy
            .configure(retry_enabled, max_attempts, backoff_secs)?;
        Ok(())
    }

    /// Install a different target, returning the one it replaces.
    pub fn replace_target(&mut self, target: Box<dyn RemoteTarget>) -> Box<dyn RemoteTarget> {
        std::mem::replace(&mut self.target, target)
    }

    /// Call `operation` with positional `args`.
    ///
    /// The raw result is returned unchanged; `missing value` is not translated.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`](crate::Error::Timeout) once the attempt budget is
    /// spent on timeouts; [`Error::Remote`](crate::Error::Remote) immediately
    /// for any other failure.
    pub fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value> {
        let budget = self.policy.attempt_budget();
        let mut attempt = 1;
        loop {
            tracing::debug!(operation, attempt, budget, "calling remote operation");
            match self.target.call(operation, args) {
                Ok(value) => return Ok(value),
                Err(RemoteFailure::Timeout(message)) if attempt < budget => {
                    tracing::warn!(
                        operation,
                        attempt,
                        budget,
                        %message,
                        "remote operation timed out, recovering before retry"
                    );
                    self.recovery.recover();
                    let backoff = self.policy.backoff();
                    if !backoff.is_zero() {
                        std::thread::sleep(backoff);
                    }
                    attempt += 1;
                }
                Err(failure) => {
                    tracing::debug!(
                        operation,
                        attempt,
                        error = %failure.message(),
                        "remote operation failed"
                    );
                    return Err(failure.into_error(operation));
                }
            }
        }
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("target", &"<remote target>")
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
