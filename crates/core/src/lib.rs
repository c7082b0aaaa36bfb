// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! photoscript-core: the remote seam for scripting Apple Photos.
//!
//! This crate owns everything between a named AppleScript handler and the
//! typed object model built on top of it:
//!
//! - [`Value`] and the [`literal`] codec for AppleScript values
//! - [`RemoteTarget`], implemented by [`OsaTarget`] and [`MockTarget`]
//! - [`Gateway`], which retries timed-out calls under a [`RetryPolicy`]
//!   after running a [`Recovery`] action

pub mod error;
pub mod gateway;
pub mod literal;
pub mod mock;
pub mod osa;
pub mod policy;
pub mod recovery;
pub mod target;
pub mod value;

pub use error::{Error, Result};
pub use gateway::Gateway;
pub use mock::{Call, CountingRecovery, MockTarget};
pub use osa::OsaTarget;
pub use policy::RetryPolicy;
pub use recovery::{KillOutcome, ProcessKiller, Recovery};
pub use target::{RemoteFailure, RemoteTarget};
pub use value::Value;
