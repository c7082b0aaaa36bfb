// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-process test doubles for the remote seam.
//!
//! [`MockTarget`] answers operations from scripted replies and records every
//! call; [`CountingRecovery`] counts recovery attempts. Both are cheap
//! cloneable handles over shared state so a test can keep one copy for
//! assertions after boxing the other into a [`Gateway`](crate::Gateway).

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::recovery::Recovery;
use crate::target::{RemoteFailure, RemoteTarget};
use crate::value::Value;

/// Result a mock operation answers with.
pub type Reply = Result<Value, RemoteFailure>;

type Handler = Rc<dyn Fn(&[Value]) -> Reply>;

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub operation: String,
    pub args: Vec<Value>,
}

#[derive(Default)]
struct MockState {
    queued: HashMap<String, VecDeque<Reply>>,
    handlers: HashMap<String, Handler>,
    standing: HashMap<String, Reply>,
    calls: Vec<Call>,
}

/// Scripted [`RemoteTarget`].
///
/// Queued replies are consumed first, in order; then a handler registered
/// with [`respond`](Self::respond) runs; after that the standing reply for
/// the operation is returned on every call. Unknown operations fail the
/// way AppleScript does for an undefined handler.
#[derive(Clone, Default)]
pub struct MockTarget {
    state: Rc<RefCell<MockState>>,
}

impl MockTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call to `operation` with `value`.
    pub fn on(&self, operation: &str, value: impl Into<Value>) -> &Self {
        self.state
            .borrow_mut()
            .standing
            .insert(operation.to_string(), Ok(value.into()));
        self
    }

    /// Fail every call to `operation`.
    pub fn fail(&self, operation: &str, failure: RemoteFailure) -> &Self {
        self.state
            .borrow_mut()
            .standing
            .insert(operation.to_string(), Err(failure));
        self
    }

    /// Answer every call to `operation` by running `handler` on its arguments.
    pub fn respond(
        &self,
        operation: &str,
        handler: impl Fn(&[Value]) -> Reply + 'static,
    ) -> &Self {
        self.state
            .borrow_mut()
            .handlers
            .insert(operation.to_string(), Rc::new(handler));
        self
    }

    /// Answer the next call to `operation` with `reply`.
    pub fn queue(&self, operation: &str, reply: Reply) -> &Self {
        self.state
            .borrow_mut()
            .queued
            .entry(operation.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Arguments of every call to `operation`, in order.
    pub fn calls_to(&self, operation: &str) -> Vec<Vec<Value>> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .map(|c| c.args.clone())
            .collect()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    /// A boxed handle sharing this mock's state.
    pub fn boxed(&self) -> Box<dyn RemoteTarget> {
        Box::new(self.clone())
    }
}

impl RemoteTarget for MockTarget {
    fn call(&self, operation: &str, args: &[Value]) -> Reply {
        let handler = {
            let mut state = self.state.borrow_mut();
            state.calls.push(Call {
                operation: operation.to_string(),
                args: args.to_vec(),
            });

            if let Some(reply) = state
                .queued
                .get_mut(operation)
                .and_then(|queue| queue.pop_front())
            {
                return reply;
            }
            state.handlers.get(operation).cloned()
        };

        // The handler runs unborrowed so it may inspect the mock.
        if let Some(handler) = handler {
            return handler(args);
        }

        let state = self.state.borrow();
        match state.standing.get(operation) {
            Some(reply) => reply.clone(),
            None => Err(RemoteFailure::Other(format!(
                "«script» doesn’t understand the “{}” message. (-1708)",
                operation
            ))),
        }
    }
}

/// [`Recovery`] that only counts how often it ran.
#[derive(Clone, Default)]
pub struct CountingRecovery {
    count: Rc<Cell<usize>>,
}

impl CountingRecovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn boxed(&self) -> Box<dyn Recovery> {
        Box::new(self.clone())
    }
}

impl Recovery for CountingRecovery {
    fn recover(&self) {
        self.count.set(self.count.get() + 1);
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;
