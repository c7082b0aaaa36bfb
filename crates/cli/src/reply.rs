// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed views of raw handler results.
//!
//! This is where `missing value` becomes absence. Each helper names the
//! operation in its error so a shape mismatch points at the handler.

use photoscript_core::Value;

use crate::error::{Error, Result};

pub(crate) fn boolean(operation: &str, value: Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::unexpected(operation, "a boolean"))
}

pub(crate) fn integer(operation: &str, value: Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| Error::unexpected(operation, "an integer"))
}

/// A non-negative count or dimension.
pub(crate) fn count(operation: &str, value: Value) -> Result<usize> {
    usize::try_from(integer(operation, value)?)
        .map_err(|_| Error::unexpected(operation, "a non-negative integer"))
}

pub(crate) fn text(operation: &str, value: Value) -> Result<String> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Integer(n) => Ok(n.to_string()),
        Value::Real(r) => Ok(r.to_string()),
        _ => Err(Error::unexpected(operation, "text")),
    }
}

/// Text, with `missing value` read as empty.
pub(crate) fn text_or_empty(operation: &str, value: Value) -> Result<String> {
    match value {
        Value::Missing => Ok(String::new()),
        other => text(operation, other),
    }
}

pub(crate) fn optional_real(operation: &str, value: Value) -> Result<Option<f64>> {
    match value {
        Value::Missing => Ok(None),
        other => other
            .as_f64()
            .map(Some)
            .ok_or_else(|| Error::unexpected(operation, "a number")),
    }
}

/// A list of text. A lone text is a one-element list; `missing value` is empty.
pub(crate) fn text_list(operation: &str, value: Value) -> Result<Vec<String>> {
    match value {
        Value::Missing => Ok(Vec::new()),
        Value::Text(s) => Ok(vec![s]),
        Value::List(items) => items
            .into_iter()
            .map(|item| {
                item.into_text()
                    .ok_or_else(|| Error::unexpected(operation, "a list of text"))
            })
            .collect(),
        _ => Err(Error::unexpected(operation, "a list of text")),
    }
}

/// An object id from a lookup; `0` or `missing value` means not found.
pub(crate) fn found_id(operation: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Missing | Value::Integer(0) => Ok(None),
        Value::Text(id) if !id.is_empty() => Ok(Some(id)),
        _ => Err(Error::unexpected(operation, "an id or 0")),
    }
}

#[cfg(test)]
#[path = "reply_tests.rs"]
mod tests;
