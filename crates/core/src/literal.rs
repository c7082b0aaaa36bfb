// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! AppleScript literal codec.
//!
//! Arguments are rendered as AppleScript source literals and spliced into the
//! call expression; results come back from `osascript -s s`, which prints the
//! value in the same source form. Only the value shapes the handlers exchange
//! are understood: text, numbers, booleans, lists and `missing value`.

use crate::error::{Error, Result};
use crate::value::Value;

const MISSING: &str = "missing value";

/// Render a value as an AppleScript literal.
pub fn to_literal(value: &Value) -> String {
    let mut out = String::new();
    write_literal(&mut out, value);
    out
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Missing => out.push_str(MISSING),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Real(r) if !r.is_finite() => out.push_str(MISSING),
        Value::Real(r) => {
            let text = r.to_string();
            out.push_str(&text);
            if !text.contains('.') {
                out.push_str(".0");
            }
        }
        Value::Text(s) => {
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    _ => out.push(c),
                }
            }
            out.push('"');
        }
        Value::List(items) => {
            out.push('{');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push('}');
        }
    }
}

/// Parse the structured result text printed by `osascript -s s`.
///
/// Empty output (a handler that returns nothing) parses as [`Value::Missing`].
///
/// # Errors
///
/// Returns [`Error::Parse`] for records, dates, object specifiers and any
/// other value the handlers are not expected to return.
pub fn parse(input: &str) -> Result<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Value::Missing);
    }

    let mut parser = Parser { rest: trimmed };
    let value = parser.value()?;
    parser.skip_ws();
    if !parser.rest.is_empty() {
        return Err(parse_error("trailing input", parser.rest));
    }
    Ok(value)
}

struct Parser<'a> {
    rest: &'a str,
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self, c: char) {
        self.rest = &self.rest[c.len_utf8()..];
    }

    fn value(&mut self) -> Result<Value> {
        self.skip_ws();
        match self.peek() {
            Some('"') => self.text(),
            Some('{') => self.list(),
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            Some(_) => self.word(),
            None => Err(parse_error("unexpected end of input", self.rest)),
        }
    }

    fn text(&mut self) -> Result<Value> {
        let start = self.rest;
        self.bump('"');
        let mut out = String::new();
        loop {
            let Some(c) = self.peek() else {
                return Err(parse_error("unterminated string", start));
            };
            self.bump(c);
            match c {
                '"' => return Ok(Value::Text(out)),
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(parse_error("unterminated string", start));
                    };
                    self.bump(escaped);
                    match escaped {
                        'n' => out.push('\n'),
                        'r' => out.push('\r'),
                        't' => out.push('\t'),
                        other => out.push(other),
                    }
                }
                other => out.push(other),
            }
        }
    }

    fn list(&mut self) -> Result<Value> {
        let start = self.rest;
        self.bump('{');
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some('}') {
            self.bump('}');
            return Ok(Value::List(items));
        }
        loop {
            items.push(self.value()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => self.bump(','),
                Some('}') => {
                    self.bump('}');
                    return Ok(Value::List(items));
                }
                Some(':') => return Err(parse_error("records are not supported", start)),
                _ => return Err(parse_error("unterminated list", start)),
            }
        }
    }

    fn number(&mut self) -> Result<Value> {
        let bytes = self.rest.as_bytes();
        let mut end = 0;
        let mut is_real = false;
        if bytes.first() == Some(&b'-') {
            end += 1;
        }
        while end < bytes.len() {
            match bytes[end] {
                b'0'..=b'9' => end += 1,
                b'.' => {
                    is_real = true;
                    end += 1;
                }
                b'E' | b'e' => {
                    is_real = true;
                    end += 1;
                    if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
                        end += 1;
                    }
                }
                _ => break,
            }
        }

        let token = &self.rest[..end];
        let value = if is_real {
            token.parse::<f64>().ok().map(Value::Real)
        } else {
            token
                .parse::<i64>()
                .map(Value::Integer)
                .ok()
                .or_else(|| token.parse::<f64>().ok().map(Value::Real))
        };

        match value {
            Some(v) => {
                self.rest = &self.rest[end..];
                Ok(v)
            }
            None => Err(parse_error("invalid number", self.rest)),
        }
    }

    fn word(&mut self) -> Result<Value> {
        for (word, value) in [
            (MISSING, Value::Missing),
            ("true", Value::Bool(true)),
            ("false", Value::Bool(false)),
        ] {
            if let Some(after) = self.rest.strip_prefix(word) {
                if !after.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
                    self.rest = after;
                    return Ok(value);
                }
            }
        }
        Err(parse_error("unsupported value", self.rest))
    }
}

fn parse_error(reason: &str, at: &str) -> Error {
    let snippet: String = at.chars().take(60).collect();
    Error::Parse(format!("{reason} at '{snippet}'"))
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
