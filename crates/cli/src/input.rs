// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON input documents.
//!
//! Codes document: `{"postalCodes": [110001, "560001", ...]}` (the key
//! `codes` is accepted too). Patterns document: `{"regexes": [...]}`, or
//! the single-pattern form `{"regex": "..."}`.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::code::{Code, CodeWidth};
use crate::error::{Error, Result};

/// Keys under which the code array may appear.
const CODE_KEYS: &[&str] = &["postalCodes", "codes"];

/// A patterns document, in either accepted shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PatternsDocument {
    Many { regexes: Vec<String> },
    Single { regex: String },
}

fn input_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Input {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn read(path: &Path) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(input_error(path, "input must be a .json file"));
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => input_error(path, "file not found"),
        _ => Error::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Read and validate a codes document.
pub fn load_codes(path: &Path, width: CodeWidth) -> Result<Vec<Code>> {
    let content = read(path)?;
    parse_codes(&content, path, width)
}

/// Parse a codes document.
///
/// The document structure is checked before any code is validated; the
/// first invalid code aborts the whole parse.
pub fn parse_codes(content: &str, path: &Path, width: CodeWidth) -> Result<Vec<Code>> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| input_error(path, e.to_string()))?;

    let entries = document
        .as_object()
        .and_then(|object| CODE_KEYS.iter().find_map(|key| object.get(*key)))
        .and_then(Value::as_array)
        .ok_or_else(|| input_error(path, "expected an object with a postalCodes array"))?;

    let mut codes = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Value::String(text) => codes.push(Code::parse(text, width)?),
            Value::Number(n) => {
                let value = n.as_u64().ok_or_else(|| {
                    input_error(path, format!("entry {index}: {n} is not a non-negative integer"))
                })?;
                codes.push(Code::from_value(value, width)?);
            }
            other => {
                return Err(input_error(
                    path,
                    format!("entry {index}: expected a string or integer, found {other}"),
                ));
            }
        }
    }

    tracing::debug!(path = %path.display(), codes = codes.len(), "codes loaded");
    Ok(codes)
}

/// Read a patterns document.
pub fn load_patterns(path: &Path) -> Result<Vec<String>> {
    let content = read(path)?;
    parse_patterns(&content, path)
}

/// Parse a patterns document.
pub fn parse_patterns(content: &str, path: &Path) -> Result<Vec<String>> {
    let document: PatternsDocument = serde_json::from_str(content).map_err(|_| {
        input_error(path, "expected an object with a regexes array or a regex string")
    })?;

    Ok(match document {
        PatternsDocument::Many { regexes } => regexes,
        PatternsDocument::Single { regex } => vec![regex],
    })
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
