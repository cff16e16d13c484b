// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use tempfile::TempDir;

use crate::code::{Code, CodeWidth};
use crate::config::CONFIG_FILE_NAME;

/// Creates a temp directory with a minimal pinrex.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), config).unwrap();
    dir
}

/// Builds codes of `width` digits from integer values.
pub fn codes_of(width: usize, values: impl IntoIterator<Item = u64>) -> Vec<Code> {
    let width = CodeWidth::new(width).unwrap();
    values
        .into_iter()
        .map(|v| Code::from_value(v, width).unwrap())
        .collect()
}
