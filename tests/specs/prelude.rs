// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Each test runs the pinrex binary inside a throwaway workspace holding
//! its codes, patterns, and config files.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the pinrex binary
pub fn pinrex_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pinrex"));
    cmd.env_remove("PINREX_CONFIG")
        .env_remove("PINREX_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Temporary directory marked as a git root so config discovery stops here.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a raw file.
    pub fn file(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.join(name), content).unwrap();
        self
    }

    /// Write `codes.json` holding integer codes.
    pub fn codes(&self, values: impl IntoIterator<Item = u64>) -> &Self {
        let values: Vec<u64> = values.into_iter().collect();
        let doc = serde_json::json!({ "postalCodes": values });
        self.file("codes.json", &doc.to_string())
    }

    /// Write `patterns.json`.
    pub fn patterns(&self, patterns: &[&str]) -> &Self {
        let doc = serde_json::json!({ "regexes": patterns });
        self.file("patterns.json", &doc.to_string())
    }

    /// Write `pinrex.toml`.
    pub fn config(&self, content: &str) -> &Self {
        self.file("pinrex.toml", content)
    }

    /// Read a JSON file written by the binary.
    pub fn read_json(&self, name: &str) -> serde_json::Value {
        let content = std::fs::read_to_string(self.join(name)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    /// A pinrex command running inside the workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = pinrex_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Extract the regexes array from a patterns document.
pub fn regexes(doc: &serde_json::Value) -> Vec<String> {
    doc["regexes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
