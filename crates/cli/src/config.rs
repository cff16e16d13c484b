// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles pinrex.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::code::DEFAULT_WIDTH;
use crate::error::{Error, Result};
use crate::grouper::DEFAULT_BUDGET;

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "pinrex.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "generate", "verify"];

/// Known `[generate]` keys.
const KNOWN_GENERATE_KEYS: &[&str] = &["limit", "width"];

/// Known `[verify]` keys.
const KNOWN_VERIFY_KEYS: &[&str] = &["leading_zeros", "threads"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    generate: Option<toml::Value>,

    #[serde(default)]
    verify: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub verify: VerifyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            generate: GenerateConfig::default(),
            verify: VerifyConfig::default(),
        }
    }
}

/// `[generate]` section.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Length budget per emitted pattern.
    #[serde(default = "GenerateConfig::default_limit")]
    pub limit: usize,

    /// Code width in digits.
    #[serde(default = "GenerateConfig::default_width")]
    pub width: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            width: Self::default_width(),
        }
    }
}

impl GenerateConfig {
    fn default_limit() -> usize {
        DEFAULT_BUDGET
    }

    fn default_width() -> usize {
        DEFAULT_WIDTH
    }
}

/// `[verify]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Enumerate values with leading zeros too.
    #[serde(default)]
    pub leading_zeros: bool,

    /// Worker threads (0 = one per core).
    #[serde(default)]
    pub threads: usize,
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

fn check_version(content: &str, path: &Path) -> Result<()> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade pinrex to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let generate = section(path, "generate", flexible.generate, KNOWN_GENERATE_KEYS)?;
    let verify = section(path, "verify", flexible.verify, KNOWN_VERIFY_KEYS)?;

    Ok(Config {
        version: flexible.version,
        generate,
        verify,
    })
}

/// Decode one section, warning about keys it does not know.
fn section<T>(path: &Path, name: &str, value: Option<toml::Value>, known: &[&str]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return Ok(T::default());
    };

    let toml::Value::Table(table) = &value else {
        return Err(config_error(path, format!("`{name}` must be a table")));
    };
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{name}.{key}"));
        }
    }

    value
        .try_into()
        .map_err(|e: toml::de::Error| config_error(path, format!("{name}: {e}")))
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(path = %path.display(), key, "unrecognized config field");
    eprintln!(
        "pinrex: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
