// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::code::CodeWidth;
use crate::config::Config;
use crate::error::Result;
use crate::grouper::Budget;
use crate::verify::{Domain, VerifyOptions};

/// Synthesizes compact regular expressions for sets of fixed-width numeric codes
#[derive(Parser)]
#[command(name = "pinrex")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PINREX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build patterns matching exactly the input codes
    Generate(GenerateArgs),
    /// Check a pattern list against the input codes over the whole domain
    Verify(VerifyArgs),
}

/// Options shared by both commands.
#[derive(clap::Args, Default)]
pub struct CodeArgs {
    /// Codes document (JSON with a postalCodes array)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Code width in digits (default: 6)
    #[arg(long, value_name = "DIGITS")]
    pub width: Option<usize>,

    /// Verify over the zero-padded domain, including leading zeros
    #[arg(long)]
    pub leading_zeros: bool,

    /// Verification worker threads (0 = one per core)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl CodeArgs {
    /// Code width: flag, then config.
    pub fn width(&self, config: &Config) -> Result<CodeWidth> {
        CodeWidth::new(self.width.unwrap_or(config.generate.width))
    }

    /// Verification settings: flags, then config.
    pub fn verify_options(&self, config: &Config) -> VerifyOptions {
        let domain = if self.leading_zeros || config.verify.leading_zeros {
            Domain::Full
        } else {
            Domain::NoLeadingZeros
        };
        VerifyOptions {
            domain,
            threads: self.threads.unwrap_or(config.verify.threads),
        }
    }
}

#[derive(clap::Args, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub codes: CodeArgs,

    /// Patterns document to write (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Length budget per pattern (default: 1000)
    #[arg(short = 'l', long = "limit", value_name = "CHARS")]
    pub limit: Option<usize>,

    /// Verify the generated patterns before writing them
    #[arg(long)]
    pub verify: bool,
}

impl GenerateArgs {
    /// Length budget: flag, then config.
    pub fn budget(&self, config: &Config) -> Result<Budget> {
        Budget::new(self.limit.unwrap_or(config.generate.limit))
    }
}

#[derive(clap::Args, Default)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub codes: CodeArgs,

    /// Patterns document to check (JSON with a regexes array)
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub patterns: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "text")]
    pub format: OutputFormat,

    /// Maximum sample values listed per category in text output
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub samples: usize,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
