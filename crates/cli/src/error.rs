// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Pinrex error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A code contains a character outside `0-9`.
    #[error("invalid digit {found:?} at position {position} in code {code:?}")]
    InvalidDigit {
        code: String,
        position: usize,
        found: char,
    },

    /// A code does not have the configured width.
    #[error("invalid code {code:?}: expected {expected} digits, found {actual}")]
    InvalidWidth {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A pattern is not a valid regular expression.
    #[error("pattern #{index} does not compile: {pattern}: {message}")]
    PatternCompilation {
        index: usize,
        pattern: String,
        message: String,
    },

    /// An input document is missing its expected structure.
    #[error("input error: {}: {message}", .path.display())]
    Input { path: PathBuf, message: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using pinrex Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Patterns generated, or verification found them exact
    Success = 0,
    /// Verification found false positives or missing codes
    VerifyFailed = 1,
    /// Bad input, configuration or arguments
    InvalidInput = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidDigit { .. }
            | Error::InvalidWidth { .. }
            | Error::PatternCompilation { .. }
            | Error::Input { .. } => ExitCode::InvalidInput,
            Error::Config { .. } | Error::Argument(_) => ExitCode::InvalidInput,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
