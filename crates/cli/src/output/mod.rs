// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for patterns documents and verification reports.

pub mod json;
pub mod text;

/// Default number of sample values listed per category.
pub const DEFAULT_SAMPLES: usize = 10;

/// Output formatting options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Maximum sample values shown per category.
    pub samples: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl FormatOptions {
    /// Create options with a specific sample limit.
    pub fn with_samples(samples: usize) -> Self {
        Self { samples }
    }
}
