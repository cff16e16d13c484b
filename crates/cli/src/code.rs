// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-width numeric codes.
//!
//! Every code in one run has the same width. Codes arrive as strings
//! (already padded) or integers (padded here) and are validated before
//! they reach the trie.

use std::fmt;

use crate::error::{Error, Result};

/// Widest supported code; keeps every code value inside a `u64`.
pub const MAX_WIDTH: usize = 18;

/// Default code width (six-digit postal codes).
pub const DEFAULT_WIDTH: usize = 6;

/// Number of digits in every code of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeWidth(usize);

impl CodeWidth {
    /// Create a width, rejecting 0 and anything above [`MAX_WIDTH`].
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::Argument(format!(
                "code width must be between 1 and {MAX_WIDTH}, got {width}"
            )));
        }
        Ok(Self(width))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Depth of the trie nodes whose children are the final digit.
    pub fn leaf_depth(self) -> usize {
        self.0 - 1
    }

    /// Number of values in the full domain (`10^width`).
    pub fn domain_size(self) -> u64 {
        10u64.pow(self.0 as u32)
    }
}

impl Default for CodeWidth {
    fn default() -> Self {
        Self(DEFAULT_WIDTH)
    }
}

impl fmt::Display for CodeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated code: exactly `width` digits, each in `0..=9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: Box<[u8]>,
}

impl Code {
    /// Parse a code from its textual form.
    ///
    /// The text must already be `width` characters long; it is not padded.
    pub fn parse(text: &str, width: CodeWidth) -> Result<Self> {
        let mut digits = Vec::with_capacity(width.get());
        for (position, ch) in text.chars().enumerate() {
            let Some(digit) = ch.to_digit(10) else {
                return Err(Error::InvalidDigit {
                    code: text.to_string(),
                    position,
                    found: ch,
                });
            };
            digits.push(digit as u8);
        }

        if digits.len() != width.get() {
            return Err(Error::InvalidWidth {
                code: text.to_string(),
                expected: width.get(),
                actual: digits.len(),
            });
        }

        Ok(Self {
            digits: digits.into_boxed_slice(),
        })
    }

    /// Build a code from an integer, left-padding with zeros.
    pub fn from_value(value: u64, width: CodeWidth) -> Result<Self> {
        if value >= width.domain_size() {
            return Err(Error::InvalidWidth {
                code: value.to_string(),
                expected: width.get(),
                actual: value.to_string().len(),
            });
        }

        let mut digits = vec![0u8; width.get()];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }

        Ok(Self {
            digits: digits.into_boxed_slice(),
        })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Numeric value of the code.
    pub fn value(&self) -> u64 {
        self.digits
            .iter()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d))
    }

    pub fn has_leading_zero(&self) -> bool {
        self.digits.len() > 1 && self.digits.first() == Some(&0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits.iter() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
