// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character-class compression for the final digit position.
//!
//! The last digit of a code is rendered as one class. Whichever side
//! (present digits or missing digits) is smaller gets listed, and a
//! contiguous side of more than three digits collapses to a range.

use std::fmt;

use crate::fragment::RegexFragment;

/// A contiguous side must have at least this many digits to become a range.
const RANGE_MIN_DIGITS: usize = 4;

/// Set of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    const FULL: u16 = 0b11_1111_1111;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn from_digits(digits: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::new();
        for d in digits {
            set.insert(d);
        }
        set
    }

    /// Add a digit; values above 9 are ignored.
    pub fn insert(&mut self, digit: u8) {
        if digit <= 9 {
            self.0 |= 1 << digit;
        }
    }

    pub fn contains(&self, digit: u8) -> bool {
        digit <= 9 && self.0 & (1 << digit) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_full(&self) -> bool {
        self.0 == Self::FULL
    }

    /// Digits not in this set.
    pub fn complement(&self) -> Self {
        Self(!self.0 & Self::FULL)
    }

    /// Digits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=9u8).filter(|&d| self.contains(d))
    }

    /// `(first, last)` when the set is non-empty and has no gaps.
    pub fn contiguous_span(&self) -> Option<(u8, u8)> {
        let first = self.iter().next()?;
        let last = first + self.len() as u8 - 1;
        (last <= 9 && (first..=last).all(|d| self.contains(d))).then_some((first, last))
    }

    /// Span worth rendering as a range: contiguous with enough digits.
    fn range_span(&self) -> Option<(u8, u8)> {
        if self.len() < RANGE_MIN_DIGITS {
            return None;
        }
        self.contiguous_span()
    }
}

/// The class chosen for a set of final digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafClass {
    /// All ten digits: `[0-9]`.
    AnyDigit,
    /// Contiguous present digits: `[3-8]`.
    Range { first: u8, last: u8 },
    /// Contiguous missing digits: `[^3-6]`.
    NegatedRange { first: u8, last: u8 },
    /// Missing digits listed: `[^257]`.
    NegatedList(DigitSet),
    /// Present digits listed: `[147]`, or a bare digit for one member.
    List(DigitSet),
}

impl LeafClass {
    /// Pick the shortest class for the present final digits.
    ///
    /// Returns `None` for an empty set.
    pub fn classify(present: DigitSet) -> Option<Self> {
        if present.is_empty() {
            return None;
        }
        if present.is_full() {
            return Some(LeafClass::AnyDigit);
        }
        if let Some((first, last)) = present.range_span() {
            return Some(LeafClass::Range { first, last });
        }

        let missing = present.complement();
        if missing.len() < present.len() {
            return Some(match missing.range_span() {
                Some((first, last)) => LeafClass::NegatedRange { first, last },
                None => LeafClass::NegatedList(missing),
            });
        }
        Some(LeafClass::List(present))
    }

    pub fn to_fragment(self) -> RegexFragment {
        RegexFragment::new(self.to_string())
    }
}

impl fmt::Display for LeafClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafClass::AnyDigit => f.write_str("[0-9]"),
            LeafClass::Range { first, last } => write!(f, "[{first}-{last}]"),
            LeafClass::NegatedRange { first, last } => write!(f, "[^{first}-{last}]"),
            LeafClass::NegatedList(missing) => {
                f.write_str("[^")?;
                write_digits(f, missing)?;
                f.write_str("]")
            }
            LeafClass::List(present) if present.len() == 1 => write_digits(f, present),
            LeafClass::List(present) => {
                f.write_str("[")?;
                write_digits(f, present)?;
                f.write_str("]")
            }
        }
    }
}

fn write_digits(f: &mut fmt::Formatter<'_>, set: &DigitSet) -> fmt::Result {
    for d in set.iter() {
        write!(f, "{d}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "leaf_tests.rs"]
mod tests;
