// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled union of emitted patterns.

use regex::{Regex, RegexSet};

use crate::error::{Error, Result};

/// How the union is evaluated.
enum Matcher {
    /// All patterns in one automaton (fastest).
    Set(RegexSet),
    /// Patterns tried one by one, for unions too large for a single set.
    Each(Vec<Regex>),
}

/// A list of patterns compiled for membership tests against their union.
pub struct PatternSet {
    matcher: Matcher,
}

impl PatternSet {
    /// Compile every pattern.
    ///
    /// Fails on the first pattern that is not a valid regex, naming it.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern).map_err(|e| Error::PatternCompilation {
                index,
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            compiled.push(regex);
        }

        let matcher = match RegexSet::new(patterns) {
            Ok(set) => Matcher::Set(set),
            Err(e) => {
                tracing::debug!(error = %e, "pattern union too large for one set");
                Matcher::Each(compiled)
            }
        };

        Ok(Self { matcher })
    }

    pub fn len(&self) -> usize {
        match &self.matcher {
            Matcher::Set(set) => set.len(),
            Matcher::Each(regexes) => regexes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if any pattern matches `probe`.
    pub fn is_match(&self, probe: &str) -> bool {
        match &self.matcher {
            Matcher::Set(set) => set.is_match(probe),
            Matcher::Each(regexes) => regexes.iter().any(|re| re.is_match(probe)),
        }
    }

}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
