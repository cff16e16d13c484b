// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex fragments and length-ordered merging.

use std::fmt;

/// A partial regex describing the codes reachable below a trie node.
///
/// Fragments are ordered by their rendered length; every list handed
/// between synthesis levels is kept ascending by that length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegexFragment {
    text: String,
}

impl RegexFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Rendered length in characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Prepend `prefix` to this fragment.
    pub fn prefixed(self, prefix: &str) -> Self {
        let mut text = String::with_capacity(prefix.len() + self.text.len());
        text.push_str(prefix);
        text.push_str(&self.text);
        Self { text }
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for RegexFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// True when `fragments` is ascending by length.
pub fn is_sorted_by_len(fragments: &[RegexFragment]) -> bool {
    fragments.windows(2).all(|w| w[0].len() <= w[1].len())
}

/// Merge two length-ascending lists into one length-ascending list.
///
/// Stable: on equal lengths, fragments from `left` come first.
pub fn merge_sorted(left: Vec<RegexFragment>, right: Vec<RegexFragment>) -> Vec<RegexFragment> {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r.len() < l.len(),
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Fold any number of length-ascending lists into one with repeated
/// two-way merges, preserving the order of the input lists on ties.
pub fn merge_all(lists: impl IntoIterator<Item = Vec<RegexFragment>>) -> Vec<RegexFragment> {
    lists.into_iter().fold(Vec::new(), merge_sorted)
}

#[cfg(test)]
#[path = "fragment_tests.rs"]
mod tests;
