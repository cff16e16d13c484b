// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Length-budgeted grouping of fragments into alternations.
//!
//! Fragments arrive ascending by length and are packed greedily into
//! groups. A group closes once adding the next fragment would bring its
//! rendered size, plus the prefix still to be added by the ancestors,
//! up to the budget. Multi-member groups fold to `(a|b|...)`.

use crate::error::{Error, Result};
use crate::fragment::RegexFragment;

/// Default per-pattern length budget.
pub const DEFAULT_BUDGET: usize = 1000;

/// Characters a folded group adds on top of its members and separators:
/// the two parentheses and the start anchor added at the root.
pub const GROUP_OVERHEAD: usize = 3;

/// Intended maximum length of one emitted pattern.
///
/// The bound is soft: a single fragment longer than the budget is still
/// emitted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget(usize);

impl Budget {
    pub fn new(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::Argument(
                "pattern length limit must be positive".to_string(),
            ));
        }
        Ok(Self(limit))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(DEFAULT_BUDGET)
    }
}

/// An ordered batch of fragments destined for one alternation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternGroup {
    members: Vec<RegexFragment>,
    chars: usize,
}

impl PatternGroup {
    fn push(&mut self, fragment: RegexFragment) {
        self.chars += fragment.len();
        self.members.push(fragment);
    }

    pub fn members(&self) -> &[RegexFragment] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Alternation separators needed to join the members.
    pub fn separators(&self) -> usize {
        self.members.len().saturating_sub(1)
    }

    /// Budgeted size of this group when it sits at `depth`.
    pub fn cost(&self, depth: usize) -> usize {
        depth + GROUP_OVERHEAD + self.chars + self.separators()
    }

    /// Budgeted size if `fragment` were appended.
    fn cost_with(&self, depth: usize, fragment: &RegexFragment) -> usize {
        depth + GROUP_OVERHEAD + self.chars + fragment.len() + self.members.len()
    }

    /// Fold into a single fragment. A singleton is returned unwrapped.
    pub fn fold(mut self) -> RegexFragment {
        if self.members.len() == 1
            && let Some(only) = self.members.pop()
        {
            return only;
        }

        let mut text = String::with_capacity(self.chars + self.separators() + 2);
        text.push('(');
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                text.push('|');
            }
            text.push_str(member.as_str());
        }
        text.push(')');
        RegexFragment::new(text)
    }
}

/// Packs fragments into groups that respect the length budget.
#[derive(Debug, Clone, Copy)]
pub struct LengthBudgetedGrouper {
    budget: Budget,
}

impl LengthBudgetedGrouper {
    pub fn new(budget: Budget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Split an ascending fragment list into budgeted groups, in order.
    pub fn partition(&self, fragments: Vec<RegexFragment>, depth: usize) -> Vec<PatternGroup> {
        let limit = self.budget.get();
        let mut groups = Vec::new();
        let mut current = PatternGroup::default();

        for fragment in fragments {
            if !current.is_empty() && current.cost_with(depth, &fragment) >= limit {
                groups.push(std::mem::take(&mut current));
            }
            current.push(fragment);
        }
        if !current.is_empty() {
            groups.push(current);
        }
        groups
    }

    /// Group and fold `fragments`, returning a list ascending by length.
    ///
    /// Lists of zero or one fragment are returned unchanged.
    pub fn group(&self, fragments: Vec<RegexFragment>, depth: usize) -> Vec<RegexFragment> {
        if fragments.len() <= 1 {
            return fragments;
        }

        let mut folded: Vec<RegexFragment> = self
            .partition(fragments, depth)
            .into_iter()
            .map(PatternGroup::fold)
            .collect();
        folded.sort_by_key(RegexFragment::len);
        folded
    }
}

#[cfg(test)]
#[path = "grouper_tests.rs"]
mod tests;
