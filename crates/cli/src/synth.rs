// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bottom-up regex synthesis over the code trie.
//!
//! Every node returns the fragments describing the code suffixes below
//! it, ascending by length and already grouped to the budget. Internal
//! nodes prefix each child's fragments with the child digit (plus `^`
//! at the root), merge them, and hand the merged list to the grouper.
//! Nodes at the final digit position collapse their children into a
//! single character class.

use crate::code::{Code, CodeWidth};
use crate::error::Result;
use crate::fragment::{RegexFragment, merge_all};
use crate::grouper::{Budget, LengthBudgetedGrouper};
use crate::leaf::{DigitSet, LeafClass};
use crate::observer::Observer;
use crate::trie::{CodeTrie, TrieNode};

/// Start-of-string anchor prepended to every root-level fragment.
const ANCHOR: &str = "^";

/// Turns a code trie into root-anchored patterns.
pub struct AlternativeSynthesizer<'a> {
    grouper: LengthBudgetedGrouper,
    observer: &'a dyn Observer,
}

impl<'a> AlternativeSynthesizer<'a> {
    pub fn new(budget: Budget, observer: &'a dyn Observer) -> Self {
        Self {
            grouper: LengthBudgetedGrouper::new(budget),
            observer,
        }
    }

    /// Produce the pattern list for every code in `trie`.
    ///
    /// Patterns come out ascending by length. An empty trie yields no
    /// patterns.
    pub fn synthesize(&self, trie: &CodeTrie) -> Vec<String> {
        self.observer.trie_built(trie.len(), trie.node_count());

        let patterns: Vec<String> = self
            .fragments(trie.root(), trie.width())
            .into_iter()
            .map(RegexFragment::into_string)
            .collect();

        self.observer.synthesis_finished(patterns.len());
        patterns
    }

    /// Fragments for the suffix language rooted at `node`.
    pub fn fragments(&self, node: &TrieNode, width: CodeWidth) -> Vec<RegexFragment> {
        if node.is_leaf() {
            // The parent supplies the digit that led here.
            return Vec::new();
        }

        let anchor = if node.depth() == 0 { ANCHOR } else { "" };

        if node.depth() >= width.leaf_depth() {
            let present = DigitSet::from_digits(node.children().map(|(digit, _)| digit));
            return LeafClass::classify(present)
                .map(|class| class.to_fragment().prefixed(anchor))
                .into_iter()
                .collect();
        }

        let per_child = node.children().map(|(digit, child)| {
            let prefix = format!("{anchor}{digit}");
            let below = self.fragments(child, width);
            if below.is_empty() {
                return vec![RegexFragment::new(prefix)];
            }
            below
                .into_iter()
                .map(|fragment| fragment.prefixed(&prefix))
                .collect()
        });

        let merged = merge_all(per_child);
        let merged_len = merged.len();
        let grouped = self.grouper.group(merged, node.depth());
        self.observer
            .level_grouped(node.depth(), merged_len, grouped.len());
        grouped
    }
}

/// Build a trie from `codes` and synthesize its patterns.
///
/// Aborts on the first code that does not have `width` digits.
pub fn generate(
    codes: &[Code],
    width: CodeWidth,
    budget: Budget,
    observer: &dyn Observer,
) -> Result<Vec<String>> {
    let trie = CodeTrie::from_codes(width, codes)?;
    Ok(AlternativeSynthesizer::new(budget, observer).synthesize(&trie))
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod tests;
