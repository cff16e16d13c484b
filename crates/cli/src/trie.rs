// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Digit-indexed prefix tree over fixed-width codes.
//!
//! Each node owns its (at most ten) children outright. The tree is built
//! by a single insertion pass and only read afterwards.

use crate::code::{Code, CodeWidth};
use crate::error::{Error, Result};

/// Number of children a node can have (one per decimal digit).
pub const RADIX: usize = 10;

/// A node of the code trie.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    depth: usize,
    child_count: usize,
    children: [Option<Box<TrieNode>>; RADIX],
}

impl TrieNode {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    /// Digits consumed on the path from the root (root = 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }

    pub fn child(&self, digit: u8) -> Option<&TrieNode> {
        self.children.get(usize::from(digit))?.as_deref()
    }

    /// Present children in ascending digit order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(digit, child)| child.as_deref().map(|node| (digit as u8, node)))
    }

    fn child_or_insert(&mut self, digit: u8) -> &mut TrieNode {
        let depth = self.depth + 1;
        let slot = &mut self.children[usize::from(digit)];
        if slot.is_none() {
            self.child_count += 1;
        }
        slot.get_or_insert_with(|| Box::new(TrieNode::new(depth)))
    }

    fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }
}

/// Prefix tree over a set of codes of one width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTrie {
    width: CodeWidth,
    root: TrieNode,
    len: usize,
}

impl CodeTrie {
    pub fn new(width: CodeWidth) -> Self {
        Self {
            width,
            root: TrieNode::new(0),
            len: 0,
        }
    }

    /// Build a trie from already-validated codes.
    ///
    /// Fails on the first code whose width differs from `width`; nothing
    /// is returned in that case.
    pub fn from_codes<'a>(
        width: CodeWidth,
        codes: impl IntoIterator<Item = &'a Code>,
    ) -> Result<Self> {
        let mut trie = Self::new(width);
        for code in codes {
            trie.insert_code(code)?;
        }
        Ok(trie)
    }

    /// Parse and insert a textual code.
    ///
    /// Returns `true` if the code was not already present.
    pub fn insert(&mut self, text: &str) -> Result<bool> {
        let code = Code::parse(text, self.width)?;
        self.insert_code(&code)
    }

    /// Insert a validated code. Inserting a code twice is a no-op.
    pub fn insert_code(&mut self, code: &Code) -> Result<bool> {
        if code.width() != self.width.get() {
            return Err(Error::InvalidWidth {
                code: code.to_string(),
                expected: self.width.get(),
                actual: code.width(),
            });
        }

        let mut node = &mut self.root;
        let mut created = false;
        for &digit in code.digits() {
            created = node.child(digit).is_none();
            node = node.child_or_insert(digit);
        }

        if created {
            self.len += 1;
        }
        Ok(created)
    }

    pub fn contains(&self, code: &Code) -> bool {
        code.width() == self.width.get()
            && code
                .digits()
                .iter()
                .try_fold(&self.root, |node, &digit| node.child(digit))
                .is_some()
    }

    pub fn width(&self) -> CodeWidth {
        self.width
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct codes inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
