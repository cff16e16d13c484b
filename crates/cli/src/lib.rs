// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex synthesis for sets of fixed-width numeric codes.
//!
//! Codes are loaded into a digit trie, each level is rendered as
//! alternatives, and alternatives are packed into length-budgeted groups.
//! [`verify`] checks an emitted pattern list against the codes by probing
//! every value of the domain.

pub mod cli;
pub mod code;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fragment;
pub mod grouper;
pub mod input;
pub mod leaf;
pub mod observer;
pub mod output;
pub mod pattern;
pub mod synth;
pub mod trie;
pub mod verify;

pub use cli::{Cli, Command, GenerateArgs, OutputFormat, VerifyArgs};
pub use code::{Code, CodeWidth};
pub use error::{Error, ExitCode, Result};
pub use fragment::RegexFragment;
pub use grouper::{Budget, LengthBudgetedGrouper, PatternGroup};
pub use leaf::{DigitSet, LeafClass};
pub use observer::{NoopObserver, Observer, VerboseObserver};
pub use pattern::PatternSet;
pub use synth::{AlternativeSynthesizer, generate};
pub use trie::{CodeTrie, TrieNode};
pub use verify::{Domain, RegexVerifier, VerifyOptions, VerifyReport};

#[cfg(test)]
pub mod test_utils;
