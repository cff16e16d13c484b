// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Progress and diagnostics hooks for synthesis and verification.
//!
//! The core never writes to a terminal. Callers pass an [`Observer`];
//! [`NoopObserver`] ignores everything, [`VerboseObserver`] emits
//! `tracing` events and, when enabled, `[verbose]` lines on stderr.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::verify::VerifyReport;

/// Receives progress notifications from synthesis and verification.
///
/// Verification calls `verify_progress` from worker threads.
pub trait Observer: Sync {
    /// Trie construction finished.
    fn trie_built(&self, _codes: usize, _nodes: usize) {}

    /// One trie level was merged and grouped.
    fn level_grouped(&self, _depth: usize, _fragments: usize, _groups: usize) {}

    /// Synthesis produced the final pattern list.
    fn synthesis_finished(&self, _patterns: usize) {}

    /// Verification is about to probe `first..=last`.
    fn verify_started(&self, _first: u64, _last: u64, _patterns: usize) {}

    /// `probed` of `total` domain values have been checked.
    fn verify_progress(&self, _probed: u64, _total: u64) {}

    /// Verification completed.
    fn verify_finished(&self, _report: &VerifyReport) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Observer that logs through `tracing` and, when enabled, writes
/// `[verbose]` lines to stderr.
pub struct VerboseObserver {
    enabled: bool,
    last_percent: AtomicU64,
}

impl VerboseObserver {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_percent: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("[verbose] === {} ===", title);
        }
    }
}

impl Observer for VerboseObserver {
    fn trie_built(&self, codes: usize, nodes: usize) {
        tracing::info!(codes, nodes, "trie built");
        self.section("synthesis");
        self.log(&format!("trie: {codes} codes, {nodes} nodes"));
    }

    fn level_grouped(&self, depth: usize, fragments: usize, groups: usize) {
        tracing::trace!(depth, fragments, groups, "level grouped");
    }

    fn synthesis_finished(&self, patterns: usize) {
        tracing::info!(patterns, "synthesis finished");
        self.log(&format!("patterns: {patterns}"));
    }

    fn verify_started(&self, first: u64, last: u64, patterns: usize) {
        tracing::info!(first, last, patterns, "verification started");
        self.last_percent.store(0, Ordering::Relaxed);
        self.section("verification");
        self.log(&format!("domain: {first}..={last}, {patterns} patterns"));
    }

    fn verify_progress(&self, probed: u64, total: u64) {
        if total == 0 {
            return;
        }
        let percent = probed.min(total) * 100 / total;
        let previous = self.last_percent.fetch_max(percent, Ordering::Relaxed);
        if percent > previous {
            tracing::debug!(probed, total, percent, "verification progress");
            self.log(&format!("probed {probed}/{total} ({percent}%)"));
        }
    }

    fn verify_finished(&self, report: &VerifyReport) {
        tracing::info!(
            matches = report.match_count,
            expected = report.ground_truth_size,
            false_positives = report.false_positives.len(),
            exact = report.is_exact(),
            "verification finished"
        );
        self.log(&format!(
            "matches: {}, expected: {}, false positives: {}",
            report.match_count,
            report.ground_truth_size,
            report.false_positives.len()
        ));
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
