// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exhaustive verification of emitted patterns.
//!
//! Every value of the fixed-width domain is rendered and tested against
//! the union of the patterns. The domain is cut into chunks; chunks run
//! on rayon workers with private tallies that are merged at the end, so
//! the result does not depend on scheduling.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::code::{Code, CodeWidth};
use crate::error::{Error, Result};
use crate::observer::Observer;
use crate::pattern::PatternSet;

/// Domain values probed per chunk.
pub const PROBE_CHUNK: u64 = 10_000;

/// Domains smaller than this are probed on the calling thread.
/// Below it, spawning work costs more than it saves.
pub const PARALLEL_THRESHOLD: u64 = 100_000;

/// Which values of the fixed-width domain are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Domain {
    /// `10^(L-1) ..= 10^L - 1`: values written without a leading zero.
    #[default]
    NoLeadingZeros,
    /// `0 ..= 10^L - 1`, zero-padded to the code width.
    Full,
}

impl Domain {
    /// Inclusive `(first, last)` bounds for `width`.
    ///
    /// A one-digit `0` has no leading zero, so width 1 always starts at 0.
    pub fn bounds(self, width: CodeWidth) -> (u64, u64) {
        let size = width.domain_size();
        match self {
            Domain::NoLeadingZeros if width.get() > 1 => (size / 10, size - 1),
            Domain::NoLeadingZeros | Domain::Full => (0, size - 1),
        }
    }

    /// True when `code` lies inside this domain.
    pub fn reaches(self, code: &Code) -> bool {
        match self {
            Domain::Full => true,
            Domain::NoLeadingZeros => !code.has_leading_zero(),
        }
    }
}

/// Verification settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    pub domain: Domain,
    /// Worker threads (0 = rayon default).
    pub threads: usize,
}

/// Outcome of a verification run.
///
/// An inexact result is data, not an error; see [`VerifyReport::is_exact`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub width: usize,
    /// First probed value.
    pub first: u64,
    /// Last probed value.
    pub last: u64,
    pub pattern_count: usize,
    /// Domain values matched by at least one pattern.
    pub match_count: u64,
    /// Distinct codes in the ground truth.
    pub ground_truth_size: usize,
    /// Matched values that are not codes, ascending.
    pub false_positives: Vec<u64>,
    /// Codes inside the domain that no pattern matched, ascending.
    pub missing: Vec<u64>,
    /// Codes outside the enumerated domain, ascending.
    pub unreachable: Vec<u64>,
}

impl VerifyReport {
    /// True when the union matched every code and nothing else.
    pub fn is_exact(&self) -> bool {
        self.match_count == self.ground_truth_size as u64
            && self.false_positives.is_empty()
            && self.missing.is_empty()
    }

    pub fn probed(&self) -> u64 {
        self.last - self.first + 1
    }

    /// Render a domain value at the code width.
    pub fn render(&self, value: u64) -> String {
        format!("{value:0width$}", width = self.width)
    }
}

/// Per-chunk counters, merged after all chunks finish.
#[derive(Debug, Default)]
struct Tally {
    matches: u64,
    false_positives: Vec<u64>,
    missing: Vec<u64>,
}

impl Tally {
    fn merge(mut self, other: Tally) -> Tally {
        self.matches += other.matches;
        self.false_positives.extend(other.false_positives);
        self.missing.extend(other.missing);
        self
    }
}

/// Checks that a pattern list matches exactly a set of codes.
pub struct RegexVerifier<'a> {
    width: CodeWidth,
    options: VerifyOptions,
    observer: &'a dyn Observer,
}

impl<'a> RegexVerifier<'a> {
    pub fn new(width: CodeWidth, options: VerifyOptions, observer: &'a dyn Observer) -> Self {
        Self {
            width,
            options,
            observer,
        }
    }

    /// Probe the whole domain against `patterns`.
    ///
    /// Fails if a pattern does not compile or a code has the wrong width.
    pub fn verify<S: AsRef<str>>(&self, patterns: &[S], codes: &[Code]) -> Result<VerifyReport> {
        let set = PatternSet::compile(patterns)?;

        let mut truth = HashSet::with_capacity(codes.len());
        let mut unreachable = Vec::new();
        for code in codes {
            if code.width() != self.width.get() {
                return Err(Error::InvalidWidth {
                    code: code.to_string(),
                    expected: self.width.get(),
                    actual: code.width(),
                });
            }
            if truth.insert(code.value()) && !self.options.domain.reaches(code) {
                unreachable.push(code.value());
            }
        }
        unreachable.sort_unstable();

        let (first, last) = self.options.domain.bounds(self.width);
        if !unreachable.is_empty() {
            tracing::warn!(
                count = unreachable.len(),
                "codes outside the verified domain cannot be checked"
            );
        }

        self.observer.verify_started(first, last, set.len());
        let tally = self.scan(&set, &truth, first, last)?;

        let mut false_positives = tally.false_positives;
        false_positives.sort_unstable();
        let mut missing = tally.missing;
        missing.sort_unstable();

        let report = VerifyReport {
            width: self.width.get(),
            first,
            last,
            pattern_count: set.len(),
            match_count: tally.matches,
            ground_truth_size: truth.len(),
            false_positives,
            missing,
            unreachable,
        };
        self.observer.verify_finished(&report);
        Ok(report)
    }

    fn scan(&self, set: &PatternSet, truth: &HashSet<u64>, first: u64, last: u64) -> Result<Tally> {
        let total = last - first + 1;
        let chunks = total.div_ceil(PROBE_CHUNK);
        let probed = AtomicU64::new(0);
        let width = self.width.get();

        let scan_chunk = |chunk: u64| -> Tally {
            let start = first + chunk * PROBE_CHUNK;
            let end = (start + PROBE_CHUNK - 1).min(last);
            let mut tally = Tally::default();
            for value in start..=end {
                let probe = format!("{value:0width$}");
                let matched = set.is_match(&probe);
                let expected = truth.contains(&value);
                if matched {
                    tally.matches += 1;
                    if !expected {
                        tally.false_positives.push(value);
                    }
                } else if expected {
                    tally.missing.push(value);
                }
            }
            let done = probed.fetch_add(end - start + 1, Ordering::Relaxed) + end - start + 1;
            self.observer.verify_progress(done, total);
            tally
        };

        if total < PARALLEL_THRESHOLD || self.options.threads == 1 {
            return Ok((0..chunks).map(scan_chunk).fold(Tally::default(), Tally::merge));
        }

        let run = || {
            (0..chunks)
                .into_par_iter()
                .map(scan_chunk)
                .reduce(Tally::default, Tally::merge)
        };

        if self.options.threads == 0 {
            return Ok(run());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.threads)
            .build()
            .map_err(|e| Error::Internal(format!("failed to start verification workers: {e}")))?;
        Ok(pool.install(run))
    }
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
