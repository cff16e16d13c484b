// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! verify: FAIL
//!   domain: 100000..=999999 (900000 values)
//!   patterns: 3
//!   codes: 19000
//!   matched: 19004
//!   false positives: 4
//!     100106, 100107, 100108, 100109
//!   missing: 0
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::verify::VerifyReport;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write a full verification report.
    pub fn write_report(&mut self, report: &VerifyReport) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "verify")?;
        self.out.reset()?;
        write!(self.out, ": ")?;
        if report.is_exact() {
            self.out.set_color(&scheme::pass())?;
            write!(self.out, "PASS")?;
        } else {
            self.out.set_color(&scheme::fail())?;
            write!(self.out, "FAIL")?;
        }
        self.out.reset()?;
        writeln!(self.out)?;

        writeln!(
            self.out,
            "  domain: {}..={} ({} values)",
            report.render(report.first),
            report.render(report.last),
            report.probed()
        )?;
        writeln!(self.out, "  patterns: {}", report.pattern_count)?;
        writeln!(self.out, "  codes: {}", report.ground_truth_size)?;
        writeln!(self.out, "  matched: {}", report.match_count)?;

        self.write_values(report, "false positives", &report.false_positives)?;
        self.write_values(report, "missing", &report.missing)?;

        if !report.unreachable.is_empty() {
            self.out.set_color(&scheme::warn())?;
            write!(self.out, "  unreachable")?;
            self.out.reset()?;
            writeln!(
                self.out,
                ": {} (outside the verified domain; try --leading-zeros)",
                report.unreachable.len()
            )?;
            self.write_samples(report, &report.unreachable)?;
        }

        self.out.flush()
    }

    fn write_values(
        &mut self,
        report: &VerifyReport,
        label: &str,
        values: &[u64],
    ) -> std::io::Result<()> {
        writeln!(self.out, "  {}: {}", label, values.len())?;
        self.write_samples(report, values)
    }

    fn write_samples(&mut self, report: &VerifyReport, values: &[u64]) -> std::io::Result<()> {
        if values.is_empty() || self.options.samples == 0 {
            return Ok(());
        }

        write!(self.out, "    ")?;
        for (i, value) in values.iter().take(self.options.samples).enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            self.out.set_color(&scheme::value())?;
            write!(self.out, "{}", report.render(*value))?;
            self.out.reset()?;
        }
        let hidden = values.len().saturating_sub(self.options.samples);
        if hidden > 0 {
            write!(self.out, " ... and {} more", hidden)?;
        }
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
