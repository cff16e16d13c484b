// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output: the patterns document and the verification report.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::FormatOptions;
use crate::verify::VerifyReport;

/// Indent used for the patterns document.
const PATTERNS_INDENT: &[u8] = b"    ";

/// Patterns document: `{"regexes": [...]}`.
#[derive(Debug, Serialize)]
struct PatternsOutput<'a> {
    regexes: &'a [String],
}

/// Write the patterns document with a 4-space indent.
pub fn write_patterns<W: Write>(mut writer: W, patterns: &[String]) -> std::io::Result<()> {
    let formatter = PrettyFormatter::with_indent(PATTERNS_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    PatternsOutput { regexes: patterns }
        .serialize(&mut ser)
        .map_err(std::io::Error::other)?;
    writeln!(writer)
}

/// Inclusive domain bounds, rendered at the code width.
#[derive(Debug, Serialize)]
pub struct DomainOutput {
    pub first: String,
    pub last: String,
    pub size: u64,
}

/// Count plus leading sample values of one category.
#[derive(Debug, Serialize)]
pub struct ValuesOutput {
    pub count: usize,
    pub samples: Vec<String>,
}

impl ValuesOutput {
    fn new(report: &VerifyReport, values: &[u64], samples: usize) -> Self {
        Self {
            count: values.len(),
            samples: values
                .iter()
                .take(samples)
                .map(|v| report.render(*v))
                .collect(),
        }
    }
}

/// Verification report for JSON output.
#[derive(Debug, Serialize)]
pub struct VerifyOutput {
    pub passed: bool,
    pub width: usize,
    pub domain: DomainOutput,
    pub patterns: usize,
    pub codes: usize,
    pub matched: u64,
    pub false_positives: ValuesOutput,
    pub missing: ValuesOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreachable: Option<ValuesOutput>,
}

impl VerifyOutput {
    pub fn new(report: &VerifyReport, options: &FormatOptions) -> Self {
        let samples = options.samples;
        Self {
            passed: report.is_exact(),
            width: report.width,
            domain: DomainOutput {
                first: report.render(report.first),
                last: report.render(report.last),
                size: report.probed(),
            },
            patterns: report.pattern_count,
            codes: report.ground_truth_size,
            matched: report.match_count,
            false_positives: ValuesOutput::new(report, &report.false_positives, samples),
            missing: ValuesOutput::new(report, &report.missing, samples),
            unreachable: (!report.unreachable.is_empty())
                .then(|| ValuesOutput::new(report, &report.unreachable, samples)),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Write the complete JSON report.
    pub fn write_report(&mut self, report: &VerifyReport) -> std::io::Result<()> {
        let output = VerifyOutput::new(report, &self.options);
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
