// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verify command implementation.

use pinrex::cli::{Cli, OutputFormat, VerifyArgs};
use pinrex::color::resolve_color;
use pinrex::discovery;
use pinrex::error::ExitCode;
use pinrex::input;
use pinrex::observer::VerboseObserver;
use pinrex::output::FormatOptions;
use pinrex::output::json::JsonFormatter;
use pinrex::output::text::TextFormatter;
use pinrex::verify::RegexVerifier;

/// Run the verify command.
pub fn run(cli: &Cli, args: &VerifyArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    let width = args.codes.width(&config)?;
    let options = args.codes.verify_options(&config);
    let observer = VerboseObserver::new(args.codes.verbose);

    let codes = input::load_codes(&args.codes.input, width)?;
    let patterns = input::load_patterns(&args.patterns)?;
    observer.log(&format!(
        "{} codes, {} patterns from {}",
        codes.len(),
        patterns.len(),
        args.patterns.display()
    ));

    let report = RegexVerifier::new(width, options, &observer).verify(&patterns, &codes)?;

    let format_options = FormatOptions::with_samples(args.samples);
    match args.format {
        OutputFormat::Text => {
            TextFormatter::stdout(resolve_color(), format_options).write_report(&report)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock(), format_options).write_report(&report)?;
        }
    }

    Ok(if report.is_exact() {
        ExitCode::Success
    } else {
        ExitCode::VerifyFailed
    })
}
