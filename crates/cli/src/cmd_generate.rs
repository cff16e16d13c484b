// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generate command implementation.

use std::io::{BufWriter, Write};

use termcolor::StandardStream;

use pinrex::cli::{Cli, GenerateArgs};
use pinrex::color::resolve_color;
use pinrex::discovery;
use pinrex::error::{Error, ExitCode};
use pinrex::input;
use pinrex::observer::VerboseObserver;
use pinrex::output::FormatOptions;
use pinrex::output::json::write_patterns;
use pinrex::output::text::TextFormatter;
use pinrex::synth::generate;
use pinrex::verify::RegexVerifier;

/// Run the generate command.
pub fn run(cli: &Cli, args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    let width = args.codes.width(&config)?;
    let budget = args.budget(&config)?;
    let observer = VerboseObserver::new(args.codes.verbose);
    observer.log(&format!(
        "input: {} (width {}, limit {})",
        args.codes.input.display(),
        width,
        budget.get()
    ));

    let codes = input::load_codes(&args.codes.input, width)?;
    let patterns = generate(&codes, width, budget, &observer)?;

    let mut exit_code = ExitCode::Success;
    if args.verify {
        let options = args.codes.verify_options(&config);
        let report = RegexVerifier::new(width, options, &observer).verify(&patterns, &codes)?;

        // Patterns own stdout; the verdict goes to stderr.
        let stderr = StandardStream::stderr(resolve_color());
        TextFormatter::new(stderr, FormatOptions::default()).write_report(&report)?;
        if !report.is_exact() {
            exit_code = ExitCode::VerifyFailed;
        }
    }

    match &args.output {
        Some(path) => {
            let io_error = |source| Error::Io {
                path: path.clone(),
                source,
            };
            let file = std::fs::File::create(path).map_err(io_error)?;
            let mut writer = BufWriter::new(file);
            write_patterns(&mut writer, &patterns).map_err(io_error)?;
            writer.flush().map_err(io_error)?;
            observer.log(&format!("wrote {} patterns to {}", patterns.len(), path.display()));
        }
        None => {
            let stdout = std::io::stdout();
            write_patterns(stdout.lock(), &patterns)?;
        }
    }

    Ok(exit_code)
}
