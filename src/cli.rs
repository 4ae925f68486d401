//! CLI module - Command-line interface definition and driver

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::log::{LogLevel, Logger};
use crate::core::render::{RenderConfig, Renderer, ReportFormat};
use crate::flatten::assemble::{self, DEFAULT_OUTPUT};
use crate::flatten::expander::{ExpandOptions, MissingPolicy};

/// amalgam - flatten a source file and its local includes into one file.
#[derive(Parser, Debug)]
#[command(name = "amalgam")]
#[command(
    author,
    version,
    about,
    long_about = r#"amalgam inlines every local (#include "...") file reachable from INPUT and
writes one self-contained source file.

- Each local file is inlined once, at its first inclusion; later inclusions
  and include cycles are dropped.
- Comments and `#pragma once` are stripped from inlined files. INPUT's own
  text is kept as written.
- System includes (#include <...>) from every file are collected, deduplicated,
  sorted, and emitted once at the top of the output.

Examples:
    amalgam solution.cpp
    amalgam solution.cpp submit.cpp --missing warn
    amalgam solution.cpp --stdout | pbcopy
    amalgam solution.cpp --report md
"#
)]
pub struct Cli {
    /// Root source file to flatten.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (overwritten if it exists).
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write the flattened source to stdout instead of OUTPUT.
    #[arg(
        long,
        long_help = "Write the flattened source to stdout instead of OUTPUT.\n\n\
OUTPUT is ignored and no file is written."
    )]
    pub stdout: bool,

    /// How to handle local includes whose file does not exist.
    #[arg(
        long,
        env = "AMALGAM_MISSING",
        default_value = "silent",
        value_parser = ["silent", "warn", "error"],
        value_name = "POLICY",
        long_help = "How to handle a local include whose resolved path does not exist.\n\n\
Supported values:\n\
- silent (default): drop the directive\n\
- warn: drop the directive and print a warning to stderr\n\
- error: abort without writing any output"
    )]
    pub missing: String,

    /// Print a report of the traversal to stdout (jsonl/json/md).
    #[arg(
        long,
        value_name = "FORMAT",
        value_parser = ["jsonl", "json", "md"],
        conflicts_with = "stdout",
        long_help = "Print a report of what was inlined, suppressed as duplicate, found missing,\n\
and which system headers were collected.\n\n\
Supported values:\n\
- jsonl: one JSON object per line\n\
- json: a single JSON array\n\
- md: human-friendly Markdown"
    )]
    pub report: Option<String>,

    /// Pretty-print JSON/JSONL report output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored diagnostics.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no warnings, no completion message).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (trace every include decision on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let log = Logger::new(LogLevel::from_flags(cli.quiet, cli.verbose));
    let missing: MissingPolicy = cli.missing.parse().unwrap_or_default();
    let options = ExpandOptions { missing };
    log.debug(format_args!(
        "log level {}, missing includes: {}",
        log.level(),
        missing
    ));

    let flattened = if cli.stdout {
        let flattened = assemble::flatten(&cli.input, options, &log)?;
        io::stdout().write_all(flattened.text.as_bytes())?;
        flattened
    } else {
        assemble::run(&cli.input, &cli.output, options, &log)?
    };

    let report_format: Option<ReportFormat> = cli
        .report
        .as_deref()
        .map(|format| format.parse().unwrap_or_default());

    if let Some(format) = report_format {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));
        renderer.render_to(&flattened.report, io::stdout().lock())?;
    }

    if !cli.stdout {
        let message = format!("Expanded and saved to {}", cli.output.display());
        if report_format.is_some() {
            log.info(message);
        } else if log.level() > LogLevel::Quiet {
            println!("{}", message);
        }
    }

    Ok(())
}
