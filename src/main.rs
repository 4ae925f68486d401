//! amalgam - flatten a C/C++ source file into one self-contained file
//!
//! amalgam provides:
//! - Recursive inlining of local includes, once per file
//! - Comment and `#pragma once` stripping for inlined content
//! - A single sorted block of all system includes at the top
//! - An optional traversal report (jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod error;
mod flatten;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
