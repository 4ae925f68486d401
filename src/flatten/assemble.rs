//! Final assembly
//!
//! Output layout: the sorted system include block, one blank line, then the
//! expanded root text.

use std::fs;
use std::path::Path;

use crate::core::log::Logger;
use crate::core::model::Report;
use crate::error::{FlattenError, Result};
use crate::flatten::collector::SystemIncludes;
use crate::flatten::expander::{ExpandOptions, Expander};

/// Default output file name when none is given
pub const DEFAULT_OUTPUT: &str = "expanded.cpp";

/// A fully assembled run
#[derive(Debug, Clone)]
pub struct Flattened {
    pub text: String,
    pub report: Report,
}

/// Expand `input` and assemble the final text, without writing anything
pub fn flatten(input: &Path, options: ExpandOptions, log: &Logger) -> Result<Flattened> {
    let mut expander = Expander::new(options, log);
    let body = expander.expand(input, true)?;
    let (headers, report) = expander.finish();

    Ok(Flattened {
        text: assemble(&headers, &body),
        report,
    })
}

/// Prepend the header block and its separating blank line
pub fn assemble(headers: &SystemIncludes, body: &str) -> String {
    let mut out = headers.render_block();
    out.push('\n');
    out.push_str(body);
    out
}

/// Write the output, replacing any existing file
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| FlattenError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Flatten `input` into `output`
///
/// Nothing is written unless expansion succeeded.
pub fn run(input: &Path, output: &Path, options: ExpandOptions, log: &Logger) -> Result<Flattened> {
    let flattened = flatten(input, options, log)?;
    write_output(output, &flattened.text)?;
    Ok(flattened)
}
