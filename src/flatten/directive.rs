//! Include directive recognition
//!
//! Both forms may be indented and may have whitespace between `#` and
//! `include`. Anything after the closing delimiter is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#include <name>`
pub static SYSTEM_INCLUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*#\s*include\s+<([^>]+)>"#).expect("Invalid SYSTEM_INCLUDE_RE regex")
});

/// `#include "path"`
pub static LOCAL_INCLUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*#\s*include\s+"([^"]+)""#).expect("Invalid LOCAL_INCLUDE_RE regex")
});

/// A recognized include directive, borrowing its target from the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Angle-bracket form: an opaque header name
    System(&'a str),
    /// Double-quote form: a path relative to the including file
    Local(&'a str),
}

/// Classify one line
pub fn parse(line: &str) -> Option<Directive<'_>> {
    if let Some(caps) = SYSTEM_INCLUDE_RE.captures(line) {
        return caps.get(1).map(|m| Directive::System(m.as_str()));
    }
    LOCAL_INCLUDE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| Directive::Local(m.as_str()))
}
