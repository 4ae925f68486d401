//! Comment and pragma stripping for inlined content
//!
//! The passes are purely textual and know nothing about string or character
//! literals: `"http://x"` loses everything from `//` onward. Callers that
//! need literal-aware stripping must not route such text through here.

use once_cell::sync::Lazy;
use regex::Regex;

/// `// ...` up to (not including) the end of the line
static LINE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//.*").expect("Invalid LINE_COMMENT_RE regex"));

/// `/* ... */`, shortest match, may span lines
static BLOCK_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid BLOCK_COMMENT_RE regex"));

/// A line holding nothing but `#pragma once`, terminator included
static PRAGMA_ONCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^\S\n]*#[^\S\n]*pragma[^\S\n]+once[^\S\n]*(?:\n|\z)")
        .expect("Invalid PRAGMA_ONCE_RE regex")
});

/// Two or more consecutive whitespace-only lines
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[^\S\n]*\n){2,}").expect("Invalid BLANK_RUN_RE regex"));

/// Strip comments and include-once pragmas, collapse blank runs, and end the
/// text with exactly one newline
pub fn normalize(text: &str) -> String {
    let text = LINE_COMMENT_RE.replace_all(text, "");
    let text = BLOCK_COMMENT_RE.replace_all(&text, "");
    let text = PRAGMA_ONCE_RE.replace_all(&text, "");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");

    let mut out = text.trim().to_string();
    out.push('\n');
    out
}
