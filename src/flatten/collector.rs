//! System include collection
//!
//! System headers are never resolved; they are pulled out of every visited
//! file and re-emitted once, sorted, at the top of the output. Names compare
//! as exact strings, so `<a/b.h>` and `<./a/b.h>` are distinct.

use std::collections::BTreeSet;

use crate::core::file_reader::SourceLine;
use crate::flatten::directive::{self, Directive};

/// Deduplicated set of system header names, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemIncludes {
    headers: BTreeSet<String>,
}

impl SystemIncludes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a header; returns false if it was already known
    pub fn insert(&mut self, header: impl Into<String>) -> bool {
        self.headers.insert(header.into())
    }

    /// Remove system include lines, registering their headers
    ///
    /// All other lines are returned unchanged and in their original order.
    pub fn extract(&mut self, lines: Vec<SourceLine>) -> Vec<SourceLine> {
        lines
            .into_iter()
            .filter(|line| match directive::parse(&line.text) {
                Some(Directive::System(header)) => {
                    self.insert(header);
                    false
                }
                _ => true,
            })
            .collect()
    }

    /// Header names in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// One `#include <name>` line per header, sorted
    pub fn render_block(&self) -> String {
        self.iter()
            .map(|header| format!("#include <{}>\n", header))
            .collect()
    }
}
