//! Flattening engine
//!
//! Turns a root source file and everything it locally includes into one
//! self-contained text:
//! - directive: recognizes `#include <...>` and `#include "..."` lines
//! - normalize: strips comments and `#pragma once` from inlined content
//! - collector: pulls system includes out into one sorted set
//! - expander: walks local includes depth-first, once per file
//! - assemble: puts the header block on top and writes the result

pub mod assemble;
pub mod collector;
pub mod directive;
pub mod expander;
pub mod normalize;
