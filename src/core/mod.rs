//! Core module - shared infrastructure for the flattener
//!
//! This module provides:
//! - Source file loading (SourceText)
//! - The flatten report model and its renderers
//! - Path resolution and identity helpers
//! - Leveled stderr logging
//! - Common utilities

pub mod file_reader;
pub mod log;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
