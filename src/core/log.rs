//! Leveled diagnostics on stderr
//!
//! stdout is reserved for flattened text, reports and the completion message,
//! so every diagnostic goes to stderr.

use colored::Colorize;
use std::fmt;

/// Logging level, ordered from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Only fatal errors (printed by the caller)
    Quiet,
    /// Warnings
    #[default]
    Normal,
    /// Warnings plus per-include tracing
    Verbose,
}

impl LogLevel {
    /// Pick a level from the CLI flags; verbose wins over quiet
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if verbose {
            LogLevel::Verbose
        } else if quiet {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Quiet => write!(f, "quiet"),
            LogLevel::Normal => write!(f, "normal"),
            LogLevel::Verbose => write!(f, "verbose"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub const fn level(&self) -> LogLevel {
        self.level
    }

    pub fn warn(&self, message: impl fmt::Display) {
        if self.level >= LogLevel::Normal {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }

    /// Status lines that accompany normal output (e.g. completion)
    pub fn info(&self, message: impl fmt::Display) {
        if self.level >= LogLevel::Normal {
            eprintln!("{}", message);
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        if self.level >= LogLevel::Verbose {
            eprintln!("{} {}", "debug:".dimmed(), message);
        }
    }
}
