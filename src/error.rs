//! Error types for the flattening engine
//!
//! Every failure is fatal to a run; nothing here is recovered internally.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, FlattenError>;

#[derive(Debug, Error)]
pub enum FlattenError {
    /// The root file or an existing include target could not be read
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output destination could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A local include points at a path that does not exist (strict mode only)
    #[error("{}:{line}: local include \"{target}\" not found", from.display())]
    MissingInclude {
        from: PathBuf,
        line: usize,
        target: String,
    },
}
