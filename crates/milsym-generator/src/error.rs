//! Error types for the generator

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a generation run
///
/// Render failures never appear here: they are counted per asset and the
/// run continues.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The output directory could not be created
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An asset could not be written and the policy is to abort
    #[error("Cannot write {path}: {source}")]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
