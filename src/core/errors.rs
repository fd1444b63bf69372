//! Shared error types for the library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A source unit could not be read. Recoverable per unit: a multi-file
    /// run skips the unit and continues.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser produced no tree for a unit. Recoverable per unit.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The Python grammar could not be loaded into the parser.
    #[error("failed to load the Python grammar")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// Caller misuse, raised at configuration time before any analysis runs.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
