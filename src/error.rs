//! Error types for mdresume library.

use std::io;
use thiserror::Error;

/// Result type alias for mdresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around a conversion.
///
/// Parsing and rendering themselves never fail; these errors come from the
/// I/O and serialization edges.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input could not be used (e.g. not valid UTF-8).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
