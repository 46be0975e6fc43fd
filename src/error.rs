//! Error types for iramuteq-prep.

use std::io;
use thiserror::Error;

/// Result type alias for corpus preparation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading sources or writing corpora.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No reader is registered for the source format.
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    /// The source could not be identified as text or a JSON page dump.
    #[error("Unknown source format")]
    UnknownFormat,

    /// A JSON page dump could not be decoded.
    #[error("Malformed page dump: {0}")]
    Json(#[from] serde_json::Error),

    /// Source bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The source produced no pages.
    #[error("Document has no pages")]
    EmptyDocument,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
