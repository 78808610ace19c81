//! Error types for socsignals operations.

use thiserror::Error;

/// Errors that can occur while parsing, rendering, or saving articles.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A block of a known kind is missing a required field or has the wrong shape.
    ///
    /// The renderer catches this per block and skips it; it never fails a whole document.
    #[error("malformed {kind} block at index {index}: {reason}")]
    MalformedBlock {
        index: usize,
        kind: String,
        reason: String,
    },

    #[error("invalid article status: {0}")]
    InvalidStatus(String),

    #[error("unauthorized: no signed-in author")]
    Unauthorized,
}

pub type Result<T> = std::result::Result<T, Error>;
