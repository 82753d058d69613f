//! Error types for blockshift operations.

use thiserror::Error;

/// Errors that can occur while loading or serializing documents.
///
/// Conversion itself never fails: malformed rich-text input degrades to
/// placeholder content or to nothing. Errors only arise at the I/O
/// boundary, when reading source files or parsing their JSON.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
