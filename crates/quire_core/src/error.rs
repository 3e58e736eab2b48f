//! Application error types for the document data layer and toolbar inputs.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid font size: {0:?}")]
    InvalidFontSize(String),

    #[error("Image source is empty")]
    EmptyImageSource,

    #[error("Failed to read image: {0}")]
    ImageRead(#[from] std::io::Error),

    #[error("Worker error: {0}")]
    Worker(String),
}
