//! Error types for the idscan-core library.
//!
//! Pattern misses are never errors: an unmatched field is `None` on its
//! record. Only the OCR collaborator and the ambient layers can fail.

use thiserror::Error;

/// Main error type for the idscan library.
#[derive(Error, Debug)]
pub enum IdscanError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by a text recognizer.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The image bytes could not be decoded.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the idscan library.
pub type Result<T> = std::result::Result<T, IdscanError>;
