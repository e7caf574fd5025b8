//! Error types for ocrpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for ocrpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or writing a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The OCR service returned a payload we could not interpret.
    #[error("Malformed OCR response: {0}")]
    OcrResponse(String),

    /// Font data could not be loaded by the page writer.
    #[error("Font error: {0}")]
    Font(String),

    /// The page writer rejected a call or failed to finalize.
    #[error("Page writer error: {0}")]
    Writer(String),

    /// An option value is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
