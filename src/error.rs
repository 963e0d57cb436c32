//! Error types for the extractor.
//!
//! One structured error enum is surfaced to the CLI; inside the corpus loop
//! all per-file errors degrade to logging so a bad file never aborts a run.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Cutoff year outside the plausible range.
    #[error("Invalid cutoff year: {0}. Expected a four-digit year (e.g., 1964)")]
    InvalidCutoffYear(i32),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Header field present but not an integer.
    #[error("Invalid header field {field}: '{value}' is not an integer")]
    InvalidHeaderField { field: String, value: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
