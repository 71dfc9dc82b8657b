//! Custom error types for tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected user input (non-positive amount, malformed command, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export serialization errors
    #[error("Export error: {0}")]
    Export(String),

    /// A field contains a character the PDF text encoding cannot represent
    #[error("Unsupported character {character:?} in {field}: PDF output is limited to Latin-1 text")]
    Encoding {
        field: &'static str,
        character: char,
    },
}

impl TallyError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an export-time encoding error
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::Validation("amount must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "Validation error: amount must be greater than zero"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_encoding_error_names_field() {
        let err = TallyError::Encoding {
            field: "category",
            character: '💰',
        };
        assert!(err.to_string().contains("category"));
        assert!(err.is_encoding());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tally_err: TallyError = io_err.into();
        assert!(matches!(tally_err, TallyError::Io(_)));
    }
}
