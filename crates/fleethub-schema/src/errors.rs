//! Decode error types.

use thiserror::Error;

/// Errors raised while decoding a raw profile payload against a schema
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload is not parseable at all
    #[error("Malformed profile payload: {0}")]
    Malformed(String),

    /// Schema document does not describe a record
    #[error("Invalid profile schema: {0}")]
    InvalidSchema(String),

    /// Required field is absent from the payload
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Field is present but has the wrong type
    #[error("Type mismatch for field '{field}': expected {expected}")]
    TypeMismatch {
        /// Name of the offending field
        field: String,
        /// Type the schema declares for it
        expected: &'static str,
    },

    /// Payload carries a field the schema does not declare
    #[error("Field not declared in schema: {0}")]
    UnknownField(String),
}

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;
