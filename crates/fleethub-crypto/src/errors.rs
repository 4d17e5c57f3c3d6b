//! Error types for endpoint key material.

use thiserror::Error;

/// Key material errors
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid key size
    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize {
        /// Expected key size in bytes
        expected: usize,
        /// Actual key size in bytes
        actual: usize,
    },

    /// Key bytes do not decode to a valid curve point
    #[error("Key rejected: {0}")]
    KeyRejected(String),
}

/// Result type for key material operations
pub type Result<T> = std::result::Result<T, CryptoError>;
