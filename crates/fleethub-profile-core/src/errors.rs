//! Profile service error types.

use fleethub_crypto::{ContentHash, CryptoError};
use fleethub_schema::DecodeError;
use thiserror::Error;

/// Profile registration errors
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No application sequence state for the token
    #[error("Application not found for token: {0}")]
    ApplicationNotFound(String),

    /// No SDK profile registered for the token
    #[error("SDK profile not found for token: {0}")]
    SdkProfileNotFound(String),

    /// No profile schema at the required version
    #[error("Profile schema not found for application '{application_token}' version {version}")]
    SchemaNotFound {
        /// Application token the lookup used
        application_token: String,
        /// Missing schema version
        version: i32,
    },

    /// Update addressed an endpoint that was never registered
    #[error("Endpoint profile not found for key hash: {0}")]
    ProfileNotFound(ContentHash),

    /// Payload failed schema-bound decoding
    #[error("Profile decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Endpoint key bytes were not valid key material
    #[error("Endpoint key format error: {0}")]
    KeyFormat(#[from] CryptoError),

    /// Control cache failure
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Endpoint store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Control cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// Backend unavailable or failed
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Endpoint store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend unavailable or failed
    #[error("Store backend error: {0}")]
    Backend(String),

    /// Write collided with a concurrent registration of the same endpoint
    #[error("Conflicting write for key hash: {0}")]
    Conflict(ContentHash),

    /// Record could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;
