//! Schema document types.

use serde::{Deserialize, Serialize};

/// Versioned schema document resolved from the control plane.
///
/// The registration pipeline looks these up by (application token, version);
/// the body is opaque to everything except the decoder that consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Schema version within its application
    pub version: i32,
    /// Schema body; the reference decoder expects a record description
    pub body: serde_json::Value,
}

impl SchemaDocument {
    /// Create a schema document
    pub fn new(version: i32, body: serde_json::Value) -> Self {
        Self { version, body }
    }
}
