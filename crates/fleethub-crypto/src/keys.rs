//! Endpoint public-key parsing and validation.

use crate::{constants::*, errors::*};
use ed25519_dalek::VerifyingKey;

/// Validated Ed25519 public key presented by an endpoint.
///
/// Raw key bytes arriving with a registration request are untrusted. This
/// wrapper only exists for byte strings that decoded to a canonical curve
/// point, so verification caches hold this type rather than raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointPublicKey(VerifyingKey);

impl EndpointPublicKey {
    /// Parse raw key bytes exactly as the endpoint submitted them
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeySize` when the byte count is wrong,
    /// and `CryptoError::KeyRejected` when the bytes do not decode to a
    /// curve point.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() != ENDPOINT_KEY_SIZE {
            return Err(CryptoError::InvalidKeySize {
                expected: ENDPOINT_KEY_SIZE,
                actual: raw.len(),
            });
        }

        let mut bytes = [0u8; ENDPOINT_KEY_SIZE];
        bytes.copy_from_slice(raw);

        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| CryptoError::KeyRejected(e.to_string()))?;

        Ok(Self(key))
    }

    /// Get the compressed key bytes
    pub fn to_bytes(&self) -> [u8; ENDPOINT_KEY_SIZE] {
        self.0.to_bytes()
    }

    /// Get a reference to the underlying verifying key
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}
