//! Content addressing using SHA-256.

use crate::constants::DIGEST_SIZE;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest used as a content address.
///
/// Endpoint identity (`endpoint_key_hash`) and profile payloads
/// (`profile_hash`) are both addressed by this digest. Equal inputs always
/// produce equal digests, which is what makes registration idempotent per
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; DIGEST_SIZE]);

impl ContentHash {
    /// Compute the digest of a byte payload
    pub fn of(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        Self(digest.into())
    }

    /// Wrap an existing digest
    pub fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get a reference to the digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering of the digest
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let data = b"profile payload";
        let hash1 = ContentHash::of(data);
        let hash2 = ContentHash::of(data);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_different_inputs() {
        let hash1 = ContentHash::of(b"payload1");
        let hash2 = ContentHash::of(b"payload2");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_hex_rendering() {
        // SHA-256 of the empty byte string, per FIPS 180-4
        let hash = ContentHash::of(b"");
        assert_eq!(
            hash.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(hash.to_string(), hash.to_hex());
    }

    #[test]
    fn test_from_bytes_preserves_digest() {
        let hash = ContentHash::of(b"payload");
        assert_eq!(ContentHash::from_bytes(*hash.as_bytes()), hash);
    }
}
