//! Sizes of the primitives behind endpoint identity.
//!
//! Both constants are wire-visible: the key hash is the primary lookup key
//! for endpoint records and MUST NOT change size across releases.

/// Size of a content digest (SHA-256) in bytes
pub const DIGEST_SIZE: usize = 32;

/// Size of an endpoint public key (Ed25519, compressed) in bytes
pub const ENDPOINT_KEY_SIZE: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_correct_sizes() {
        assert_eq!(DIGEST_SIZE, 32);
        assert_eq!(ENDPOINT_KEY_SIZE, 32);
    }
}
