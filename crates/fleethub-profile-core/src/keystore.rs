//! Ed25519-backed endpoint keystore.

use crate::errors::CacheError;
use crate::traits::EndpointKeystore;
use async_trait::async_trait;
use fleethub_crypto::{ContentHash, CryptoError, EndpointPublicKey};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keystore that derives Ed25519 keys and caches them in memory.
///
/// The cache is keyed by endpoint key hash so that verification paths can
/// find the key of any registered endpoint without re-parsing raw bytes.
#[derive(Debug, Default)]
pub struct Ed25519Keystore {
    cache: RwLock<HashMap<ContentHash, EndpointPublicKey>>,
}

impl Ed25519Keystore {
    /// Create an empty keystore
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously cached key
    pub async fn cached_public_key(&self, key_hash: &ContentHash) -> Option<EndpointPublicKey> {
        self.cache.read().await.get(key_hash).copied()
    }
}

#[async_trait]
impl EndpointKeystore for Ed25519Keystore {
    fn derive_public_key(&self, endpoint_key: &[u8]) -> Result<EndpointPublicKey, CryptoError> {
        EndpointPublicKey::from_raw(endpoint_key)
    }

    async fn cache_public_key(
        &self,
        key_hash: ContentHash,
        public_key: EndpointPublicKey,
    ) -> Result<(), CacheError> {
        self.cache.write().await.insert(key_hash, public_key);
        Ok(())
    }
}
