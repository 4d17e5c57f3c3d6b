//! Profile registration service implementation.

mod decode;
mod registration;
mod versions;

use crate::config::RegistryConfig;
use crate::errors::*;
use crate::traits::*;
use crate::types::*;
use async_trait::async_trait;
use fleethub_crypto::ContentHash;
use fleethub_schema::ProfileDecoder;
use std::sync::Arc;
use tracing::debug;

/// Profile registration service implementation.
///
/// Stateless orchestration over four injected collaborators; all mutable
/// state lives behind them, so the service itself is freely shareable across
/// tasks.
pub struct ProfileRegistryService<C, S, D, K>
where
    C: ControlCache,
    S: EndpointStore,
    D: ProfileDecoder,
    K: EndpointKeystore,
{
    pub(super) cache: Arc<C>,
    pub(super) store: Arc<S>,
    pub(super) decoder: Arc<D>,
    pub(super) keystore: Arc<K>,
    pub(super) config: RegistryConfig,
}

impl<C, S, D, K> ProfileRegistryService<C, S, D, K>
where
    C: ControlCache,
    S: EndpointStore,
    D: ProfileDecoder,
    K: EndpointKeystore,
{
    /// Create a new profile registry service
    pub fn new(
        cache: Arc<C>,
        store: Arc<S>,
        decoder: Arc<D>,
        keystore: Arc<K>,
        config: RegistryConfig,
    ) -> Self {
        Self {
            cache,
            store,
            decoder,
            keystore,
            config,
        }
    }

    /// Resolve application sequence state, treating a miss as fatal
    pub(super) async fn require_application(
        &self,
        application_token: &str,
    ) -> Result<ApplicationSequence> {
        self.cache
            .application_sequence(application_token)
            .await?
            .ok_or_else(|| ProfileError::ApplicationNotFound(application_token.to_string()))
    }

    /// Resolve SDK schema versions, treating a miss as fatal
    pub(super) async fn require_sdk_profile(&self, sdk_token: &str) -> Result<SdkProfile> {
        self.cache
            .sdk_profile(sdk_token)
            .await?
            .ok_or_else(|| ProfileError::SdkProfileNotFound(sdk_token.to_string()))
    }
}

#[async_trait]
impl<C, S, D, K> ProfileRegistry for ProfileRegistryService<C, S, D, K>
where
    C: ControlCache + 'static,
    S: EndpointStore + 'static,
    D: ProfileDecoder + 'static,
    K: EndpointKeystore + 'static,
{
    async fn register_profile(&self, request: RegisterProfileRequest) -> Result<EndpointProfile> {
        self.register_profile_internal(request).await
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<EndpointProfile> {
        self.update_profile_internal(request).await
    }

    async fn find_profile(&self, key_hash: &ContentHash) -> Result<Option<EndpointProfile>> {
        Ok(self.store.find_by_key_hash(key_hash).await?)
    }

    async fn persist_profile(&self, profile: EndpointProfile) -> Result<EndpointProfile> {
        debug!("Persisting endpoint profile: {}", profile.endpoint_key_hash);
        Ok(self.store.save(profile).await?)
    }
}
