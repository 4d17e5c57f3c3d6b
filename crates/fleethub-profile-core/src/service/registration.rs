//! Endpoint registration and update flows.

use super::ProfileRegistryService;
use crate::config::ChangedFlagPolicy;
use crate::errors::*;
use crate::traits::*;
use crate::types::*;
use fleethub_crypto::ContentHash;
use fleethub_schema::ProfileDecoder;
use tracing::{debug, error, info, trace};

impl<C, S, D, K> ProfileRegistryService<C, S, D, K>
where
    C: ControlCache + 'static,
    S: EndpointStore + 'static,
    D: ProfileDecoder + 'static,
    K: EndpointKeystore + 'static,
{
    pub(crate) async fn register_profile_internal(
        &self,
        request: RegisterProfileRequest,
    ) -> Result<EndpointProfile> {
        debug!(
            "Registering endpoint profile for application token: {}",
            request.application_token
        );

        trace!("Looking up application by token: {}", request.application_token);
        let application = self.require_application(&request.application_token).await?;
        trace!(
            "Application for token {}: {}",
            request.application_token,
            application.application_id
        );

        trace!("Looking up SDK profile by token: {}", request.sdk_token);
        let sdk_profile = self.require_sdk_profile(&request.sdk_token).await?;

        let profile = self
            .decode_profile(
                &request.profile,
                &application.application_token,
                sdk_profile.profile_schema_version,
            )
            .await?;

        let key_hash = ContentHash::of(&request.endpoint_key);

        match self.store.find_by_key_hash(&key_hash).await? {
            None => {
                self.create_profile(request, application, sdk_profile, profile, key_hash)
                    .await
            }
            Some(_) => {
                debug!("Endpoint {} already registered, applying update", key_hash);
                self.update_profile_internal(UpdateProfileRequest {
                    application_token: request.application_token,
                    endpoint_key_hash: key_hash,
                    access_token: request.access_token,
                    profile: request.profile,
                    sdk_token: request.sdk_token,
                })
                .await
            }
        }
    }

    pub(crate) async fn update_profile_internal(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<EndpointProfile> {
        debug!("Updating endpoint profile: {}", request.endpoint_key_hash);

        let mut record = self
            .store
            .find_by_key_hash(&request.endpoint_key_hash)
            .await?
            .ok_or(ProfileError::ProfileNotFound(request.endpoint_key_hash))?;

        let application = self.require_application(&request.application_token).await?;
        let sdk_profile = self.require_sdk_profile(&request.sdk_token).await?;

        let profile = self
            .decode_profile(
                &request.profile,
                &application.application_token,
                sdk_profile.profile_schema_version,
            )
            .await?;

        if let Some(access_token) = request.access_token {
            record.access_token = Some(access_token);
        }
        record.profile = profile;
        record.profile_hash = ContentHash::of(&request.profile);

        self.populate_version_states(&application.tenant_id, &mut record, &sdk_profile)
            .await?;

        record.config_group_states = Vec::new();
        record.config_sequence_number = 0;
        record.notification_group_states = Vec::new();
        record.notification_sequence_number = 0;

        match self.config.changed_flag_on_update {
            ChangedFlagPolicy::Preserve => {}
            ChangedFlagPolicy::Reset => record.changed = false,
        }

        Ok(self.store.save(record).await?)
    }

    /// Build and persist a brand-new endpoint record
    async fn create_profile(
        &self,
        request: RegisterProfileRequest,
        application: ApplicationSequence,
        sdk_profile: SdkProfile,
        profile: serde_json::Value,
        key_hash: ContentHash,
    ) -> Result<EndpointProfile> {
        let profile_hash = ContentHash::of(&request.profile);

        let mut record = EndpointProfile {
            id: None,
            endpoint_key: request.endpoint_key,
            endpoint_key_hash: key_hash,
            application_id: application.application_id.clone(),
            sdk_token: sdk_profile.sdk_token.clone(),
            access_token: request.access_token,
            profile,
            profile_hash,
            profile_version: 0,
            configuration_version: 0,
            notification_version: 0,
            log_schema_version: 0,
            event_family_states: Vec::new(),
            config_group_states: Vec::new(),
            notification_group_states: Vec::new(),
            config_sequence_number: 0,
            notification_sequence_number: 0,
            changed: false,
            created_at: 0,
            updated_at: 0,
        };

        self.populate_version_states(&application.tenant_id, &mut record, &sdk_profile)
            .await?;

        // Key material must be derivable before anything is persisted
        let public_key = match self.keystore.derive_public_key(&record.endpoint_key) {
            Ok(key) => key,
            Err(e) => {
                error!("Failed to derive public key for endpoint {}: {}", key_hash, e);
                return Err(e.into());
            }
        };
        self.keystore.cache_public_key(key_hash, public_key).await?;

        let saved = self.store.save(record).await?;
        info!("Endpoint profile registered: {}", key_hash);
        Ok(saved)
    }
}
