//! In-memory reference backends.
//!
//! These back the test suite and single-node deployments that do not need
//! durable storage. Both are seedable up front and safe for concurrent use.

use crate::errors::{CacheError, StoreError};
use crate::traits::{ControlCache, EndpointStore};
use crate::types::*;
use async_trait::async_trait;
use fleethub_crypto::{current_timestamp, ContentHash};
use fleethub_schema::SchemaDocument;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Seedable in-memory control cache
#[derive(Debug, Default)]
pub struct InMemoryControlCache {
    applications: RwLock<HashMap<String, ApplicationSequence>>,
    sdk_profiles: RwLock<HashMap<String, SdkProfile>>,
    schemas: RwLock<HashMap<(String, i32), SchemaDocument>>,
    mappings: RwLock<HashMap<String, EventFamilyMapping>>,
    family_ids: RwLock<HashMap<(String, String), String>>,
}

impl InMemoryControlCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed application sequence state, keyed by its application token
    pub async fn insert_application(&self, application: ApplicationSequence) {
        self.applications
            .write()
            .await
            .insert(application.application_token.clone(), application);
    }

    /// Seed an SDK profile, keyed by its SDK token
    pub async fn insert_sdk_profile(&self, sdk_profile: SdkProfile) {
        self.sdk_profiles
            .write()
            .await
            .insert(sdk_profile.sdk_token.clone(), sdk_profile);
    }

    /// Seed a profile schema for an application, keyed by its version
    pub async fn insert_profile_schema(&self, application_token: &str, schema: SchemaDocument) {
        self.schemas
            .write()
            .await
            .insert((application_token.to_string(), schema.version), schema);
    }

    /// Seed an event family mapping, keyed by its ID
    pub async fn insert_event_family_mapping(&self, mapping: EventFamilyMapping) {
        self.mappings.write().await.insert(mapping.id.clone(), mapping);
    }

    /// Register a tenant-scoped family name to family ID binding
    pub async fn insert_event_family_id(
        &self,
        tenant_id: &str,
        family_name: &str,
        family_id: &str,
    ) {
        self.family_ids.write().await.insert(
            (tenant_id.to_string(), family_name.to_string()),
            family_id.to_string(),
        );
    }
}

#[async_trait]
impl ControlCache for InMemoryControlCache {
    async fn application_sequence(
        &self,
        application_token: &str,
    ) -> Result<Option<ApplicationSequence>, CacheError> {
        Ok(self.applications.read().await.get(application_token).cloned())
    }

    async fn sdk_profile(&self, sdk_token: &str) -> Result<Option<SdkProfile>, CacheError> {
        Ok(self.sdk_profiles.read().await.get(sdk_token).cloned())
    }

    async fn profile_schema(
        &self,
        application_token: &str,
        version: i32,
    ) -> Result<Option<SchemaDocument>, CacheError> {
        Ok(self
            .schemas
            .read()
            .await
            .get(&(application_token.to_string(), version))
            .cloned())
    }

    async fn event_family_mappings(
        &self,
        ids: &[String],
    ) -> Result<Vec<EventFamilyMapping>, CacheError> {
        let mappings = self.mappings.read().await;
        Ok(ids.iter().filter_map(|id| mappings.get(id).cloned()).collect())
    }

    async fn event_family_id(
        &self,
        tenant_id: &str,
        family_name: &str,
    ) -> Result<Option<String>, CacheError> {
        Ok(self
            .family_ids
            .read()
            .await
            .get(&(tenant_id.to_string(), family_name.to_string()))
            .cloned())
    }
}

/// In-memory endpoint store with upsert-by-key-hash semantics.
///
/// Concurrent first registrations of the same key hash converge on a single
/// record: the later write wins, the ID assigned by the earlier one is kept.
#[derive(Debug, Default)]
pub struct InMemoryEndpointStore {
    profiles: RwLock<HashMap<ContentHash, EndpointProfile>>,
}

impl InMemoryEndpointStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// True when no records are stored
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl EndpointStore for InMemoryEndpointStore {
    async fn find_by_key_hash(
        &self,
        key_hash: &ContentHash,
    ) -> Result<Option<EndpointProfile>, StoreError> {
        Ok(self.profiles.read().await.get(key_hash).cloned())
    }

    async fn save(&self, mut profile: EndpointProfile) -> Result<EndpointProfile, StoreError> {
        let mut profiles = self.profiles.write().await;
        let now = current_timestamp();

        match profiles.get(&profile.endpoint_key_hash) {
            Some(existing) => {
                profile.id = existing.id;
                profile.created_at = existing.created_at;
            }
            None => {
                if profile.id.is_none() {
                    profile.id = Some(Uuid::new_v4());
                }
                profile.created_at = now;
            }
        }
        profile.updated_at = now;

        profiles.insert(profile.endpoint_key_hash, profile.clone());
        Ok(profile)
    }
}
