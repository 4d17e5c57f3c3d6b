//! Profile service trait definitions.

use crate::errors::{CacheError, ProfileError, StoreError};
use crate::types::*;
use async_trait::async_trait;
use fleethub_crypto::{ContentHash, CryptoError, EndpointPublicKey};
use fleethub_schema::SchemaDocument;

/// Read side of the control plane the registration pipeline depends on.
///
/// Lookup misses are `Ok(None)`; the service decides which misses are fatal
/// to the operation. Errors are reserved for backend failures.
#[async_trait]
pub trait ControlCache: Send + Sync {
    /// Resolve application sequence state by application token
    async fn application_sequence(
        &self,
        application_token: &str,
    ) -> Result<Option<ApplicationSequence>, CacheError>;

    /// Resolve the schema versions bound to an SDK token
    async fn sdk_profile(&self, sdk_token: &str) -> Result<Option<SdkProfile>, CacheError>;

    /// Resolve the profile schema for an application at a specific version
    async fn profile_schema(
        &self,
        application_token: &str,
        version: i32,
    ) -> Result<Option<SchemaDocument>, CacheError>;

    /// Resolve event family mappings by ID.
    ///
    /// Implementations return the mappings that exist, in the order of the
    /// requested IDs; unknown IDs are silently dropped from the result.
    async fn event_family_mappings(
        &self,
        ids: &[String],
    ) -> Result<Vec<EventFamilyMapping>, CacheError>;

    /// Resolve an event class family name to its tenant-scoped family ID
    async fn event_family_id(
        &self,
        tenant_id: &str,
        family_name: &str,
    ) -> Result<Option<String>, CacheError>;
}

/// Persistence seam for endpoint profile records
#[async_trait]
pub trait EndpointStore: Send + Sync {
    /// Look up a record by its endpoint key hash
    async fn find_by_key_hash(
        &self,
        key_hash: &ContentHash,
    ) -> Result<Option<EndpointProfile>, StoreError>;

    /// Persist a record and return its canonical form.
    ///
    /// The store assigns `id` on first persist and maintains `created_at`
    /// and `updated_at`. A store enforcing unique first registration may
    /// return `StoreError::Conflict`, which callers surface unmodified.
    async fn save(&self, profile: EndpointProfile) -> Result<EndpointProfile, StoreError>;
}

/// Endpoint public-key derivation and caching.
///
/// Derivation is pure CPU work; caching makes the derived key available to
/// the verification paths of other subsystems.
#[async_trait]
pub trait EndpointKeystore: Send + Sync {
    /// Derive a validated public key from raw endpoint key bytes
    fn derive_public_key(&self, endpoint_key: &[u8]) -> Result<EndpointPublicKey, CryptoError>;

    /// Cache a derived key under its endpoint key hash
    async fn cache_public_key(
        &self,
        key_hash: ContentHash,
        public_key: EndpointPublicKey,
    ) -> Result<(), CacheError>;
}

/// Profile registration subsystem trait
#[async_trait]
pub trait ProfileRegistry: Send + Sync {
    /// Register an endpoint profile.
    ///
    /// Re-registration of an existing endpoint is equivalent to an update
    /// with the same inputs.
    async fn register_profile(
        &self,
        request: RegisterProfileRequest,
    ) -> Result<EndpointProfile, ProfileError>;

    /// Update an existing endpoint profile
    async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<EndpointProfile, ProfileError>;

    /// Look up a profile by endpoint key hash; absence is not an error here
    async fn find_profile(
        &self,
        key_hash: &ContentHash,
    ) -> Result<Option<EndpointProfile>, ProfileError>;

    /// Persist an already-populated record unchanged
    async fn persist_profile(
        &self,
        profile: EndpointProfile,
    ) -> Result<EndpointProfile, ProfileError>;
}
