//! Endpoint profile entities and request types.

use fleethub_crypto::ContentHash;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted endpoint profile record.
///
/// `endpoint_key` and `endpoint_key_hash` are set once at creation and never
/// replaced; everything else is rewritten by the update path. `id`,
/// `created_at` and `updated_at` belong to the store, which returns the
/// canonical record from `save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointProfile {
    /// Store-assigned record ID; `None` until first persisted
    pub id: Option<Uuid>,
    /// Raw public-key bytes exactly as the endpoint submitted them
    pub endpoint_key: Vec<u8>,
    /// SHA-256 of `endpoint_key`; the primary lookup key
    pub endpoint_key_hash: ContentHash,
    /// Owning application
    pub application_id: String,
    /// SDK build that produced this endpoint
    pub sdk_token: String,
    /// Optional opaque token; overwritten whenever a request supplies one
    pub access_token: Option<String>,
    /// Decoded profile content
    pub profile: serde_json::Value,
    /// SHA-256 of the raw (pre-decode) profile payload
    pub profile_hash: ContentHash,
    /// Profile schema version the payload decoded against
    pub profile_version: i32,
    /// Configuration schema version active at submission
    pub configuration_version: i32,
    /// Notification schema version active at submission
    pub notification_version: i32,
    /// Log schema version active at submission
    pub log_schema_version: i32,
    /// Resolved event family versions, mapping order preserved
    pub event_family_states: Vec<EventFamilyVersionState>,
    /// Configuration group membership
    pub config_group_states: Vec<GroupState>,
    /// Notification group membership
    pub notification_group_states: Vec<GroupState>,
    /// Configuration delivery sequence number
    pub config_sequence_number: i32,
    /// Notification delivery sequence number
    pub notification_sequence_number: i32,
    /// Dirty marker consumed by downstream delivery
    pub changed: bool,
    /// Creation time (unix seconds), store-maintained
    pub created_at: u64,
    /// Last update time (unix seconds), store-maintained
    pub updated_at: u64,
}

/// Event family version pinned at registration time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFamilyVersionState {
    /// Tenant-scoped event class family ID
    pub family_id: String,
    /// Family version the SDK was built against
    pub version: i32,
}

/// Delivery group membership entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    /// Group ID
    pub group_id: String,
    /// Profile hash the group matched on, if any
    pub profile_hash: Option<ContentHash>,
    /// Configuration hash last delivered for the group, if any
    pub configuration_hash: Option<ContentHash>,
}

/// Application sequence state resolved by application token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSequence {
    /// Application ID
    pub application_id: String,
    /// Owning tenant
    pub tenant_id: String,
    /// Token endpoints present on the wire
    pub application_token: String,
    /// Current application sequence number
    pub seq_number: i32,
}

/// Schema versions a specific SDK build was generated against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkProfile {
    /// SDK token identifying the build
    pub sdk_token: String,
    /// Profile schema version
    pub profile_schema_version: i32,
    /// Configuration schema version
    pub configuration_schema_version: i32,
    /// Notification schema version
    pub notification_schema_version: i32,
    /// Log schema version
    pub log_schema_version: i32,
    /// Event family mapping IDs baked into the build; `None` when the build
    /// carries no event support at all
    pub event_family_map_ids: Option<Vec<String>>,
}

/// Application-scoped event family mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFamilyMapping {
    /// Mapping ID
    pub id: String,
    /// Event class family name, resolved per tenant
    pub family_name: String,
    /// Family version
    pub version: i32,
}

/// Request to register an endpoint profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterProfileRequest {
    /// Application token from the wire
    pub application_token: String,
    /// SDK token of the submitting build
    pub sdk_token: String,
    /// Raw endpoint public-key bytes
    pub endpoint_key: Vec<u8>,
    /// Raw schema-encoded profile payload
    pub profile: Vec<u8>,
    /// Optional access token to attach
    pub access_token: Option<String>,
}

/// Request to update an existing endpoint profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Application token from the wire
    pub application_token: String,
    /// Key hash of the endpoint being updated
    pub endpoint_key_hash: ContentHash,
    /// Optional access token to attach
    pub access_token: Option<String>,
    /// Raw schema-encoded profile payload
    pub profile: Vec<u8>,
    /// SDK token of the submitting build
    pub sdk_token: String,
}
