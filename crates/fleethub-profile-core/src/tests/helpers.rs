//! Test helpers and fixtures for profile service tests.

use crate::*;
use ed25519_dalek::SigningKey;
use fleethub_crypto::ContentHash;
use fleethub_schema::{JsonProfileDecoder, SchemaDocument};
use serde_json::json;
use std::sync::Arc;

pub const APP_TOKEN: &str = "app1";
pub const APP_ID: &str = "application-1";
pub const TENANT_ID: &str = "t1";
pub const SDK_TOKEN: &str = "sdk1";

pub type TestRegistryService = ProfileRegistryService<
    InMemoryControlCache,
    InMemoryEndpointStore,
    JsonProfileDecoder,
    Ed25519Keystore,
>;

/// Seed the control-plane fixture: application `app1` under tenant `t1`,
/// SDK build `sdk1` at profile schema version 2, and one event family
/// mapping `efm1` -> family "location", registered for `t1` as `ecf-42`.
pub async fn seed_control_plane(cache: &InMemoryControlCache) {
    cache.insert_application(test_application()).await;
    cache.insert_sdk_profile(test_sdk_profile()).await;
    cache.insert_profile_schema(APP_TOKEN, test_schema()).await;
    cache
        .insert_event_family_mapping(EventFamilyMapping {
            id: "efm1".to_string(),
            family_name: "location".to_string(),
            version: 1,
        })
        .await;
    cache.insert_event_family_id(TENANT_ID, "location", "ecf-42").await;
}

pub fn test_application() -> ApplicationSequence {
    ApplicationSequence {
        application_id: APP_ID.to_string(),
        tenant_id: TENANT_ID.to_string(),
        application_token: APP_TOKEN.to_string(),
        seq_number: 42,
    }
}

pub fn test_sdk_profile() -> SdkProfile {
    SdkProfile {
        sdk_token: SDK_TOKEN.to_string(),
        profile_schema_version: 2,
        configuration_schema_version: 3,
        notification_schema_version: 4,
        log_schema_version: 5,
        event_family_map_ids: Some(vec!["efm1".to_string()]),
    }
}

pub fn test_schema() -> SchemaDocument {
    SchemaDocument::new(
        2,
        json!({
            "name": "BasicEndpointProfile",
            "fields": [
                { "name": "os", "type": "string" },
                { "name": "zone", "type": "string" },
                { "name": "build", "type": "int", "optional": true }
            ]
        }),
    )
}

/// Deterministic valid Ed25519 public-key bytes
pub fn test_endpoint_key(seed: u8) -> Vec<u8> {
    SigningKey::from_bytes(&[seed; 32])
        .verifying_key()
        .to_bytes()
        .to_vec()
}

pub fn test_payload() -> Vec<u8> {
    br#"{"os":"linux","zone":"eu-1","build":7}"#.to_vec()
}

pub fn register_request(key_seed: u8) -> RegisterProfileRequest {
    RegisterProfileRequest {
        application_token: APP_TOKEN.to_string(),
        sdk_token: SDK_TOKEN.to_string(),
        endpoint_key: test_endpoint_key(key_seed),
        profile: test_payload(),
        access_token: None,
    }
}

pub fn update_request(key_hash: ContentHash) -> UpdateProfileRequest {
    UpdateProfileRequest {
        application_token: APP_TOKEN.to_string(),
        endpoint_key_hash: key_hash,
        access_token: None,
        profile: test_payload(),
        sdk_token: SDK_TOKEN.to_string(),
    }
}

/// Build a service over the given collaborators with the reference decoder
pub fn build_service(
    cache: &Arc<InMemoryControlCache>,
    store: &Arc<InMemoryEndpointStore>,
    keystore: &Arc<Ed25519Keystore>,
    config: RegistryConfig,
) -> TestRegistryService {
    ProfileRegistryService::new(
        Arc::clone(cache),
        Arc::clone(store),
        Arc::new(JsonProfileDecoder::new()),
        Arc::clone(keystore),
        config,
    )
}

/// Fully seeded service over fresh in-memory backends
pub async fn create_test_service() -> (
    Arc<InMemoryControlCache>,
    Arc<InMemoryEndpointStore>,
    Arc<Ed25519Keystore>,
    TestRegistryService,
) {
    let cache = Arc::new(InMemoryControlCache::new());
    seed_control_plane(&cache).await;

    let store = Arc::new(InMemoryEndpointStore::new());
    let keystore = Arc::new(Ed25519Keystore::new());
    let service = build_service(&cache, &store, &keystore, RegistryConfig::default());

    (cache, store, keystore, service)
}
