//! Schema resolution and payload decoding.

use super::ProfileRegistryService;
use crate::errors::*;
use crate::traits::*;
use fleethub_schema::ProfileDecoder;
use serde_json::Value;
use tracing::trace;

impl<C, S, D, K> ProfileRegistryService<C, S, D, K>
where
    C: ControlCache + 'static,
    S: EndpointStore + 'static,
    D: ProfileDecoder + 'static,
    K: EndpointKeystore + 'static,
{
    /// Decode a raw payload against the application's schema at `schema_version`
    pub(super) async fn decode_profile(
        &self,
        raw: &[u8],
        application_token: &str,
        schema_version: i32,
    ) -> Result<Value> {
        trace!(
            "Looking up profile schema for application token: {} version: {}",
            application_token,
            schema_version
        );

        let schema = self
            .cache
            .profile_schema(application_token, schema_version)
            .await?
            .ok_or_else(|| ProfileError::SchemaNotFound {
                application_token: application_token.to_string(),
                version: schema_version,
            })?;

        let profile = self.decoder.decode(raw, &schema)?;
        trace!("Decoded profile: {}", profile);

        Ok(profile)
    }
}
