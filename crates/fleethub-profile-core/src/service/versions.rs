//! Version-state population.

use super::ProfileRegistryService;
use crate::errors::*;
use crate::traits::*;
use crate::types::*;
use fleethub_schema::ProfileDecoder;
use tracing::warn;

impl<C, S, D, K> ProfileRegistryService<C, S, D, K>
where
    C: ControlCache + 'static,
    S: EndpointStore + 'static,
    D: ProfileDecoder + 'static,
    K: EndpointKeystore + 'static,
{
    /// Stamp `record` with the schema versions of `sdk_profile`.
    ///
    /// The four scalar versions are always copied. Event family states are
    /// rebuilt only when the SDK carries mapping IDs: each mapping's family
    /// name is resolved to a tenant-scoped family ID, unresolvable names are
    /// skipped with a warning, and the surviving states keep mapping order.
    /// An SDK without mapping IDs leaves the existing states untouched.
    pub(super) async fn populate_version_states(
        &self,
        tenant_id: &str,
        record: &mut EndpointProfile,
        sdk_profile: &SdkProfile,
    ) -> Result<()> {
        record.profile_version = sdk_profile.profile_schema_version;
        record.configuration_version = sdk_profile.configuration_schema_version;
        record.notification_version = sdk_profile.notification_schema_version;
        record.log_schema_version = sdk_profile.log_schema_version;

        if let Some(map_ids) = &sdk_profile.event_family_map_ids {
            let mappings = self.cache.event_family_mappings(map_ids).await?;

            let mut states = Vec::with_capacity(mappings.len());
            for mapping in mappings {
                match self
                    .cache
                    .event_family_id(tenant_id, &mapping.family_name)
                    .await?
                {
                    Some(family_id) => states.push(EventFamilyVersionState {
                        family_id,
                        version: mapping.version,
                    }),
                    None => {
                        warn!(
                            "Failed to add event family version state for family {} and version {}",
                            mapping.family_name, mapping.version
                        );
                    }
                }
            }
            record.event_family_states = states;
        }

        Ok(())
    }
}
