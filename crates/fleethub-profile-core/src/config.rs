//! Registry configuration.

use std::env;
use tracing::warn;

/// What happens to the `changed` flag when an existing record is updated.
///
/// Historically the flag was left untouched by updates, so `Preserve` is the
/// default. `Reset` clears it, treating every update as a clean re-baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangedFlagPolicy {
    /// Leave the flag as the stored record had it
    #[default]
    Preserve,
    /// Clear the flag on every update
    Reset,
}

/// Profile registry configuration
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Behavior of the `changed` flag on the update path
    pub changed_flag_on_update: ChangedFlagPolicy,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    ///
    /// `FLEETHUB_CHANGED_FLAG_ON_UPDATE` accepts `preserve` (default) or
    /// `reset`. Unrecognized values fall back to the default with a warning.
    pub fn from_env() -> Self {
        let changed_flag_on_update = match env::var("FLEETHUB_CHANGED_FLAG_ON_UPDATE") {
            Ok(value) => match value.to_ascii_lowercase().as_str() {
                "preserve" => ChangedFlagPolicy::Preserve,
                "reset" => ChangedFlagPolicy::Reset,
                other => {
                    warn!(
                        "Unrecognized FLEETHUB_CHANGED_FLAG_ON_UPDATE '{}', using default",
                        other
                    );
                    ChangedFlagPolicy::default()
                }
            },
            Err(_) => ChangedFlagPolicy::default(),
        };

        Self {
            changed_flag_on_update,
        }
    }
}
