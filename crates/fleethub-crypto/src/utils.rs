//! Common utility functions shared across the fleethub crates.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in seconds.
///
/// This is the single source of truth for timestamp generation across the
/// fleethub system; stores use it to stamp `created_at` and `updated_at`.
///
/// # Panics
///
/// Panics if the system time is set before the Unix epoch (January 1, 1970).
/// This is extremely unlikely in production but can happen if the system
/// clock is misconfigured.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs()
}
