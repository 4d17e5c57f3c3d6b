//! # fleethub-profile-core
//!
//! Endpoint profile registration and versioning.
//!
//! Devices (endpoints) submit schema-encoded profile payloads. This subsystem
//! is responsible for:
//! - Content-addressed endpoint identity (SHA-256 of the public-key bytes)
//! - Idempotent register-vs-update branching on the key hash
//! - Binding each record to the schema versions active at submission time
//!   (profile, configuration, notification, log, event families)
//! - Resetting delivery sequence numbers so downstream configuration and
//!   notification subsystems re-baseline after a profile change

#![warn(clippy::all)]

pub mod config;
pub mod errors;
pub mod keystore;
pub mod memory;
pub mod service;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{ChangedFlagPolicy, RegistryConfig};
pub use errors::{CacheError, ProfileError, Result, StoreError};
pub use keystore::Ed25519Keystore;
pub use memory::{InMemoryControlCache, InMemoryEndpointStore};
pub use service::ProfileRegistryService;
pub use traits::{ControlCache, EndpointKeystore, EndpointStore, ProfileRegistry};
pub use types::*;
