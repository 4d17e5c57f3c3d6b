//! # fleethub-crypto
//!
//! Content addressing and endpoint key material for the fleethub platform.
//!
//! Endpoints are identified by the SHA-256 digest of their raw public-key
//! bytes, and profile payloads are content-addressed the same way. This crate
//! owns the digest newtype and the validated Ed25519 public-key wrapper that
//! the registration pipeline builds on.
//!
//! ## Properties
//!
//! - Digests are deterministic: equal input bytes always address the same
//!   content
//! - Key material is validated at the boundary; an `EndpointPublicKey` only
//!   exists for bytes that decoded to a canonical curve point
//! - No unsafe code

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod utils;

pub use constants::*;
pub use errors::CryptoError;
pub use hashing::*;
pub use keys::*;
pub use utils::*;
