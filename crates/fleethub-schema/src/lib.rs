//! # fleethub-schema
//!
//! Versioned profile schemas and the schema-bound decoder contract.
//!
//! Every SDK build is pinned to a profile schema version; the raw payload an
//! endpoint submits is only meaningful against the schema document registered
//! for its application at that version. This crate defines the document type,
//! the `ProfileDecoder` seam the registration pipeline calls through, and a
//! strict JSON reference decoder.
//!
//! Decoding is deterministic: the same raw bytes against the same schema
//! always produce the same structured value.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decoder;
pub mod errors;
pub mod types;

pub use decoder::{JsonProfileDecoder, ProfileDecoder};
pub use errors::DecodeError;
pub use types::SchemaDocument;
