//! Core value types for the docbin document format
//!
//! This crate defines the leaf types a document encoder/decoder needs to
//! carry binary payloads and UUIDs faithfully on the wire:
//! - `Binary`: immutable byte payload with a one-byte subtype tag
//! - `UuidRepresentation`: the historical byte-ordering schemes for UUID
//!   payloads, preserved byte-for-byte
//! - `TypedUuid`: a UUID bound to the scheme it must be encoded with
//! - `BinaryValue` / `CodecOptions` / `decode_binary`: the contract a
//!   document encoder/decoder uses to dispatch on UUID-like values
//! - `Error`: error type hierarchy
//!
//! Everything here is an immutable value with pure operations and no global
//! state, so unrestricted concurrent use is safe without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod binary;
pub mod codec;
pub mod error;
pub mod uuid;

// Re-export commonly used types
pub use binary::{Binary, BinaryError};
pub use codec::{decode_binary, BinaryValue, CodecOptions, DecodedBinary};
pub use error::{Error, Result};
pub use self::uuid::{
    decode_uuid, encode_uuid, uuid_from_bytes, uuid_to_bytes, TypedUuid, UuidError,
    UuidRepresentation,
};

/// Re-exported so callers encode and decode against the same UUID type
/// without declaring their own dependency on the `uuid` crate.
pub use ::uuid::Uuid;
