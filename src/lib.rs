//! Docbin - tagged binary values and legacy UUID codecs for document serialization
//!
//! Docbin provides the value types a binary document format needs to carry
//! opaque payloads and UUIDs: a [`Binary`] value pairing bytes with a subtype
//! tag, the historical [`UuidRepresentation`] byte-ordering schemes, and the
//! encoder/decoder contract ([`BinaryValue`], [`CodecOptions`],
//! [`decode_binary`]) that keeps scheme selection explicit end to end.
//!
//! # Quick Start
//!
//! ```
//! use docbin::{decode_uuid, encode_uuid, Uuid, UuidRepresentation};
//!
//! let id = Uuid::new_v4();
//!
//! // Write the byte layout the Java driver would have produced
//! let field = encode_uuid(id, UuidRepresentation::JavaLegacy);
//! assert_eq!(field.subtype(), 3);
//!
//! // Reading it back requires declaring the same scheme
//! let back = decode_uuid(&field, UuidRepresentation::JavaLegacy)?;
//! assert_eq!(back, id);
//! # Ok::<(), docbin::UuidError>(())
//! ```
//!
//! # Architecture
//!
//! The real types live in `docbin-core`; this package re-exports its public
//! API unchanged. Scheme defaults are never global state: encoders and
//! decoders receive a caller-owned [`CodecOptions`] value per call.

// Re-export the public API from docbin-core
pub use docbin_core::*;
