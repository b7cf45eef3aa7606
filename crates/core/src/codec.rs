//! Encoder/decoder contract for UUID-bearing binary fields
//!
//! A document encoder never probes values for UUID-ness at runtime. It
//! dispatches over the closed set in [`BinaryValue`]: a plain [`Uuid`] is
//! encoded with the scheme configured in [`CodecOptions`], a [`TypedUuid`]
//! carries its own scheme, and a raw [`Binary`] passes through unchanged.
//! Anything else in the host's value universe is not this module's concern.
//!
//! On the decode side, a subtype 3 or 4 payload is only turned back into a
//! UUID when the caller has explicitly enabled interpretation. The bytes of a
//! legacy payload cannot reveal which driver wrote them, so the scheme is
//! declared out-of-band in the options, never inferred.
//!
//! There is no global default anywhere: options are a plain value the caller
//! owns and threads through each call, so behavior is deterministic and
//! testable with no setup or teardown ordering.

use ::uuid::Uuid;

use crate::binary::Binary;
use crate::uuid::{decode_uuid, encode_uuid, TypedUuid, UuidError, UuidRepresentation};

/// Caller-owned codec configuration
///
/// Carries the two scheme selections the document encoder and decoder need.
/// The default keeps the historic writer behavior (legacy subtype 3 on
/// encode, no interpretation on decode) so installations reading data
/// produced by old drivers keep working without configuration. New
/// deployments should use [`CodecOptions::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Scheme used when encoding a plain [`Uuid`]
    pub uuid_representation: UuidRepresentation,
    /// Scheme for decoding subtype 3 and 4 payloads; `None` leaves them
    /// as raw [`Binary`] values
    pub interpret_uuids: Option<UuidRepresentation>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            uuid_representation: UuidRepresentation::PythonLegacy,
            interpret_uuids: None,
        }
    }
}

impl CodecOptions {
    /// Options for new deployments: standard layout on both sides
    pub fn standard() -> Self {
        Self {
            uuid_representation: UuidRepresentation::Standard,
            interpret_uuids: Some(UuidRepresentation::Standard),
        }
    }

    /// Replace the encode-time scheme for plain UUIDs
    pub fn with_uuid_representation(mut self, representation: UuidRepresentation) -> Self {
        self.uuid_representation = representation;
        self
    }

    /// Enable decode-time interpretation with the given scheme
    pub fn with_interpretation(mut self, representation: UuidRepresentation) -> Self {
        self.interpret_uuids = Some(representation);
        self
    }
}

/// The closed set of value shapes the encoder treats as binary-typed
///
/// This replaces runtime attribute probing: the host encoder converts any
/// value it recognizes as UUID-like into one of these variants and calls
/// [`BinaryValue::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryValue {
    /// Plain UUID, encoded with the options' scheme
    Uuid(Uuid),
    /// UUID carrying its own scheme
    Typed(TypedUuid),
    /// Raw payload, written through unchanged
    Binary(Binary),
}

impl BinaryValue {
    /// Produce the wire-ready [`Binary`] for this value
    pub fn encode(&self, options: &CodecOptions) -> Binary {
        match self {
            BinaryValue::Uuid(value) => encode_uuid(*value, options.uuid_representation),
            BinaryValue::Typed(typed) => typed.encode(),
            BinaryValue::Binary(binary) => binary.clone(),
        }
    }
}

impl From<Uuid> for BinaryValue {
    fn from(value: Uuid) -> Self {
        BinaryValue::Uuid(value)
    }
}

impl From<TypedUuid> for BinaryValue {
    fn from(typed: TypedUuid) -> Self {
        BinaryValue::Typed(typed)
    }
}

impl From<Binary> for BinaryValue {
    fn from(binary: Binary) -> Self {
        BinaryValue::Binary(binary)
    }
}

/// Result of decoding a binary field
///
/// Decoding never produces a [`TypedUuid`]: a recognized payload becomes a
/// plain UUID, everything else stays a raw [`Binary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedBinary {
    /// A UUID reconstructed under the configured interpretation scheme
    Uuid(Uuid),
    /// The raw field, returned unchanged
    Binary(Binary),
}

/// Decode a binary field according to the configured interpretation
///
/// With `interpret_uuids: None`, every payload, including subtypes 3 and 4,
/// comes back as [`DecodedBinary::Binary`], untouched. With a scheme
/// configured, subtype 3 and 4 payloads are decoded under it (subtype 4 is
/// conventionally paired with [`UuidRepresentation::Standard`], but the
/// declared scheme always wins); all other subtypes still pass through raw.
///
/// # Errors
///
/// Returns [`UuidError::InvalidLength`] when interpretation is enabled and a
/// subtype 3 or 4 payload is not exactly 16 bytes.
pub fn decode_binary(
    binary: Binary,
    options: &CodecOptions,
) -> Result<DecodedBinary, UuidError> {
    match options.interpret_uuids {
        Some(representation)
            if matches!(binary.subtype(), Binary::UUID_LEGACY | Binary::UUID) =>
        {
            Ok(DecodedBinary::Uuid(decode_uuid(&binary, representation)?))
        }
        _ => Ok(DecodedBinary::Binary(binary)),
    }
}
