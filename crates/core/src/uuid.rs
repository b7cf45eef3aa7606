//! UUID byte-ordering schemes and codec
//!
//! Early drivers for the wire format disagreed on how to lay out the 16 bytes
//! of a UUID inside a binary field. Each convention is preserved here so that
//! payloads written by any of those drivers can be read back, and new payloads
//! can be written byte-for-byte identical to what a given driver would have
//! produced. Picking the wrong scheme does not fail; it silently yields a
//! different, equally valid-looking UUID. The scheme is therefore always an
//! explicit input at both encode and decode time.
//!
//! ## Contract
//!
//! These byte layouts are part of the wire format and MUST NOT change:
//! - `Standard`: subtype 4, canonical RFC 4122 big-endian bytes
//! - `PythonLegacy`: subtype 3, canonical bytes (the historic default before
//!   a dedicated standard subtype existed)
//! - `JavaLegacy`: subtype 3, each 8-byte half reversed (two big-endian
//!   longs read as little-endian)
//! - `CSharpLegacy`: subtype 3, first three GUID fields reversed
//!   (4 + 2 + 2 bytes), trailing 8 bytes untouched
//!
//! Every transform is its own inverse, so encode and decode under one scheme
//! apply the same permutation and `decode(encode(u, s), s) == u` for every
//! UUID `u` and scheme `s`.

use ::uuid::Uuid;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use thiserror::Error;

use crate::binary::Binary;

/// Byte-ordering scheme for UUID payloads
///
/// Determines both the subtype tag written to the wire and the permutation
/// applied to the UUID's canonical big-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UuidRepresentation {
    /// Canonical RFC 4122 byte order, written with subtype 4
    Standard,
    /// Canonical byte order written with the legacy subtype 3
    PythonLegacy,
    /// Legacy layout of the Java driver: both 8-byte halves reversed
    JavaLegacy,
    /// Legacy layout of the C# driver: mixed-endian GUID field order
    CSharpLegacy,
}

impl UuidRepresentation {
    /// The subtype tag this scheme writes
    pub const fn subtype(&self) -> u8 {
        match self {
            UuidRepresentation::Standard => Binary::UUID,
            UuidRepresentation::PythonLegacy
            | UuidRepresentation::JavaLegacy
            | UuidRepresentation::CSharpLegacy => Binary::UUID_LEGACY,
        }
    }

    /// Apply this scheme's byte permutation
    ///
    /// Maps canonical bytes to wire bytes. Every permutation here is an
    /// involution, so the same call also maps wire bytes back to canonical.
    fn permute(self, bytes: [u8; 16]) -> [u8; 16] {
        let mut out = bytes;
        match self {
            UuidRepresentation::Standard | UuidRepresentation::PythonLegacy => {}
            UuidRepresentation::JavaLegacy => {
                out[..8].reverse();
                out[8..].reverse();
            }
            UuidRepresentation::CSharpLegacy => {
                out[..4].reverse();
                out[4..6].reverse();
                out[6..8].reverse();
            }
        }
        out
    }
}

/// Map a UUID to its 16 wire bytes under the given scheme
///
/// Never fails: every UUID has a canonical 16-byte form and every scheme is a
/// total permutation of it.
pub fn uuid_to_bytes(value: Uuid, representation: UuidRepresentation) -> [u8; 16] {
    representation.permute(*value.as_bytes())
}

/// Reconstruct a UUID from 16 wire bytes under the given scheme
///
/// # Errors
///
/// Returns [`UuidError::InvalidLength`] unless `bytes` is exactly 16 bytes.
pub fn uuid_from_bytes(bytes: &[u8], representation: UuidRepresentation) -> Result<Uuid, UuidError> {
    let raw: [u8; 16] = bytes
        .try_into()
        .map_err(|_| UuidError::InvalidLength { actual: bytes.len() })?;
    Ok(Uuid::from_bytes(representation.permute(raw)))
}

/// Encode a UUID as a [`Binary`] field under the given scheme
///
/// The payload is the scheme's wire bytes and the subtype is the scheme's
/// tag (3 or 4).
pub fn encode_uuid(value: Uuid, representation: UuidRepresentation) -> Binary {
    Binary::new(
        uuid_to_bytes(value, representation).to_vec(),
        representation.subtype(),
    )
}

/// Decode a [`Binary`] payload back into a UUID under the given scheme
///
/// The binary's subtype is not consulted here: which payloads count as
/// UUID-bearing is the document decoder's decision (see [`crate::codec`]).
///
/// # Errors
///
/// Returns [`UuidError::InvalidLength`] unless the payload is exactly 16 bytes.
pub fn decode_uuid(binary: &Binary, representation: UuidRepresentation) -> Result<Uuid, UuidError> {
    uuid_from_bytes(binary.as_bytes(), representation)
}

/// UUID payload errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UuidError {
    /// Payload is not the size of a UUID
    #[error("UUID payload must be exactly 16 bytes, got {actual}")]
    InvalidLength {
        /// The rejected payload length
        actual: usize,
    },
}

/// A UUID bound to the scheme that must be used when encoding it
///
/// `TypedUuid` is an encoding-time hint only: decoding never produces one.
/// It lets a caller hold identifiers destined for different legacy layouts in
/// the same collection and still encode each one correctly.
///
/// ## Equality
///
/// Equality and hashing ignore the representation, and cross-type equality
/// with plain [`Uuid`] is provided in both directions, so a `TypedUuid` can
/// substitute for the bare UUID in equality-based matching:
///
/// ```
/// use docbin_core::{TypedUuid, Uuid, UuidRepresentation};
///
/// let id = Uuid::new_v4();
/// let typed = TypedUuid::new(id, UuidRepresentation::JavaLegacy);
/// assert_eq!(typed, id);
/// assert_eq!(id, typed);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TypedUuid {
    value: Uuid,
    representation: UuidRepresentation,
}

impl TypedUuid {
    /// Bind a UUID to an encoding scheme
    pub fn new(value: Uuid, representation: UuidRepresentation) -> Self {
        Self {
            value,
            representation,
        }
    }

    /// The UUID value
    pub fn value(&self) -> Uuid {
        self.value
    }

    /// The scheme used when this value is encoded
    pub fn representation(&self) -> UuidRepresentation {
        self.representation
    }

    /// Encode under the bound scheme
    pub fn encode(&self) -> Binary {
        encode_uuid(self.value, self.representation)
    }
}

// Representation is deliberately excluded: a TypedUuid stands in for its
// plain UUID in lookups. Hash must match, so it is manual as well.
impl PartialEq for TypedUuid {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for TypedUuid {}

impl Hash for TypedUuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialEq<Uuid> for TypedUuid {
    fn eq(&self, other: &Uuid) -> bool {
        self.value == *other
    }
}

impl PartialEq<TypedUuid> for Uuid {
    fn eq(&self, other: &TypedUuid) -> bool {
        *self == other.value
    }
}

impl From<TypedUuid> for Uuid {
    fn from(typed: TypedUuid) -> Self {
        typed.value
    }
}
