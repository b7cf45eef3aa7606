//! Tagged binary values
//!
//! This module defines [`Binary`], the payload type for binary document
//! fields. A `Binary` pairs raw bytes with a one-byte subtype tag that tells
//! readers what the payload means (generic bytes, legacy UUID, MD5 digest,
//! application-defined data, ...).
//!
//! ## Contract
//!
//! These rules are part of the wire format and MUST NOT change:
//! - The subtype is a single byte; valid values are 0..=255
//! - Equality compares payload AND subtype: `(b"x", 0) != (b"x", 128)`
//! - A `Binary` is never equal to a bare byte slice, even with subtype 0
//!   (no `PartialEq` against `[u8]` exists, and none may be added)
//! - Serialization preserves both fields exactly
//!
//! Payloads are bytes, not text: there is no conversion from string types.
//! Callers holding text must decide on an encoding themselves and pass the
//! resulting bytes explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// Immutable binary payload with a subtype tag
///
/// A `Binary` is constructed once and never mutated. It behaves as a
/// read-only byte sequence (via `Deref<Target = [u8]>`), so prefix tests,
/// slicing, and iteration all delegate to the underlying bytes:
///
/// ```
/// use docbin_core::Binary;
///
/// let field = Binary::new(b"hello world".to_vec(), Binary::GENERIC);
/// assert!(field.starts_with(b"hello"));
/// assert!(field.ends_with(b"world"));
/// assert_eq!(&field[..5], b"hello");
/// ```
///
/// ## Equality
///
/// Both fields participate: two values are equal iff the bytes and the
/// subtype match exactly. Hashing is consistent with equality, so `Binary`
/// is safe to use as a map key or set member.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binary {
    data: Vec<u8>,
    subtype: u8,
}

impl Binary {
    /// Generic binary payload (the default subtype)
    pub const GENERIC: u8 = 0x00;

    /// Function payload
    pub const FUNCTION: u8 = 0x01;

    /// Old-style generic binary
    pub const BINARY_OLD: u8 = 0x02;

    /// Legacy UUID; byte order depends on the driver that wrote it
    pub const UUID_LEGACY: u8 = 0x03;

    /// RFC 4122 UUID in canonical big-endian byte order
    pub const UUID: u8 = 0x04;

    /// MD5 digest
    pub const MD5: u8 = 0x05;

    /// Start of the application-defined subtype range
    pub const USER_DEFINED: u8 = 0x80;

    /// Create a binary value with the given payload and subtype
    pub fn new(data: impl Into<Vec<u8>>, subtype: u8) -> Self {
        Self {
            data: data.into(),
            subtype,
        }
    }

    /// Create a generic (subtype 0) binary value
    pub fn generic(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, Self::GENERIC)
    }

    /// Create a binary value from a payload and a subtype read as a wide integer
    ///
    /// The primary constructor takes `u8`, which makes out-of-range subtypes
    /// unrepresentable. This checked variant exists for callers whose subtype
    /// arrives as a wider integer (configuration files, dynamically-typed
    /// host bridges) and must be validated at the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::SubtypeOutOfRange`] if `subtype` is not in 0..=255.
    pub fn from_parts(data: Vec<u8>, subtype: i64) -> Result<Self, BinaryError> {
        let subtype =
            u8::try_from(subtype).map_err(|_| BinaryError::SubtypeOutOfRange { actual: subtype })?;
        Ok(Self::new(data, subtype))
    }

    /// Get the payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the subtype tag
    pub fn subtype(&self) -> u8 {
        self.subtype
    }

    /// Consume the value, releasing the payload
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Read-only byte-sequence behavior
///
/// Only `&[u8]` is ever exposed; the payload cannot be mutated through this.
impl Deref for Binary {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for Binary {
    fn from(data: Vec<u8>) -> Self {
        Self::generic(data)
    }
}

impl From<&[u8]> for Binary {
    fn from(data: &[u8]) -> Self {
        Self::generic(data.to_vec())
    }
}

impl From<Binary> for Vec<u8> {
    fn from(binary: Binary) -> Self {
        binary.data
    }
}

/// Deterministic representation: `Binary(b"<escaped payload>", <subtype>)`
///
/// The payload is printed with ASCII escaping (`\xNN` for non-printable
/// bytes), so the output is stable and safe for test assertions and logs.
impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Binary(b\"{}\", {})",
            self.data.escape_ascii(),
            self.subtype
        )
    }
}

/// Binary construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BinaryError {
    /// Subtype does not fit in a single byte
    #[error("subtype out of range: {actual} is not in 0..=255")]
    SubtypeOutOfRange {
        /// The rejected subtype value
        actual: i64,
    },
}
