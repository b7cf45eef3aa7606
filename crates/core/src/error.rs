//! Error types for the docbin core
//!
//! Each module raises its own narrow error type at the point of the failing
//! call; this module aggregates them for callers that handle the crate as a
//! whole. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! There are no retryable or partial-failure conditions: every operation in
//! this crate is synchronous and pure, and either fully succeeds or fails
//! immediately with one of the variants below. Nothing is caught or
//! suppressed internally, and nothing is logged: failures are signaled
//! solely through the returned error.

use crate::binary::BinaryError;
use crate::uuid::UuidError;
use thiserror::Error;

/// Result type alias for docbin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid tagged-binary construction
    #[error("invalid binary value: {0}")]
    Binary(#[from] BinaryError),

    /// Invalid UUID payload
    #[error("invalid UUID payload: {0}")]
    Uuid(#[from] UuidError),

    /// Serialization/deserialization error from a host persistence layer
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
