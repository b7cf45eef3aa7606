//! Conformance tests for the public docbin API
//!
//! Organized by contract:
//! - binary_contract: value semantics of Binary
//! - legacy_wire: byte-exact compatibility with the historical drivers
//! - codec_options: encoder/decoder dispatch and interpretation settings

mod binary_contract;
