//! Foundation types for hashline.
//!
//! This crate provides the value types shared by the ledger and its
//! callers. The ledger crate depends on `hashline-types`; nothing here
//! depends back on the ledger.
//!
//! # Key Types
//!
//! - [`PayloadDigest`] — Content hash of a record payload (SHA-256, hex-encoded)
//! - [`Payload`] — Validated non-empty record payload
//! - [`Timestamp`] — Wall-clock milliseconds since the UNIX epoch

pub mod digest;
pub mod error;
pub mod payload;
pub mod temporal;

pub use digest::PayloadDigest;
pub use error::TypeError;
pub use payload::Payload;
pub use temporal::Timestamp;
