//! Append-only, hash-linked record ledger.
//!
//! This crate is the heart of hashline. It provides:
//! - [`Record`] — immutable payload + timestamp unit, content-hashed and
//!   linked to its predecessor's digest
//! - [`Ledger`] — the single-writer, in-memory chain with append,
//!   digest search, and ordered traversal
//! - [`Clock`] — injectable time source ([`SystemClock`] by default,
//!   [`ManualClock`] for deterministic tests)
//! - [`ChainValidator`] — integrity re-check over the whole chain

pub mod clock;
pub mod error;
pub mod ledger;
pub mod record;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::LedgerError;
pub use ledger::{Ledger, RecordIter};
pub use record::{Record, RecordHandle};
pub use validation::{ChainValidator, ValidationReport, Violation, ViolationKind};
