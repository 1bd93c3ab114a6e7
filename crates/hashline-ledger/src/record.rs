use std::fmt;

use serde::{Deserialize, Serialize};

use hashline_types::{Payload, PayloadDigest, Timestamp, TypeError};

/// Stable handle to a record in its ledger's arena.
///
/// Handles are sequential append indices. They stay valid for the life
/// of the ledger: records are never removed or reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordHandle(usize);

impl RecordHandle {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in append order (0 = genesis).
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable unit of the chain.
///
/// Every field is fixed at construction except the successor link,
/// which the ledger sets exactly once when the following record is
/// appended. The digest covers the payload alone; `prev_digest` is
/// `None` only for the genesis record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    timestamp: Timestamp,
    payload: Payload,
    prev_digest: Option<PayloadDigest>,
    digest: PayloadDigest,
    next: Option<RecordHandle>,
}

impl Record {
    /// Construct a record from a raw payload string.
    ///
    /// Fails iff the payload is empty. The timestamp and previous
    /// digest are stored as given, unvalidated.
    pub fn new(
        timestamp: Timestamp,
        payload: &str,
        prev_digest: Option<PayloadDigest>,
    ) -> Result<Self, TypeError> {
        let payload = Payload::new(payload)?;
        let digest = PayloadDigest::of_payload(&payload);
        Ok(Self {
            timestamp,
            payload,
            prev_digest,
            digest,
            next: None,
        })
    }

    /// This record's content digest.
    pub fn digest(&self) -> PayloadDigest {
        self.digest
    }

    /// When the record was appended.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// The payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The predecessor's digest, or `None` for the genesis record.
    pub fn prev_digest(&self) -> Option<PayloadDigest> {
        self.prev_digest
    }

    /// Handle of the successor record, or `None` for the current tail.
    pub fn next(&self) -> Option<RecordHandle> {
        self.next
    }

    /// Returns `true` if this record has no predecessor.
    pub fn is_genesis(&self) -> bool {
        self.prev_digest.is_none()
    }

    // Linkage is owned by the ledger: set exactly once, at the moment
    // the successor is appended.
    pub(crate) fn set_next(&mut self, handle: RecordHandle) {
        self.next = Some(handle);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hash: {}, time: {}", self.digest, self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(millis: u64) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    #[test]
    fn construction_computes_payload_digest() {
        let record = Record::new(ts(1), "5645", None).unwrap();
        assert_eq!(
            record.digest().to_hex(),
            "dae469cdd7440d3ace7b3b51cb955c0642fe38ab1cd74d86573caf9e61409e6a"
        );
        assert!(record.is_genesis());
        assert!(record.next().is_none());
    }

    #[test]
    fn empty_payload_fails_construction() {
        let err = Record::new(ts(1), "", None).unwrap_err();
        assert_eq!(err, TypeError::EmptyPayload);
    }

    #[test]
    fn digest_ignores_timestamp_and_prev() {
        let other_prev = Some(PayloadDigest::of_bytes(b"elsewhere"));
        let a = Record::new(ts(1), "same", None).unwrap();
        let b = Record::new(ts(999), "same", other_prev).unwrap();
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn prev_digest_is_stored_as_given() {
        let prev = PayloadDigest::of_bytes(b"predecessor");
        let record = Record::new(ts(1), "data", Some(prev)).unwrap();
        assert_eq!(record.prev_digest(), Some(prev));
        assert!(!record.is_genesis());
    }

    #[test]
    fn display_contains_hash_and_time() {
        let record = Record::new(ts(1000), "data", None).unwrap();
        let rendered = format!("{record}");
        assert!(rendered.contains(&record.digest().to_hex()));
        assert!(rendered.contains("1000ms"));
    }

    #[test]
    fn handle_display_and_index() {
        let handle = RecordHandle::new(3);
        assert_eq!(handle.index(), 3);
        assert_eq!(format!("{handle}"), "#3");
    }

    #[test]
    fn serde_roundtrip() {
        let record = Record::new(ts(5), "payload", None).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
