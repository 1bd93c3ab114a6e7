use hashline_types::{PayloadDigest, Timestamp};

use crate::clock::{Clock, SystemClock};
use crate::error::LedgerError;
use crate::record::{Record, RecordHandle};

/// Append-only, hash-linked chain of records.
///
/// Records live in an arena in append order; successor links are
/// handles into the arena, so traversal order (head → tail, following
/// `next`) is always identical to append order. The ledger is the sole
/// owner of the chain topology: links are wired inside [`append`] and
/// never exposed for mutation.
///
/// Single writer, single reader. `append` takes `&mut self`, so
/// exclusive mutation is enforced by the borrow checker rather than a
/// lock.
///
/// [`append`]: Ledger::append
pub struct Ledger {
    records: Vec<Record>,
    created_at: Timestamp,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create an empty ledger stamped with the current wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty ledger with an injected time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        let created_at = clock.now();
        Self {
            records: Vec::new(),
            created_at,
            clock: Box::new(clock),
        }
    }

    /// Append a payload as a new record at the tail.
    ///
    /// Captures the current time, links the record to the current
    /// tail's digest (`None` when the ledger is empty), and wires the
    /// old tail's successor handle. Fails with
    /// [`LedgerError::InvalidPayload`] on an empty payload; validation
    /// happens before any link is touched, so a failed append leaves
    /// the ledger exactly as it was.
    pub fn append(&mut self, payload: &str) -> Result<RecordHandle, LedgerError> {
        let timestamp = self.clock.now();
        let prev_digest = self.records.last().map(Record::digest);
        let record = Record::new(timestamp, payload, prev_digest)?;

        let handle = RecordHandle::new(self.records.len());
        tracing::debug!(
            handle = %handle,
            digest = %record.digest().short_hex(),
            genesis = record.is_genesis(),
            "appending record"
        );

        if let Some(tail) = self.records.last_mut() {
            tail.set_next(handle);
        }
        self.records.push(record);
        Ok(handle)
    }

    /// Find the first record (in append order) with the given digest.
    ///
    /// Linear walk from the head following successor links; returns
    /// `None` when no record matches, including on an empty ledger.
    pub fn search(&self, target: &PayloadDigest) -> Option<&Record> {
        let mut cursor = self.head_handle();
        while let Some(handle) = cursor {
            let record = &self.records[handle.index()];
            if record.digest() == *target {
                return Some(record);
            }
            cursor = record.next();
        }
        None
    }

    /// The first record, or `None` when empty.
    pub fn head(&self) -> Option<&Record> {
        self.records.first()
    }

    /// The last record, or `None` when empty.
    pub fn tail(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Look up a record by handle.
    pub fn get(&self, handle: RecordHandle) -> Option<&Record> {
        self.records.get(handle.index())
    }

    /// Number of records in the chain.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the chain holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When this ledger was constructed.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Traverse the chain head → tail, following successor links.
    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            ledger: self,
            cursor: self.head_handle(),
        }
    }

    fn head_handle(&self) -> Option<RecordHandle> {
        if self.records.is_empty() {
            None
        } else {
            Some(RecordHandle::new(0))
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a ledger's records in traversal (append) order.
pub struct RecordIter<'a> {
    ledger: &'a Ledger,
    cursor: Option<RecordHandle>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<&'a Record> {
        let handle = self.cursor?;
        let record = self.ledger.get(handle)?;
        self.cursor = record.next();
        Some(record)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Record;
    type IntoIter = RecordIter<'a>;

    fn into_iter(self) -> RecordIter<'a> {
        self.iter()
    }
}
