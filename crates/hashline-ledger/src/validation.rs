use hashline_types::PayloadDigest;

use crate::ledger::Ledger;
use crate::record::Record;

/// Result of a chain integrity check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub record_count: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if every check passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific integrity violation detected during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Append-order index of the offending record.
    pub index: usize,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// The genesis record carries a previous digest.
    GenesisHasPrevDigest,
    /// A non-genesis record carries no previous digest.
    MissingPrevDigest,
    /// A record's previous digest does not match its predecessor.
    BrokenLink,
    /// A record's stored digest does not match its payload.
    DigestMismatch,
}

/// Chain integrity validator.
///
/// Checks:
/// 1. The genesis record has no previous digest
/// 2. Each subsequent record's previous digest matches its immediate
///    predecessor's digest
/// 3. Each record's stored digest still matches its payload
///
/// An empty chain is valid. Note that the digest covers the payload
/// alone, so a record whose payload was swapped for another payload's
/// exact text is indistinguishable from the original; tamper detection
/// is as strong as the digest input, no stronger.
pub struct ChainValidator;

impl ChainValidator {
    /// Validate a ledger's full chain in traversal order.
    pub fn validate(ledger: &Ledger) -> ValidationReport {
        let records: Vec<&Record> = ledger.iter().collect();
        Self::validate_records(&records)
    }

    /// Validate any sequence of records as a chain.
    pub fn validate_records(records: &[&Record]) -> ValidationReport {
        let mut violations = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let expected_prev = if index == 0 {
                None
            } else {
                Some(records[index - 1].digest())
            };

            match (record.prev_digest(), expected_prev) {
                (None, None) => {}
                (Some(_), None) => violations.push(Violation {
                    index,
                    kind: ViolationKind::GenesisHasPrevDigest,
                    description: "genesis record has a previous digest".into(),
                }),
                (None, Some(_)) => violations.push(Violation {
                    index,
                    kind: ViolationKind::MissingPrevDigest,
                    description: "record has no previous digest".into(),
                }),
                (Some(prev), Some(expected)) if prev != expected => {
                    violations.push(Violation {
                        index,
                        kind: ViolationKind::BrokenLink,
                        description: "previous digest does not match predecessor".into(),
                    })
                }
                _ => {}
            }

            let computed = PayloadDigest::of_payload(record.payload());
            if computed != record.digest() {
                violations.push(Violation {
                    index,
                    kind: ViolationKind::DigestMismatch,
                    description: "stored digest does not match payload".into(),
                });
            }
        }

        for violation in &violations {
            tracing::warn!(
                index = violation.index,
                kind = ?violation.kind,
                "chain integrity violation"
            );
        }

        ValidationReport {
            record_count: records.len(),
            violations,
        }
    }
}
