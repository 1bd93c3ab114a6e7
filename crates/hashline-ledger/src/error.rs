use hashline_types::TypeError;

/// Errors produced by ledger operations.
///
/// The only validated precondition in the system is the non-empty
/// payload; everything else (previous digests, timestamps) is accepted
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] TypeError),
}
