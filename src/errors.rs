use thiserror::Error;

use crate::amount::AmountError;

/// Error type that captures common ledger failures.
///
/// Validation and lookup errors leave the ledger unchanged; callers that
/// surface them as a disabled control rather than a message lose nothing.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),
}
