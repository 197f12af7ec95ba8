//! Invoices service errors.

use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum InvoicesServiceError {
    #[error("invoice not found")]
    NotFound,

    #[error("invoice ids exhausted")]
    IdExhausted,

    #[error("invoice total is out of range")]
    TotalOverflow,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("failed to encode invoices")]
    Encode(#[from] serde_json::Error),
}
