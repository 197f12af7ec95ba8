//! Products service errors.

use thiserror::Error;

use crate::{codec::CodecError, storage::StoreError};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("CSV error: {0}")]
    Codec(#[from] CodecError),
}
