//! Query service errors.
//!
//! The taxonomy is deliberately coarse: a single-entity lookup either found
//! nothing, or the store call itself failed — distinguished only by which
//! operation was attempted. Client-facing messages carry no internal detail.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for query operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Query service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A single-entity fetch found no matching document.
    #[error("Dealer not found")]
    DealerNotFound,

    /// The underlying store operation failed.
    #[error("{operation}")]
    Store {
        /// Generic client-facing message naming the attempted operation.
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub(super) fn store(operation: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { operation, source }
    }
}
