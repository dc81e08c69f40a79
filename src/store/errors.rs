//! Document store errors.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named collection does not exist in this database.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// A collection lock was poisoned by a panicking writer.
    #[error("collection '{0}' is no longer accessible")]
    Poisoned(String),

    /// The document is not a JSON object.
    #[error("document is not a JSON object")]
    NotAnObject,

    /// A record could not be converted into the store's JSON form.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}
