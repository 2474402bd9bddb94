use thiserror::Error;

/// Errors from store adapter operations.
///
/// Adapter failures are propagated to the caller, never retried here;
/// retry policy belongs to the adapter implementation or the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying document store could not be reached or rejected
    /// the call.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A document could not be encoded or decoded. The in-memory backends
    /// never produce this; it exists for adapters over real document
    /// stores, where records cross a serialization boundary.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
