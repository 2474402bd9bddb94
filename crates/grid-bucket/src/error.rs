use thiserror::Error;

use grid_store::StoreError;

/// Errors from bucket and stream operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// An argument had the wrong semantic shape. Checked eagerly, before
    /// any store I/O.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// No version of the requested filename exists in the namespace.
    #[error("no file {filename:?} in namespace {namespace:?}")]
    NotFound { filename: String, namespace: String },

    /// A stream was used after close, or closed twice.
    #[error("invalid stream state: {0}")]
    InvalidState(&'static str),

    /// The chunk set fetched for a published version violates the
    /// contiguity or length invariants. Indicates a consistency violation
    /// in the external store.
    #[error("corrupt file {filename:?}: {reason}")]
    CorruptFile { filename: String, reason: String },

    /// Bucket configuration rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A store adapter call failed. Propagated, not retried.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for bucket operations.
pub type GridResult<T> = Result<T, GridError>;
