use thiserror::Error;

/// Errors from constructing or parsing foundation types.
#[derive(Debug, Error)]
pub enum TypeError {
    /// The string is not a valid file identifier.
    #[error("invalid file id {input:?}: {source}")]
    InvalidFileId {
        input: String,
        source: uuid::Error,
    },

    /// The namespace name is empty or contains a reserved character.
    #[error("invalid namespace {0:?}")]
    InvalidNamespace(String),
}
