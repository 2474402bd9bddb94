use grid_types::Namespace;

use crate::error::{GridError, GridResult};

/// Default chunk size: 256 KiB.
pub const DEFAULT_CHUNK_SIZE: u32 = 256 * 1024;

/// Configuration for a [`Bucket`](crate::Bucket).
///
/// The namespace is the default partition for operations that do not name
/// one explicitly; the chunk size is the fixed carving boundary recorded
/// on every version this bucket publishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketConfig {
    /// Default namespace for open/list/remove.
    pub namespace: Namespace,
    /// Fixed chunk size in bytes for new versions.
    pub chunk_size: u32,
}

impl BucketConfig {
    /// Replace the default namespace.
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// Replace the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Reject configurations the chunking protocol cannot operate with.
    pub fn validate(&self) -> GridResult<()> {
        if self.chunk_size == 0 {
            return Err(GridError::InvalidConfig("chunk_size must be non-zero".into()));
        }
        Ok(())
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            namespace: Namespace::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BucketConfig::default();
        assert_eq!(config.namespace.as_str(), "fs");
        assert_eq!(config.chunk_size, 256 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = BucketConfig::default()
            .with_namespace(Namespace::new("alt").unwrap())
            .with_chunk_size(16);
        assert_eq!(config.namespace.as_str(), "alt");
        assert_eq!(config.chunk_size, 16);
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let config = BucketConfig::default().with_chunk_size(0);
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidConfig(_))
        ));
    }
}
