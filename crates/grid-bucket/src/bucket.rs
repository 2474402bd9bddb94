use std::sync::Arc;

use tracing::debug;

use grid_store::{ChunkStore, FileStore};
use grid_types::Namespace;

use crate::config::BucketConfig;
use crate::criterion::Criterion;
use crate::error::{GridError, GridResult};
use crate::reader::FileReader;
use crate::writer::FileWriter;

/// How a file should be opened.
///
/// Defaults to `Read`, matching the convention that a plain open is a
/// read of the latest version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Resolve and read the latest version.
    #[default]
    Read,
    /// Create a new version, published at close.
    Write,
}

/// Handle returned by [`Bucket::open`].
#[derive(Debug)]
pub enum FileHandle {
    Read(FileReader),
    Write(FileWriter),
}

impl FileHandle {
    /// Unwrap a read handle.
    pub fn into_reader(self) -> Option<FileReader> {
        match self {
            FileHandle::Read(reader) => Some(reader),
            FileHandle::Write(_) => None,
        }
    }

    /// Unwrap a write handle.
    pub fn into_writer(self) -> Option<FileWriter> {
        match self {
            FileHandle::Write(writer) => Some(writer),
            FileHandle::Read(_) => None,
        }
    }
}

/// The public surface of the chunked storage layer.
///
/// A bucket composes a metadata store and a chunk store into file-like
/// open/list/remove operations. It holds no mutable state of its own and
/// performs no in-process locking: handles opened from the same bucket may
/// be used concurrently from independent threads, and correctness comes
/// from the append-only, publish-on-close data model.
pub struct Bucket {
    files: Arc<dyn FileStore>,
    chunks: Arc<dyn ChunkStore>,
    config: BucketConfig,
}

impl Bucket {
    /// Create a bucket with the default configuration (namespace `fs`,
    /// 256 KiB chunks).
    pub fn new(files: Arc<dyn FileStore>, chunks: Arc<dyn ChunkStore>) -> Self {
        Self {
            files,
            chunks,
            config: BucketConfig::default(),
        }
    }

    /// Create a bucket with an explicit configuration.
    pub fn with_config(
        files: Arc<dyn FileStore>,
        chunks: Arc<dyn ChunkStore>,
        config: BucketConfig,
    ) -> GridResult<Self> {
        config.validate()?;
        Ok(Self {
            files,
            chunks,
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &BucketConfig {
        &self.config
    }

    fn resolve_ns<'a>(&'a self, ns: Option<&'a Namespace>) -> &'a Namespace {
        ns.unwrap_or(&self.config.namespace)
    }

    fn check_filename(filename: &str) -> GridResult<()> {
        if filename.is_empty() {
            return Err(GridError::TypeMismatch("filename must not be empty".into()));
        }
        Ok(())
    }

    /// Open `filename` in the given mode, under `ns` or the default
    /// namespace.
    ///
    /// `Mode::Write` never errors on a missing prior file — it always
    /// creates a new version. `Mode::Read` resolves the latest version and
    /// fails with `NotFound` if none exists.
    pub fn open(
        &self,
        filename: &str,
        mode: Mode,
        ns: Option<&Namespace>,
    ) -> GridResult<FileHandle> {
        match mode {
            Mode::Read => self.open_read(filename, ns).map(FileHandle::Read),
            Mode::Write => self.open_write(filename, ns).map(FileHandle::Write),
        }
    }

    /// Open the latest version of `filename` for reading.
    ///
    /// Resolution picks the version with the greatest upload stamp, ties
    /// broken by greatest id.
    pub fn open_read(&self, filename: &str, ns: Option<&Namespace>) -> GridResult<FileReader> {
        Self::check_filename(filename)?;
        let ns = self.resolve_ns(ns);
        let record = self
            .files
            .find_latest(ns, filename)?
            .ok_or_else(|| GridError::NotFound {
                filename: filename.to_string(),
                namespace: ns.as_str().to_string(),
            })?;
        debug!(
            filename,
            namespace = %ns,
            id = %record.id,
            "resolved latest version"
        );
        Ok(FileReader::new(record, Arc::clone(&self.chunks)))
    }

    /// Open a write stream for a new version of `filename`.
    ///
    /// No store activity occurs until the returned writer is closed.
    pub fn open_write(&self, filename: &str, ns: Option<&Namespace>) -> GridResult<FileWriter> {
        Self::check_filename(filename)?;
        let ns = self.resolve_ns(ns);
        Ok(FileWriter::new(
            filename.to_string(),
            ns.clone(),
            self.config.chunk_size,
            Arc::clone(&self.files),
            Arc::clone(&self.chunks),
        ))
    }

    /// Distinct filenames present in the namespace.
    ///
    /// Order is the store's natural iteration order — the creation order
    /// of each name's first appearance — not alphabetical.
    pub fn list(&self, ns: Option<&Namespace>) -> GridResult<Vec<String>> {
        let ns = self.resolve_ns(ns);
        Ok(self.files.distinct_filenames(ns)?)
    }

    /// Remove every version matched by the criterion, cascading to chunks.
    ///
    /// For each matched metadata record, the chunks are deleted by owner
    /// first, then the metadata records themselves. A criterion matching
    /// nothing is a no-op, not an error. Returns the number of versions
    /// removed.
    pub fn remove(&self, criterion: Criterion, ns: Option<&Namespace>) -> GridResult<u64> {
        let ns = self.resolve_ns(ns);
        let filter = criterion.into_filter();

        let matched = self.files.find_by_filter(ns, &filter)?;
        for record in &matched {
            self.chunks.delete_by_owner(ns, &record.id)?;
        }
        let removed = self.files.delete_by_filter(ns, &filter)?;

        debug!(namespace = %ns, removed, "versions removed");
        Ok(removed)
    }

    /// Parse a dynamically-typed criterion and remove its matches.
    ///
    /// A JSON string removes all versions of that filename, a JSON object
    /// is a structural filter (`{}` removes everything in the namespace),
    /// and any other shape fails with `TypeMismatch` before touching
    /// storage.
    pub fn remove_json(
        &self,
        criterion: &serde_json::Value,
        ns: Option<&Namespace>,
    ) -> GridResult<u64> {
        let criterion = Criterion::try_from(criterion)?;
        self.remove(criterion, ns)
    }
}

impl std::fmt::Debug for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bucket")
            .field("config", &self.config)
            .finish()
    }
}
