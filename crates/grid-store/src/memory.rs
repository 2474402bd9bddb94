use std::collections::HashMap;
use std::sync::RwLock;

use grid_types::{ChunkRecord, FileId, FileRecord, Namespace};

use crate::error::StoreResult;
use crate::filter::FileFilter;
use crate::traits::{ChunkStore, FileStore};

/// In-memory metadata store for tests and embedding.
///
/// Records are kept in insertion order behind a `RwLock`, which preserves
/// the natural iteration order `distinct_filenames` is specified against.
/// Records are cloned on read.
pub struct InMemoryFileStore {
    records: RwLock<Vec<FileRecord>>,
}

impl InMemoryFileStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Total number of records across all namespaces.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for InMemoryFileStore {
    fn insert(&self, record: &FileRecord) -> StoreResult<FileId> {
        let mut records = self.records.write().expect("lock poisoned");
        records.push(record.clone());
        Ok(record.id)
    }

    fn find_latest(&self, ns: &Namespace, filename: &str) -> StoreResult<Option<FileRecord>> {
        let records = self.records.read().expect("lock poisoned");
        let latest = records
            .iter()
            .filter(|r| &r.namespace == ns && r.filename == filename)
            .max_by_key(|r| (r.uploaded_at, r.id))
            .cloned();
        Ok(latest)
    }

    fn find_by_filter(&self, ns: &Namespace, filter: &FileFilter) -> StoreResult<Vec<FileRecord>> {
        let records = self.records.read().expect("lock poisoned");
        Ok(records
            .iter()
            .filter(|r| &r.namespace == ns && filter.matches(r))
            .cloned()
            .collect())
    }

    fn delete_by_filter(&self, ns: &Namespace, filter: &FileFilter) -> StoreResult<u64> {
        let mut records = self.records.write().expect("lock poisoned");
        let before = records.len();
        records.retain(|r| !(&r.namespace == ns && filter.matches(r)));
        let removed = (before - records.len()) as u64;
        tracing::trace!(namespace = %ns, removed, "metadata records deleted");
        Ok(removed)
    }

    fn distinct_filenames(&self, ns: &Namespace) -> StoreResult<Vec<String>> {
        let records = self.records.read().expect("lock poisoned");
        let mut names = Vec::new();
        for record in records.iter().filter(|r| &r.namespace == ns) {
            if !names.contains(&record.filename) {
                names.push(record.filename.clone());
            }
        }
        Ok(names)
    }

    fn count_by_filter(&self, ns: &Namespace, filter: &FileFilter) -> StoreResult<u64> {
        let records = self.records.read().expect("lock poisoned");
        Ok(records
            .iter()
            .filter(|r| &r.namespace == ns && filter.matches(r))
            .count() as u64)
    }
}

impl std::fmt::Debug for InMemoryFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryFileStore")
            .field("record_count", &self.len())
            .finish()
    }
}

/// In-memory chunk store for tests and embedding.
///
/// Chunks are indexed by `(namespace, owner)` behind a `RwLock` and sorted
/// by sequence number on read.
pub struct InMemoryChunkStore {
    chunks: RwLock<HashMap<(Namespace, FileId), Vec<ChunkRecord>>>,
}

impl InMemoryChunkStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            chunks: RwLock::new(HashMap::new()),
        }
    }

    /// Total number of chunk documents across all owners and namespaces.
    pub fn len(&self) -> usize {
        self.chunks
            .read()
            .expect("lock poisoned")
            .values()
            .map(Vec::len)
            .sum()
    }

    /// Returns `true` if the store holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total payload bytes across all stored chunks.
    pub fn total_bytes(&self) -> u64 {
        self.chunks
            .read()
            .expect("lock poisoned")
            .values()
            .flatten()
            .map(|c| c.len() as u64)
            .sum()
    }

    /// Remove all chunks from the store.
    pub fn clear(&self) {
        self.chunks.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryChunkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkStore for InMemoryChunkStore {
    fn insert(&self, ns: &Namespace, chunk: &ChunkRecord) -> StoreResult<()> {
        let mut chunks = self.chunks.write().expect("lock poisoned");
        chunks
            .entry((ns.clone(), chunk.owner))
            .or_default()
            .push(chunk.clone());
        Ok(())
    }

    fn find_by_owner(&self, ns: &Namespace, owner: &FileId) -> StoreResult<Vec<ChunkRecord>> {
        let chunks = self.chunks.read().expect("lock poisoned");
        let mut owned = chunks
            .get(&(ns.clone(), *owner))
            .cloned()
            .unwrap_or_default();
        owned.sort_by_key(|c| c.seq);
        Ok(owned)
    }

    fn delete_by_owner(&self, ns: &Namespace, owner: &FileId) -> StoreResult<u64> {
        let mut chunks = self.chunks.write().expect("lock poisoned");
        let removed = chunks
            .remove(&(ns.clone(), *owner))
            .map(|owned| owned.len() as u64)
            .unwrap_or(0);
        Ok(removed)
    }

    fn count_by_owner(&self, ns: &Namespace, owner: &FileId) -> StoreResult<u64> {
        let chunks = self.chunks.read().expect("lock poisoned");
        Ok(chunks
            .get(&(ns.clone(), *owner))
            .map(|owned| owned.len() as u64)
            .unwrap_or(0))
    }
}

impl std::fmt::Debug for InMemoryChunkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryChunkStore")
            .field("chunk_count", &self.len())
            .finish()
    }
}
