use grid_types::{ChunkRecord, FileId, FileRecord, Namespace};

use crate::error::StoreResult;
use crate::filter::FileFilter;

/// Metadata document store.
///
/// Holds one document per published file version, partitioned by
/// namespace. Implementations must tolerate concurrent independent calls
/// from multiple streams without client-side locking.
pub trait FileStore: Send + Sync {
    /// Insert a metadata record and return its id.
    ///
    /// This is the publish point: once the insert returns, the version is
    /// visible to readers and listers. The record's `namespace` field
    /// selects the partition.
    fn insert(&self, record: &FileRecord) -> StoreResult<FileId>;

    /// Resolve the latest version of `filename` in the namespace.
    ///
    /// "Latest" is the record with the greatest `uploaded_at`, ties broken
    /// by the greatest `id`. Returns `Ok(None)` if no version exists.
    fn find_latest(&self, ns: &Namespace, filename: &str) -> StoreResult<Option<FileRecord>>;

    /// All records in the namespace matching the filter, in insertion order.
    fn find_by_filter(&self, ns: &Namespace, filter: &FileFilter) -> StoreResult<Vec<FileRecord>>;

    /// Delete every record matching the filter. Returns the number removed.
    fn delete_by_filter(&self, ns: &Namespace, filter: &FileFilter) -> StoreResult<u64>;

    /// Distinct filenames present in the namespace.
    ///
    /// Order is the natural iteration order of the store: the creation
    /// order of each name's first appearance. Callers must not depend on
    /// any sort beyond that.
    fn distinct_filenames(&self, ns: &Namespace) -> StoreResult<Vec<String>>;

    /// Number of records in the namespace matching the filter.
    fn count_by_filter(&self, ns: &Namespace, filter: &FileFilter) -> StoreResult<u64>;
}

/// Chunk document store.
///
/// Holds the chunk sets owned by metadata records, partitioned by
/// namespace. Chunks are never mutated after insertion.
pub trait ChunkStore: Send + Sync {
    /// Insert one chunk document.
    fn insert(&self, ns: &Namespace, chunk: &ChunkRecord) -> StoreResult<()>;

    /// All chunks owned by `owner`, ordered by `seq` ascending.
    fn find_by_owner(&self, ns: &Namespace, owner: &FileId) -> StoreResult<Vec<ChunkRecord>>;

    /// Delete every chunk owned by `owner`. Returns the number removed.
    fn delete_by_owner(&self, ns: &Namespace, owner: &FileId) -> StoreResult<u64>;

    /// Number of chunks owned by `owner`.
    fn count_by_owner(&self, ns: &Namespace, owner: &FileId) -> StoreResult<u64>;
}
