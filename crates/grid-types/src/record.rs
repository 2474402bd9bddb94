use serde::{Deserialize, Serialize};

use crate::file_id::FileId;
use crate::namespace::Namespace;
use crate::stamp::UploadStamp;

/// Metadata document for one complete, immutable file version.
///
/// One record exists per *version*, not per filename: multiple records may
/// share a `filename`, and a plain read resolves to the one with the
/// greatest `uploaded_at` (ties broken by greatest `id`). Records are never
/// mutated after creation; a new write always publishes a brand-new record
/// with its own chunk set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique identifier, assigned at publish.
    pub id: FileId,
    /// Logical name. Not unique across versions.
    pub filename: String,
    /// Publish time, assigned when the write stream closes.
    pub uploaded_at: UploadStamp,
    /// Total byte length, known only after writing completes.
    pub length: u64,
    /// Fixed chunk size used for this version.
    pub chunk_size: u32,
    /// Namespace this version belongs to.
    pub namespace: Namespace,
}

impl FileRecord {
    /// Number of chunks this record must own: `ceil(length / chunk_size)`.
    ///
    /// Zero for an empty file.
    pub fn expected_chunks(&self) -> u64 {
        if self.chunk_size == 0 {
            return 0;
        }
        self.length.div_ceil(self.chunk_size as u64)
    }
}

/// One bounded-size fragment of a file version's byte content.
///
/// `owner` is a weak back-reference: the chunk belongs to the record's
/// chunk set but holds no ownership of the parent. For a given owner,
/// sequence numbers form the contiguous range `0..k-1`, every chunk except
/// the last has exactly `chunk_size` bytes, and the data lengths sum to
/// the owner's `length`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// The owning `FileRecord`'s id.
    pub owner: FileId,
    /// Zero-based position among the owner's chunks.
    pub seq: u32,
    /// Raw bytes.
    pub data: Vec<u8>,
}

impl ChunkRecord {
    /// Create a chunk for the given owner and position.
    pub fn new(owner: FileId, seq: u32, data: Vec<u8>) -> Self {
        Self { owner, seq, data }
    }

    /// Length of this chunk's payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
