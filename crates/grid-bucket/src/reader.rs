use std::sync::Arc;

use tracing::debug;

use grid_store::ChunkStore;
use grid_types::{FileRecord, Namespace};

use crate::chunker::assemble;
use crate::error::{GridError, GridResult};

/// Read stream over one resolved file version.
///
/// The filename-to-version resolution already happened when the bucket
/// opened this reader; the handle is pinned to that version and is not
/// affected by writers publishing newer ones. `read` returns the entire
/// remaining content, so a second call yields an empty buffer. Closing
/// has no persisted side effects.
pub struct FileReader {
    record: FileRecord,
    chunks: Arc<dyn ChunkStore>,
    consumed: bool,
    closed: bool,
}

impl FileReader {
    pub(crate) fn new(record: FileRecord, chunks: Arc<dyn ChunkStore>) -> Self {
        Self {
            record,
            chunks,
            consumed: false,
            closed: false,
        }
    }

    /// Fetch and concatenate the version's chunks.
    ///
    /// The chunk set is validated against the metadata record before
    /// anything is returned: the count must equal
    /// `ceil(length / chunk_size)`, sequence numbers must be contiguous
    /// from zero, every non-final chunk must be exactly `chunk_size` long,
    /// and the data must sum to `length`. Given the publish-on-close
    /// protocol these can only fail if the external store lost or mangled
    /// documents, which surfaces as `CorruptFile`.
    pub fn read(&mut self) -> GridResult<Vec<u8>> {
        if self.closed {
            return Err(GridError::InvalidState("read after close"));
        }
        if self.consumed {
            return Ok(Vec::new());
        }
        self.consumed = true;

        let chunks = self
            .chunks
            .find_by_owner(&self.record.namespace, &self.record.id)?;
        self.validate(&chunks.iter().map(|c| (c.seq, c.len())).collect::<Vec<_>>())?;

        debug!(
            filename = %self.record.filename,
            id = %self.record.id,
            chunks = chunks.len(),
            length = self.record.length,
            "version read"
        );
        Ok(assemble(&chunks))
    }

    fn validate(&self, chunks: &[(u32, usize)]) -> GridResult<()> {
        let expected = self.record.expected_chunks();
        if chunks.len() as u64 != expected {
            return Err(self.corrupt(format!(
                "expected {expected} chunks, found {}",
                chunks.len()
            )));
        }

        let chunk_size = self.record.chunk_size as usize;
        let mut total: u64 = 0;
        for (index, &(seq, len)) in chunks.iter().enumerate() {
            if seq as usize != index {
                return Err(self.corrupt(format!(
                    "sequence gap: expected {index}, found {seq}"
                )));
            }
            let is_final = index + 1 == chunks.len();
            if !is_final && len != chunk_size {
                return Err(self.corrupt(format!(
                    "chunk {index} has {len} bytes, expected {chunk_size}"
                )));
            }
            total += len as u64;
        }
        if total != self.record.length {
            return Err(self.corrupt(format!(
                "chunk data sums to {total} bytes, metadata says {}",
                self.record.length
            )));
        }
        Ok(())
    }

    fn corrupt(&self, reason: String) -> GridError {
        GridError::CorruptFile {
            filename: self.record.filename.clone(),
            reason,
        }
    }

    /// Release the handle. No persisted side effects; closing twice fails
    /// with `InvalidState`.
    pub fn close(&mut self) -> GridResult<()> {
        if self.closed {
            return Err(GridError::InvalidState("reader already closed"));
        }
        self.closed = true;
        Ok(())
    }

    /// The resolved metadata record.
    pub fn record(&self) -> &FileRecord {
        &self.record
    }

    /// Filename this version was published under.
    pub fn filename(&self) -> &str {
        &self.record.filename
    }

    /// Namespace the version belongs to.
    pub fn namespace(&self) -> &Namespace {
        &self.record.namespace
    }

    /// Total byte length of the version.
    pub fn len(&self) -> u64 {
        self.record.length
    }

    /// Returns `true` for a zero-length version.
    pub fn is_empty(&self) -> bool {
        self.record.length == 0
    }
}

impl std::fmt::Debug for FileReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileReader")
            .field("filename", &self.record.filename)
            .field("id", &self.record.id)
            .field("length", &self.record.length)
            .field("closed", &self.closed)
            .finish()
    }
}
