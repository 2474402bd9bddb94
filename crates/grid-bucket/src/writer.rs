use std::sync::Arc;

use tracing::debug;

use grid_store::{ChunkStore, FileStore};
use grid_types::{ChunkRecord, FileId, FileRecord, Namespace, UploadStamp};

use crate::chunker::ChunkBuffer;
use crate::error::{GridError, GridResult};

/// Write stream for one new file version.
///
/// Opening a writer performs no store activity and reserves no identifier:
/// the version becomes real only when [`close`](FileWriter::close)
/// succeeds. Appended bytes are carved into full chunks and staged in
/// memory; `close` inserts all chunks and then the metadata record, in
/// that order. The metadata insert is the publish point — a reader racing
/// this writer sees either the complete version or nothing.
///
/// Dropping an unclosed writer discards the staged version without
/// publishing anything, so a writer held in a scope that exits early
/// leaves no visible trace.
pub struct FileWriter {
    filename: String,
    namespace: Namespace,
    chunk_size: u32,
    files: Arc<dyn FileStore>,
    chunks: Arc<dyn ChunkStore>,
    buffer: ChunkBuffer,
    staged: Vec<Vec<u8>>,
    length: u64,
    closed: bool,
}

impl FileWriter {
    pub(crate) fn new(
        filename: String,
        namespace: Namespace,
        chunk_size: u32,
        files: Arc<dyn FileStore>,
        chunks: Arc<dyn ChunkStore>,
    ) -> Self {
        Self {
            filename,
            namespace,
            chunk_size,
            files,
            chunks,
            buffer: ChunkBuffer::new(chunk_size),
            staged: Vec::new(),
            length: 0,
            closed: false,
        }
    }

    /// Append bytes to the version being written.
    ///
    /// May be called repeatedly; full chunks are carved off as the buffer
    /// fills. Nothing reaches the store before `close`.
    pub fn write(&mut self, data: &[u8]) -> GridResult<()> {
        if self.closed {
            return Err(GridError::InvalidState("write after close"));
        }
        self.length += data.len() as u64;
        self.staged.extend(self.buffer.push(data));
        Ok(())
    }

    /// Flush and publish the version.
    ///
    /// In order: carve the final partial chunk, insert all chunk documents,
    /// then insert the metadata record with the computed length and a fresh
    /// upload stamp. A chunk-insert failure aborts before the metadata
    /// insert — the orphaned chunks are invisible garbage, and the error is
    /// propagated with the stream left unusable. Closing twice fails with
    /// `InvalidState`.
    ///
    /// A version with zero bytes written is legal: it publishes a metadata
    /// record with `length == 0` and no chunks.
    pub fn close(&mut self) -> GridResult<FileRecord> {
        if self.closed {
            return Err(GridError::InvalidState("stream already closed"));
        }
        self.closed = true;

        if let Some(tail) = self.buffer.finish() {
            self.staged.push(tail);
        }

        let id = FileId::new();
        for (seq, data) in self.staged.drain(..).enumerate() {
            let chunk = ChunkRecord::new(id, seq as u32, data);
            self.chunks.insert(&self.namespace, &chunk)?;
        }

        let record = FileRecord {
            id,
            filename: self.filename.clone(),
            uploaded_at: UploadStamp::now(),
            length: self.length,
            chunk_size: self.chunk_size,
            namespace: self.namespace.clone(),
        };
        self.files.insert(&record)?;

        debug!(
            filename = %record.filename,
            namespace = %record.namespace,
            id = %record.id,
            length = record.length,
            chunks = record.expected_chunks(),
            "version published"
        );
        Ok(record)
    }

    /// The filename this writer will publish under.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Namespace the version will belong to.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Total bytes appended so far.
    pub fn bytes_written(&self) -> u64 {
        self.length
    }

    /// Returns `true` once the stream is closed (successfully or not).
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if !self.closed {
            debug!(
                filename = %self.filename,
                buffered = self.length,
                "writer dropped without close; version discarded"
            );
        }
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("filename", &self.filename)
            .field("namespace", &self.namespace)
            .field("bytes_written", &self.length)
            .field("closed", &self.closed)
            .finish()
    }
}
