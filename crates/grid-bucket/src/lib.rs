//! Chunked large-object storage layered on a document-oriented database.
//!
//! The underlying document store has a hard per-document size limit, so a
//! file's bytes are split into fixed-size chunk documents plus one
//! metadata document per version. This crate is the chunking and
//! streaming layer:
//! - [`Bucket`] — the public facade: open-for-read, open-for-write,
//!   list, remove
//! - [`FileWriter`] — buffers appends into chunk boundaries and publishes
//!   atomically at close (chunks first, then metadata)
//! - [`FileReader`] — resolves a filename to its latest version and
//!   streams the chunks back in order
//! - [`chunker`] — the stateless chunk codec
//! - [`Criterion`] — filename-or-filter removal criterion, resolved once
//!   at the facade boundary
//!
//! The document store itself is an external collaborator reached through
//! the [`grid_store`] adapter traits; this layer owns no wire format and
//! guarantees only the invariants it can enforce at the chunking level:
//! chunk contiguity, publish-on-close atomicity, and deterministic
//! latest-version resolution.

pub mod bucket;
pub mod chunker;
pub mod config;
pub mod criterion;
pub mod error;
pub mod reader;
pub mod writer;

pub use bucket::{Bucket, FileHandle, Mode};
pub use chunker::{assemble, ChunkBuffer};
pub use config::{BucketConfig, DEFAULT_CHUNK_SIZE};
pub use criterion::Criterion;
pub use error::{GridError, GridResult};
pub use reader::FileReader;
pub use writer::FileWriter;

// Re-export key types
pub use grid_store::{ChunkStore, FileFilter, FileStore, InMemoryChunkStore, InMemoryFileStore};
pub use grid_types::{ChunkRecord, FileId, FileRecord, Namespace, UploadStamp};
