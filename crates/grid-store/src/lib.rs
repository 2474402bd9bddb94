//! Store adapter boundary for gridstream.
//!
//! The chunking layer sits on top of a document-oriented database that is
//! an external collaborator. This crate specifies the exact surface the
//! core needs from that collaborator:
//! - [`FileStore`] — metadata documents: insert, resolve latest, filter,
//!   delete, distinct filenames, count
//! - [`ChunkStore`] — chunk documents: insert, fetch-by-owner-in-order,
//!   delete, count
//! - [`FileFilter`] — structural filter over metadata records
//! - [`InMemoryFileStore`] / [`InMemoryChunkStore`] — backends for tests
//!   and embedding
//!
//! Adapters must support concurrent independent calls without client-side
//! locking; concurrency control belongs to the external store.

pub mod error;
pub mod filter;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use filter::FileFilter;
pub use memory::{InMemoryChunkStore, InMemoryFileStore};
pub use traits::{ChunkStore, FileStore};
