//! Foundation types for gridstream.
//!
//! This crate provides the identifiers, timestamps, and record types used
//! throughout the gridstream system. Every other gridstream crate depends
//! on `grid-types`.
//!
//! # Key Types
//!
//! - [`FileId`] — Unique, time-ordered identifier for one file version (UUID v7)
//! - [`UploadStamp`] — Creation timestamp assigned when a version is published
//! - [`Namespace`] — Caller-selectable partition holding an independent file catalog
//! - [`FileRecord`] — Metadata document describing one complete, immutable version
//! - [`ChunkRecord`] — One bounded-size fragment of a version's byte content

pub mod error;
pub mod file_id;
pub mod namespace;
pub mod record;
pub mod stamp;

pub use error::TypeError;
pub use file_id::FileId;
pub use namespace::Namespace;
pub use record::{ChunkRecord, FileRecord};
pub use stamp::UploadStamp;
