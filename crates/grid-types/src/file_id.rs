use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Unique identifier for one file version (UUID v7 for time-ordering).
///
/// A fresh `FileId` is assigned when a write stream closes — never at open.
/// The `Ord` impl compares the underlying UUID bytes, which gives a
/// deterministic tie-break between versions sharing an upload stamp.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(uuid::Uuid);

impl FileId {
    /// Generate a new time-ordered file ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Parse from the canonical hyphenated string form.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let uuid = input.parse().map_err(|source| TypeError::InvalidFileId {
            input: input.to_string(),
            source,
        })?;
        Ok(Self(uuid))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.short_id())
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = FileId::new();
        let b = FileId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn v7_ids_are_time_ordered() {
        let earlier = FileId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = FileId::new();
        assert!(earlier < later);
    }

    #[test]
    fn parse_roundtrip() {
        let id = FileId::new();
        let parsed = FileId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = FileId::parse("not-a-uuid").unwrap_err();
        assert!(matches!(err, TypeError::InvalidFileId { .. }));
    }

    #[test]
    fn ordering_is_deterministic() {
        let a = FileId::from_uuid(uuid::Uuid::from_u128(1));
        let b = FileId::from_uuid(uuid::Uuid::from_u128(2));
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn serde_roundtrip() {
        let id = FileId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: FileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn debug_uses_short_form() {
        let id = FileId::new();
        let debug = format!("{id:?}");
        assert!(debug.starts_with("FileId("));
        assert_eq!(debug.len(), "FileId(".len() + 8 + 1);
    }
}
