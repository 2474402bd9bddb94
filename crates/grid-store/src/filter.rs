use serde::{Deserialize, Serialize};

use grid_types::{FileId, FileRecord};

/// Structural filter over metadata records.
///
/// Each set field must match; the empty filter matches every record in the
/// namespace. Filters never reach across namespaces — the namespace is a
/// separate argument on every store operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Match records with exactly this filename (all versions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Match the single record with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<FileId>,
}

impl FileFilter {
    /// The empty filter: matches every record in the namespace.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by filename (all versions of that name).
    pub fn by_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::default()
        }
    }

    /// Filter by file id (exactly one version).
    pub fn by_id(id: FileId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Returns `true` if no fields are set.
    pub fn is_empty(&self) -> bool {
        self.filename.is_none() && self.id.is_none()
    }

    /// Returns `true` if the record satisfies every set field.
    pub fn matches(&self, record: &FileRecord) -> bool {
        if let Some(filename) = &self.filename {
            if &record.filename != filename {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &record.id != id {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_types::{Namespace, UploadStamp};

    fn record(filename: &str) -> FileRecord {
        FileRecord {
            id: FileId::new(),
            filename: filename.into(),
            uploaded_at: UploadStamp::now(),
            length: 0,
            chunk_size: 256,
            namespace: Namespace::default(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FileFilter::all();
        assert!(filter.is_empty());
        assert!(filter.matches(&record("a")));
        assert!(filter.matches(&record("b")));
    }

    #[test]
    fn filename_filter() {
        let filter = FileFilter::by_filename("a");
        assert!(filter.matches(&record("a")));
        assert!(!filter.matches(&record("b")));
    }

    #[test]
    fn id_filter() {
        let rec = record("a");
        let filter = FileFilter::by_id(rec.id);
        assert!(filter.matches(&rec));
        assert!(!filter.matches(&record("a")));
    }

    #[test]
    fn conjunction_of_fields() {
        let rec = record("a");
        let filter = FileFilter {
            filename: Some("b".into()),
            id: Some(rec.id),
        };
        // Id matches but filename does not.
        assert!(!filter.matches(&rec));
    }

    #[test]
    fn serde_skips_unset_fields() {
        let json = serde_json::to_string(&FileFilter::by_filename("x")).unwrap();
        assert_eq!(json, r#"{"filename":"x"}"#);
    }
}
