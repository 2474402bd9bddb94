use grid_store::FileFilter;
use grid_types::FileId;

use crate::error::GridError;

/// What a remove operation should match: a filename (all versions of that
/// name) or a structural filter (the empty filter means every record in
/// the namespace).
///
/// Callers holding dynamically-typed input resolve it once, at this
/// boundary, via `TryFrom<serde_json::Value>`; nothing downstream
/// re-checks argument shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Criterion {
    /// Remove every version carrying this filename.
    ByName(String),
    /// Remove every record matching the filter.
    ByFilter(FileFilter),
}

impl Criterion {
    /// Lower the criterion to the filter the store adapters understand.
    pub fn into_filter(self) -> FileFilter {
        match self {
            Criterion::ByName(name) => FileFilter::by_filename(name),
            Criterion::ByFilter(filter) => filter,
        }
    }
}

impl From<&str> for Criterion {
    fn from(name: &str) -> Self {
        Criterion::ByName(name.to_string())
    }
}

impl From<String> for Criterion {
    fn from(name: String) -> Self {
        Criterion::ByName(name)
    }
}

impl From<FileFilter> for Criterion {
    fn from(filter: FileFilter) -> Self {
        Criterion::ByFilter(filter)
    }
}

impl TryFrom<&serde_json::Value> for Criterion {
    type Error = GridError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;
        match value {
            Value::String(name) => Ok(Criterion::ByName(name.clone())),
            Value::Object(map) => {
                let mut filter = FileFilter::all();
                for (key, field) in map {
                    match (key.as_str(), field) {
                        ("filename", Value::String(name)) => {
                            filter.filename = Some(name.clone());
                        }
                        ("id", Value::String(raw)) => {
                            let id = FileId::parse(raw).map_err(|e| {
                                GridError::TypeMismatch(e.to_string())
                            })?;
                            filter.id = Some(id);
                        }
                        ("filename", other) => {
                            return Err(GridError::TypeMismatch(format!(
                                "filter field \"filename\" expects a string, got {other}"
                            )));
                        }
                        ("id", other) => {
                            return Err(GridError::TypeMismatch(format!(
                                "filter field \"id\" expects a string, got {other}"
                            )));
                        }
                        (key, _) => {
                            return Err(GridError::TypeMismatch(format!(
                                "unsupported filter field {key:?}"
                            )));
                        }
                    }
                }
                Ok(Criterion::ByFilter(filter))
            }
            other => Err(GridError::TypeMismatch(format!(
                "criterion must be a filename or a filter, got {other}"
            ))),
        }
    }
}

impl TryFrom<serde_json::Value> for Criterion {
    type Error = GridError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Criterion::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_str_is_by_name() {
        let criterion: Criterion = "test".into();
        assert_eq!(criterion, Criterion::ByName("test".into()));
    }

    #[test]
    fn json_string_is_by_name() {
        let criterion = Criterion::try_from(json!("mike")).unwrap();
        assert_eq!(criterion.into_filter(), FileFilter::by_filename("mike"));
    }

    #[test]
    fn empty_json_object_matches_all() {
        let criterion = Criterion::try_from(json!({})).unwrap();
        assert_eq!(criterion.into_filter(), FileFilter::all());
    }

    #[test]
    fn filename_field_parses() {
        let criterion = Criterion::try_from(json!({ "filename": "x" })).unwrap();
        assert_eq!(criterion.into_filter(), FileFilter::by_filename("x"));
    }

    #[test]
    fn id_field_parses() {
        let id = FileId::new();
        let criterion = Criterion::try_from(json!({ "id": id.to_string() })).unwrap();
        assert_eq!(criterion.into_filter(), FileFilter::by_id(id));
    }

    #[test]
    fn number_is_type_mismatch() {
        let err = Criterion::try_from(json!(5)).unwrap_err();
        assert!(matches!(err, GridError::TypeMismatch(_)));
    }

    #[test]
    fn null_is_type_mismatch() {
        let err = Criterion::try_from(json!(null)).unwrap_err();
        assert!(matches!(err, GridError::TypeMismatch(_)));
    }

    #[test]
    fn array_is_type_mismatch() {
        let err = Criterion::try_from(json!([])).unwrap_err();
        assert!(matches!(err, GridError::TypeMismatch(_)));
    }

    #[test]
    fn unknown_filter_field_is_type_mismatch() {
        let err = Criterion::try_from(json!({ "length": 3 })).unwrap_err();
        assert!(matches!(err, GridError::TypeMismatch(_)));
    }

    #[test]
    fn non_string_value_names_the_field() {
        let err = Criterion::try_from(json!({ "filename": 5 })).unwrap_err();
        let GridError::TypeMismatch(msg) = err else {
            panic!("expected TypeMismatch")
        };
        assert!(msg.contains("\"filename\""), "{msg}");
        assert!(msg.contains("expects a string"), "{msg}");

        let err = Criterion::try_from(json!({ "id": [1, 2] })).unwrap_err();
        let GridError::TypeMismatch(msg) = err else {
            panic!("expected TypeMismatch")
        };
        assert!(msg.contains("\"id\""), "{msg}");
        assert!(msg.contains("expects a string"), "{msg}");
    }

    #[test]
    fn malformed_id_is_type_mismatch() {
        let err = Criterion::try_from(json!({ "id": "not-a-uuid" })).unwrap_err();
        assert!(matches!(err, GridError::TypeMismatch(_)));
    }
}
