use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Conventional default namespace ("collection root").
pub const DEFAULT_NAMESPACE: &str = "fs";

/// A caller-selectable partition containing an independent file catalog.
///
/// Namespaces partition both the metadata and chunk collections: a file
/// written under namespace `a` is invisible to list/open/remove under
/// namespace `b`. The conventional root is [`DEFAULT_NAMESPACE`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Namespace(String);

impl Namespace {
    /// Create a namespace, rejecting empty names and names containing `$`.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() || name.contains('$') {
            return Err(TypeError::InvalidNamespace(name));
        }
        Ok(Self(name))
    }

    /// The namespace name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Logical collection name holding metadata records (`{ns}.files`).
    pub fn files_collection(&self) -> String {
        format!("{}.files", self.0)
    }

    /// Logical collection name holding chunk records (`{ns}.chunks`).
    pub fn chunks_collection(&self) -> String {
        format!("{}.chunks", self.0)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self.0)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
