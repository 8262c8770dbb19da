//! Token document loading and section resolution
//!
//! Wraps the parsed design-token JSON export. The document is read-only
//! input: extractors walk it, nothing mutates it. Only "is the root an
//! object" is validated; absent sections degrade to empty extraction
//! results rather than errors.

use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors while loading a token document
#[derive(Debug)]
pub enum DocumentError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NotAnObject,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io(err) => write!(f, "Reading token document failed: {}", err),
            DocumentError::Parse(err) => write!(f, "Parsing token document failed: {}", err),
            DocumentError::NotAnObject => write!(f, "Token document root is not an object"),
        }
    }
}

impl std::error::Error for DocumentError {}

/// A parsed design-token document (the token tree root).
///
/// Section lookups take an ordered list of candidate keys because source
/// exports inconsistently prefix section titles with a space.
#[derive(Debug, Clone)]
pub struct TokenDocument {
    root: Map<String, Value>,
}

impl TokenDocument {
    /// Parse a document from JSON source.
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(source).map_err(DocumentError::Parse)?;
        match value {
            Value::Object(root) => Ok(TokenDocument { root }),
            _ => Err(DocumentError::NotAnObject),
        }
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let source = fs::read_to_string(path).map_err(DocumentError::Io)?;
        Self::parse(&source)
    }

    /// Top-level section keys, in document order.
    pub fn top_level_keys(&self) -> Vec<&str> {
        self.root.keys().map(String::as_str).collect()
    }

    /// Resolve a section through ordered candidate keys, first present wins.
    pub fn section(&self, candidates: &[&str]) -> Option<&Value> {
        candidates.iter().find_map(|key| self.root.get(*key))
    }
}

/// The `$extensions.mode` map of a node, if the node carries one.
///
/// A mode map is the signal that a node enumerates variants (themes,
/// languages, grayscales); its keys are the variant names.
pub fn mode_map(node: &Value) -> Option<&Map<String, Value>> {
    node.get("$extensions")?.get("mode")?.as_object()
}
