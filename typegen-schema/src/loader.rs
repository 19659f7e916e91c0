//! Definition document loading.
//!
//! Documents are YAML. Mappings keep their key order and duplicate keys in
//! any mapping are rejected here, before the parser sees the tree.

use crate::error::LoadError;
use serde_yaml::Value;
use std::path::Path;

/// Loads a document from a YAML string.
///
/// # Errors
/// Returns `LoadError::Yaml` on malformed YAML or a duplicate mapping key,
/// and `LoadError::Empty` if the source holds no document.
pub fn load_str(source: &str) -> Result<Value, LoadError> {
    if source.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    let document: Value = serde_yaml::from_str(source)?;
    if document.is_null() {
        return Err(LoadError::Empty);
    }
    Ok(document)
}

/// Loads a document from a YAML file.
///
/// # Errors
/// Returns `LoadError` if the file cannot be read or does not hold a document.
pub fn load_file(path: &Path) -> Result<Value, LoadError> {
    tracing::debug!("Loading {}", path.display());
    let source = std::fs::read_to_string(path)?;
    load_str(&source)
}
