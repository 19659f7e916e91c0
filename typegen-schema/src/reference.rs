//! Reference syntax.
//!
//! A scalar string starting with [`REFERENCE_SIGIL`] names another top-level
//! definition instead of describing a type inline.

use serde_yaml::Value;

/// Character marking a string as a reference.
pub const REFERENCE_SIGIL: char = '#';

/// Returns true if the value is a reference string.
///
/// Values that are not strings are never references.
#[must_use]
pub fn is_reference(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.starts_with(REFERENCE_SIGIL))
}

/// Strips the leading sigil and returns the referenced definition name.
///
/// Callers must check [`is_reference`] first; a string without the sigil is
/// returned unchanged.
#[must_use]
pub fn strip_sigil(reference: &str) -> &str {
    reference
        .strip_prefix(REFERENCE_SIGIL)
        .unwrap_or(reference)
}
