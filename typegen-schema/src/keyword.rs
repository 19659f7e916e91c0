//! Keyword (closed value set) resolution.
//!
//! Fields such as `type`, `format` and `array_type` accept one of a fixed set
//! of strings. Each such set is a Rust enum implementing [`Keyword`].

use crate::error::ValidationError;
use crate::raw::describe;
use serde_yaml::Value;

/// A closed set of values spelled as strings in a definition document.
pub trait Keyword: Copy + 'static {
    /// Every member paired with its spelling.
    const VALUES: &'static [(&'static str, Self)];

    /// Returns the spelling of this member.
    fn as_str(&self) -> &'static str;
}

/// Resolves a raw value to a member of `K`.
///
/// # Arguments
/// * `value` - Raw scalar taken from the document
/// * `field` - Name of the field being validated
/// * `owner` - Name of the item owning the field, for error context
///
/// # Errors
/// Returns `ValidationError` if the value is not a string or spells no member.
pub fn parse_keyword<K: Keyword>(
    value: &Value,
    field: &str,
    owner: Option<&str>,
) -> Result<K, ValidationError> {
    value
        .as_str()
        .and_then(|s| {
            K::VALUES
                .iter()
                .find(|(spelling, _)| *spelling == s)
                .map(|(_, member)| *member)
        })
        .ok_or_else(|| {
            let message = format!("field {field} has invalid value '{}'", describe(value));
            match owner {
                Some(owner) => ValidationError::with_context(message, owner),
                None => ValidationError::new(message),
            }
        })
}
