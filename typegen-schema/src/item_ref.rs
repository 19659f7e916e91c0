//! Element and property types: inline items or references.

use crate::error::ValidationError;
use crate::raw::describe;
use crate::reference::{is_reference, strip_sigil};
use crate::types::SchemaItem;
use serde::Serialize;
use serde_yaml::Value;

/// Type of an array element or object property.
///
/// Either an anonymous item owned by its parent, or the name of a top-level
/// definition. References are not checked against the definitions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemRef {
    /// Inline type definition.
    Owned(Box<SchemaItem>),
    /// Name of another definition, without the sigil.
    Reference(String),
}

impl ItemRef {
    /// Builds an item reference from a raw field value.
    ///
    /// A reference string yields [`ItemRef::Reference`]. A mapping is parsed as
    /// an anonymous item called `nested_name` and yields [`ItemRef::Owned`].
    ///
    /// # Arguments
    /// * `value` - Raw field value
    /// * `field` - Field label used in the shape error
    /// * `owner` - Name of the item holding the field
    /// * `nested_name` - Name given to an inline item
    ///
    /// # Errors
    /// Returns `ValidationError` if the value is neither a reference nor a
    /// mapping, or if the inline item fails to parse.
    pub fn parse(
        value: &Value,
        field: &str,
        owner: &str,
        nested_name: &str,
    ) -> Result<Self, ValidationError> {
        if is_reference(value) {
            let name = value.as_str().map(strip_sigil).unwrap_or_default();
            tracing::trace!("{owner}: {field} references '{name}'");
            return Ok(Self::Reference(name.to_string()));
        }

        match value.as_mapping() {
            Some(fields) => {
                let item = SchemaItem::from_fields(nested_name, fields)?;
                tracing::trace!("{owner}: {field} is inline {} '{nested_name}'", item.kind());
                Ok(Self::Owned(Box::new(item)))
            }
            None => Err(ValidationError::with_context(
                format!(
                    "{field} must be an object or a reference, got {}",
                    describe(value)
                ),
                owner,
            )),
        }
    }

    /// Returns the inline item, if this is not a reference.
    #[must_use]
    pub fn as_item(&self) -> Option<&SchemaItem> {
        match self {
            Self::Owned(item) => Some(item),
            Self::Reference(_) => None,
        }
    }

    /// Returns the referenced definition name, if this is a reference.
    #[must_use]
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Owned(_) => None,
            Self::Reference(name) => Some(name),
        }
    }

    /// Returns true if this is a reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}
