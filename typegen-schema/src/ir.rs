//! Intermediate representation for code generation.
//!
//! The IR is the table of top-level definitions, keyed by name in document
//! order. Nested items are owned by their parents; references stay symbolic
//! and are dereferenced on demand with [`SchemaIr::resolve`].

use crate::error::ValidationError;
use crate::item_ref::ItemRef;
use crate::types::SchemaItem;
use indexmap::IndexMap;
use serde::Serialize;

/// Table of parsed definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaIr {
    definitions: IndexMap<String, SchemaItem>,
}

impl SchemaIr {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, keyed by its name.
    ///
    /// Definitions are never overwritten: on a name collision the table keeps
    /// the first entry and an error is returned.
    pub(crate) fn insert(&mut self, item: SchemaItem) -> Result<(), ValidationError> {
        if self.definitions.contains_key(item.name()) {
            return Err(ValidationError::duplicate(item.name()));
        }
        self.definitions.insert(item.name().to_string(), item);
        Ok(())
    }

    /// Gets a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaItem> {
        self.definitions.get(name)
    }

    /// Returns true if a definition with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Returns the item an [`ItemRef`] stands for.
    ///
    /// Inline items resolve to themselves; references are looked up in this
    /// table and yield `None` when the name is not defined.
    #[must_use]
    pub fn resolve<'a>(&'a self, item_ref: &'a ItemRef) -> Option<&'a SchemaItem> {
        match item_ref {
            ItemRef::Owned(item) => Some(item),
            ItemRef::Reference(name) => self.get(name),
        }
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if there are no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates definitions in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaItem)> {
        self.definitions.iter().map(|(name, item)| (name.as_str(), item))
    }

    /// Iterates definition names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Consumes the IR, returning the underlying table.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, SchemaItem> {
        self.definitions
    }
}
