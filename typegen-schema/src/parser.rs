//! Definition document parser.
//!
//! This module turns a loaded document into the [`SchemaIr`] table. Each
//! entry of the top-level `definitions` mapping is parsed in document order;
//! the first validation error aborts the whole document.

use crate::error::ValidationError;
use crate::ir::SchemaIr;
use crate::raw::describe;
use crate::types::SchemaItem;
use serde_yaml::{Mapping, Value};

/// Name of the top-level block holding the definitions.
pub const DEFINITIONS_BLOCK: &str = "definitions";

/// Parses a loaded document into the definitions table.
///
/// # Arguments
/// * `document` - Document tree produced by the loader
///
/// # Returns
/// The table of definitions, or the first validation error found.
///
/// # Errors
/// Returns `ValidationError` if the document has no `definitions` block or if
/// any definition is malformed.
pub fn parse_document(document: &Value) -> Result<SchemaIr, ValidationError> {
    Parser::new().parse(document)
}

/// Builds the definitions table one entry at a time.
///
/// The parser is consumed by [`Parser::parse`], so a failed parse leaves
/// nothing behind.
#[derive(Debug, Default)]
pub struct Parser {
    ir: SchemaIr,
}

impl Parser {
    /// Creates a parser with an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every definition of the document.
    ///
    /// # Errors
    /// Returns `ValidationError` on the first malformed definition.
    pub fn parse(mut self, document: &Value) -> Result<SchemaIr, ValidationError> {
        let definitions = definitions_block(document)?;

        for (key, body) in definitions {
            let name = key.as_str().ok_or_else(|| {
                ValidationError::new(format!(
                    "definition name must be a string, got {}",
                    describe(key)
                ))
            })?;
            let fields = body.as_mapping().ok_or_else(|| {
                ValidationError::with_context(
                    format!("definition must be a mapping, got {}", describe(body)),
                    name,
                )
            })?;

            let item = SchemaItem::from_fields(name, fields)?;
            tracing::debug!("Parsed {} definition '{}'", item.kind(), name);
            self.ir.insert(item)?;
        }

        tracing::info!("Parsed {} definitions", self.ir.len());
        Ok(self.ir)
    }
}

/// Locates the `definitions` mapping at the root of the document.
fn definitions_block(document: &Value) -> Result<&Mapping, ValidationError> {
    let block = document.get(DEFINITIONS_BLOCK).ok_or_else(|| {
        ValidationError::new(format!(
            "cannot find '{DEFINITIONS_BLOCK}' block in the root of the document"
        ))
    })?;

    block.as_mapping().ok_or_else(|| {
        ValidationError::new(format!("'{DEFINITIONS_BLOCK}' block must be a mapping"))
    })
}
