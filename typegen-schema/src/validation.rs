//! Cross-definition checks.
//!
//! The parser leaves references symbolic and does not require them to name a
//! definition. Consumers that need every reference to resolve run
//! [`validate_references`] on the finished table.

use crate::error::SchemaError;
use crate::ir::SchemaIr;
use crate::item_ref::ItemRef;
use crate::types::SchemaItem;

/// Checks that every reference in the table names a definition.
///
/// Items are visited in document order, nested items depth-first.
///
/// # Errors
/// Returns `SchemaError::UnresolvedReference` for the first reference that
/// does not resolve.
pub fn validate_references(ir: &SchemaIr) -> Result<(), SchemaError> {
    for (_, item) in ir.iter() {
        validate_item(ir, item)?;
    }
    Ok(())
}

fn validate_item(ir: &SchemaIr, item: &SchemaItem) -> Result<(), SchemaError> {
    for child in item.children() {
        match child {
            ItemRef::Owned(nested) => validate_item(ir, nested)?,
            ItemRef::Reference(name) if !ir.contains(name) => {
                return Err(SchemaError::UnresolvedReference {
                    reference: name.clone(),
                    item: item.name().to_string(),
                });
            }
            ItemRef::Reference(_) => {}
        }
    }
    Ok(())
}
