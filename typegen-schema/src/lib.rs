//! # Typegen Schema
//!
//! Schema front-end for the typegen code generator.
//!
//! This crate provides:
//! - YAML definition document loading
//! - Typed schema items (int, number, bool, string, array, object)
//! - Validating parse of the `definitions` block, with inline nested types
//!   and `#Name` references to other definitions
//! - An insertion-ordered intermediate representation for code emitters

pub mod error;
pub mod ir;
pub mod item_ref;
pub mod keyword;
pub mod loader;
pub mod parser;
pub mod raw;
pub mod reference;
pub mod types;
pub mod validation;

pub use error::{LoadError, SchemaError, ValidationError};
pub use ir::SchemaIr;
pub use item_ref::ItemRef;
pub use parser::{Parser, parse_document};
pub use types::{
    ArrayItem, ArrayType, BoolItem, IntItem, IntType, ItemCommon, ItemKind, NumberItem,
    NumberType, ObjectItem, SchemaItem, StringEnum, StringItem,
};
pub use validation::validate_references;

/// Loads and parses a definition document from a YAML string.
///
/// # Arguments
/// * `yaml` - Document content
///
/// # Returns
/// The table of parsed definitions.
///
/// # Errors
/// Returns `SchemaError` if loading or parsing fails.
pub fn parse_str(yaml: &str) -> Result<SchemaIr, SchemaError> {
    let document = loader::load_str(yaml)?;
    Ok(parse_document(&document)?)
}

/// Loads and parses a definition document from a YAML file.
///
/// # Errors
/// Returns `SchemaError` if reading, loading or parsing fails.
pub fn parse_file(path: &std::path::Path) -> Result<SchemaIr, SchemaError> {
    let document = loader::load_file(path)?;
    Ok(parse_document(&document)?)
}
