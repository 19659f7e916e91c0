//! Schema item definitions.
//!
//! This module contains the data structures representing the definable
//! types of a schema document (int, number, bool, string, array and object)
//! together with the field grammar and validating parse of each kind.

use crate::error::ValidationError;
use crate::item_ref::ItemRef;
use crate::keyword::{Keyword, parse_keyword};
use crate::raw::{RawFields, describe, is_falsy};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde_yaml::Value;

/// Field names recognized in a definition body.
pub mod keys {
    /// Kind of the item.
    pub const TYPE: &str = "type";
    /// Free text description.
    pub const DESCRIPTION: &str = "description";
    /// Int and number storage format.
    pub const FORMAT: &str = "format";
    /// Allowed string values.
    pub const ENUM: &str = "enum";
    /// Array flavour.
    pub const ARRAY_TYPE: &str = "array_type";
    /// Array element type.
    pub const ITEMS: &str = "items";
    /// Object properties.
    pub const PROPERTIES: &str = "properties";
    /// Required object properties.
    pub const REQUIRED: &str = "required";

    /// Fields every kind accepts.
    pub const COMMON: &[&str] = &[TYPE, DESCRIPTION];
}

/// Suffix appended to an array's name to name its anonymous element type.
pub const ITEMS_SUFFIX: &str = "Items";

/// Kind of a schema item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Integer.
    Int,
    /// Floating point number.
    Number,
    /// Boolean.
    Bool,
    /// String, optionally restricted to an enumeration.
    String,
    /// Array or set of a single element type.
    Array,
    /// Object with named properties.
    Object,
}

impl Keyword for ItemKind {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("int", Self::Int),
        ("number", Self::Number),
        ("bool", Self::Bool),
        ("string", Self::String),
        ("array", Self::Array),
        ("object", Self::Object),
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl ItemKind {
    /// Reads the `type` field of a raw definition.
    ///
    /// # Errors
    /// Returns `ValidationError` if `type` is missing or names no kind.
    pub fn from_fields(fields: &RawFields, item_name: &str) -> Result<Self, ValidationError> {
        let value = fields.get(keys::TYPE).ok_or_else(|| {
            ValidationError::with_context(format!("field '{}' is required", keys::TYPE), item_name)
        })?;
        parse_keyword(value, keys::TYPE, Some(item_name))
    }

    /// Returns the fields this kind accepts besides [`keys::COMMON`].
    #[must_use]
    pub const fn extra_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Int => IntItem::FIELDS,
            Self::Number => NumberItem::FIELDS,
            Self::Bool => BoolItem::FIELDS,
            Self::String => StringItem::FIELDS,
            Self::Array => ArrayItem::FIELDS,
            Self::Object => ObjectItem::FIELDS,
        }
    }

    /// Returns true if `field` may appear in a definition of this kind.
    #[must_use]
    pub fn allows(&self, field: &str) -> bool {
        keys::COMMON.contains(&field) || self.extra_fields().contains(&field)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntType {
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Signed 32-bit integer.
    #[default]
    Int32,
    /// Signed 64-bit integer.
    Int64,
}

impl Keyword for IntType {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("uint32", Self::Uint32),
        ("uint64", Self::Uint64),
        ("int32", Self::Int32),
        ("int64", Self::Int64),
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
        }
    }
}

/// Floating point storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    /// 32-bit floating point.
    #[default]
    Float,
    /// 64-bit floating point.
    Double,
}

impl Keyword for NumberType {
    const VALUES: &'static [(&'static str, Self)] =
        &[("float", Self::Float), ("double", Self::Double)];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// Array flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayType {
    /// Ordered, duplicates allowed.
    #[default]
    Array,
    /// Unordered, unique elements.
    Set,
}

impl Keyword for ArrayType {
    const VALUES: &'static [(&'static str, Self)] = &[("array", Self::Array), ("set", Self::Set)];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Set => "set",
        }
    }
}

/// Fields shared by every item kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ItemCommon {
    /// Item name. Anonymous nested items carry a synthesized name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemCommon {
    /// Creates an item header with no description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Validates the field names of a raw definition and reads `description`.
    ///
    /// `extra_fields` lists the fields the item's kind accepts on top of
    /// `type` and `description`.
    ///
    /// # Errors
    /// Returns `ValidationError` on an unknown field or a non-string description.
    pub fn parse(
        name: &str,
        fields: &RawFields,
        extra_fields: &[&str],
    ) -> Result<Self, ValidationError> {
        for key in fields.keys() {
            let known = key
                .as_str()
                .is_some_and(|k| keys::COMMON.contains(&k) || extra_fields.contains(&k));
            if !known {
                return Err(ValidationError::unknown_field(describe(key), name));
            }
        }

        let description = match fields.get(keys::DESCRIPTION) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(ValidationError::with_context(
                    "description must be a string",
                    name,
                ));
            }
        };

        Ok(Self {
            name: name.to_string(),
            description,
        })
    }
}

/// Integer item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntItem {
    /// Common fields.
    #[serde(flatten)]
    pub common: ItemCommon,
    /// Storage format.
    #[serde(rename = "format")]
    pub int_type: IntType,
}

impl IntItem {
    /// Fields accepted besides `type` and `description`.
    pub const FIELDS: &'static [&'static str] = &[keys::FORMAT];

    /// Parses an integer definition.
    ///
    /// # Errors
    /// Returns `ValidationError` if the definition is malformed.
    pub fn parse(name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        let common = ItemCommon::parse(name, fields, Self::FIELDS)?;
        let int_type = match fields.get(keys::FORMAT) {
            Some(value) => parse_keyword(value, keys::FORMAT, Some(name))?,
            None => IntType::default(),
        };
        Ok(Self { common, int_type })
    }
}

/// Floating point item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberItem {
    /// Common fields.
    #[serde(flatten)]
    pub common: ItemCommon,
    /// Storage format.
    #[serde(rename = "format")]
    pub number_type: NumberType,
}

impl NumberItem {
    /// Fields accepted besides `type` and `description`.
    pub const FIELDS: &'static [&'static str] = &[keys::FORMAT];

    /// Parses a number definition.
    ///
    /// # Errors
    /// Returns `ValidationError` if the definition is malformed.
    pub fn parse(name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        let common = ItemCommon::parse(name, fields, Self::FIELDS)?;
        let number_type = match fields.get(keys::FORMAT) {
            Some(value) => parse_keyword(value, keys::FORMAT, Some(name))?,
            None => NumberType::default(),
        };
        Ok(Self {
            common,
            number_type,
        })
    }
}

/// Boolean item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoolItem {
    /// Common fields.
    #[serde(flatten)]
    pub common: ItemCommon,
}

impl BoolItem {
    /// Fields accepted besides `type` and `description`.
    pub const FIELDS: &'static [&'static str] = &[];

    /// Parses a bool definition.
    ///
    /// # Errors
    /// Returns `ValidationError` if the definition is malformed.
    pub fn parse(name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        Ok(Self {
            common: ItemCommon::parse(name, fields, Self::FIELDS)?,
        })
    }
}

/// Allowed values of a string item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringEnum {
    /// Values in declaration order. Never empty, no duplicates.
    pub enum_list: Vec<String>,
}

impl StringEnum {
    /// Returns true if `value` is one of the allowed values.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.enum_list.iter().any(|v| v == value)
    }
}

/// String item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringItem {
    /// Common fields.
    #[serde(flatten)]
    pub common: ItemCommon,
    /// Allowed values; `None` when the string is unconstrained.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<StringEnum>,
}

impl StringItem {
    /// Fields accepted besides `type` and `description`.
    pub const FIELDS: &'static [&'static str] = &[keys::ENUM];

    /// Parses a string definition.
    ///
    /// # Errors
    /// Returns `ValidationError` if the definition is malformed.
    pub fn parse(name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        let common = ItemCommon::parse(name, fields, Self::FIELDS)?;
        let enumeration = fields
            .get(keys::ENUM)
            .map(|value| Self::parse_enum(name, value))
            .transpose()?;
        Ok(Self {
            common,
            enumeration,
        })
    }

    fn parse_enum(name: &str, value: &Value) -> Result<StringEnum, ValidationError> {
        let not_a_list = || ValidationError::with_context("enum must be a list of strings", name);

        let values = value.as_sequence().ok_or_else(not_a_list)?;
        if values.is_empty() {
            return Err(ValidationError::with_context("empty enum", name));
        }

        let mut enum_list: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            let value = value.as_str().ok_or_else(not_a_list)?;
            if enum_list.iter().any(|v| v == value) {
                return Err(ValidationError::with_context(
                    format!("duplicate enum value '{value}'"),
                    name,
                ));
            }
            enum_list.push(value.to_string());
        }

        Ok(StringEnum { enum_list })
    }
}

/// Array item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayItem {
    /// Common fields.
    #[serde(flatten)]
    pub common: ItemCommon,
    /// Array flavour.
    pub array_type: ArrayType,
    /// Element type.
    pub items: ItemRef,
}

impl ArrayItem {
    /// Fields accepted besides `type` and `description`.
    pub const FIELDS: &'static [&'static str] = &[keys::ARRAY_TYPE, keys::ITEMS];

    /// Returns the name given to an anonymous element type of the named array.
    #[must_use]
    pub fn items_name(array_name: &str) -> String {
        format!("{array_name}{ITEMS_SUFFIX}")
    }

    /// Parses an array definition.
    ///
    /// # Errors
    /// Returns `ValidationError` if the definition is malformed, including
    /// any error in an inline element type.
    pub fn parse(name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        let common = ItemCommon::parse(name, fields, Self::FIELDS)?;

        let items = match fields.get(keys::ITEMS) {
            Some(value) if !is_falsy(value) => {
                ItemRef::parse(value, keys::ITEMS, name, &Self::items_name(name))?
            }
            _ => {
                return Err(ValidationError::with_context(
                    format!("array requires field {}", keys::ITEMS),
                    name,
                ));
            }
        };

        let array_type = match fields.get(keys::ARRAY_TYPE) {
            Some(value) => parse_keyword(value, keys::ARRAY_TYPE, Some(name))?,
            None => ArrayType::default(),
        };

        Ok(Self {
            common,
            array_type,
            items,
        })
    }
}

/// Object item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectItem {
    /// Common fields.
    #[serde(flatten)]
    pub common: ItemCommon,
    /// Properties in declaration order. Never empty.
    pub properties: IndexMap<String, ItemRef>,
    /// Names of required properties, each a key of `properties`.
    pub required: IndexSet<String>,
}

impl ObjectItem {
    /// Fields accepted besides `type` and `description`.
    pub const FIELDS: &'static [&'static str] = &[keys::PROPERTIES, keys::REQUIRED];

    /// Parses an object definition.
    ///
    /// Inline property types are named after the property.
    ///
    /// # Errors
    /// Returns `ValidationError` if the definition is malformed, including
    /// any error in an inline property type.
    pub fn parse(name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        let common = ItemCommon::parse(name, fields, Self::FIELDS)?;
        let properties = Self::parse_properties(name, fields)?;
        let required = Self::parse_required(name, fields, &properties)?;
        Ok(Self {
            common,
            properties,
            required,
        })
    }

    /// Returns true if the named property is required.
    #[must_use]
    pub fn is_required(&self, property: &str) -> bool {
        self.required.contains(property)
    }

    fn parse_properties(
        name: &str,
        fields: &RawFields,
    ) -> Result<IndexMap<String, ItemRef>, ValidationError> {
        let value = fields.get(keys::PROPERTIES).ok_or_else(|| {
            ValidationError::with_context(
                format!("field '{}' is required", keys::PROPERTIES),
                name,
            )
        })?;

        let raw_properties = value
            .as_mapping()
            .filter(|m| !m.is_empty())
            .ok_or_else(|| {
                ValidationError::with_context(
                    format!("{} must be a non-empty mapping", keys::PROPERTIES),
                    name,
                )
            })?;

        let mut properties = IndexMap::with_capacity(raw_properties.len());
        for (key, value) in raw_properties {
            let property = key.as_str().ok_or_else(|| {
                ValidationError::with_context(
                    format!("property name must be a string, got {}", describe(key)),
                    name,
                )
            })?;
            let field = format!("property '{property}'");
            let item = ItemRef::parse(value, &field, name, property)?;
            properties.insert(property.to_string(), item);
        }

        Ok(properties)
    }

    fn parse_required(
        name: &str,
        fields: &RawFields,
        properties: &IndexMap<String, ItemRef>,
    ) -> Result<IndexSet<String>, ValidationError> {
        let mut required = IndexSet::new();
        let value = match fields.get(keys::REQUIRED) {
            Some(value) if !is_falsy(value) => value,
            _ => return Ok(required),
        };

        let not_a_list = || {
            ValidationError::with_context(
                format!("'{}' must be a list of property names", keys::REQUIRED),
                name,
            )
        };
        for entry in value.as_sequence().ok_or_else(not_a_list)? {
            let property = entry.as_str().ok_or_else(not_a_list)?;
            if !properties.contains_key(property) {
                return Err(ValidationError::with_context(
                    format!("required property '{property}' is not declared in properties"),
                    name,
                ));
            }
            required.insert(property.to_string());
        }

        Ok(required)
    }
}

/// A parsed schema item of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaItem {
    /// Integer item.
    Int(IntItem),
    /// Number item.
    Number(NumberItem),
    /// Bool item.
    Bool(BoolItem),
    /// String item.
    String(StringItem),
    /// Array item.
    Array(ArrayItem),
    /// Object item.
    Object(ObjectItem),
}

impl SchemaItem {
    /// Parses a raw definition, dispatching on its `type` field.
    ///
    /// # Errors
    /// Returns `ValidationError` if `type` is missing or invalid, or if the
    /// body does not match the kind's grammar.
    pub fn from_fields(name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        let kind = ItemKind::from_fields(fields, name)?;
        Self::parse(kind, name, fields)
    }

    /// Parses a raw definition as the given kind.
    ///
    /// # Errors
    /// Returns `ValidationError` if the body does not match the kind's grammar.
    pub fn parse(kind: ItemKind, name: &str, fields: &RawFields) -> Result<Self, ValidationError> {
        Ok(match kind {
            ItemKind::Int => Self::Int(IntItem::parse(name, fields)?),
            ItemKind::Number => Self::Number(NumberItem::parse(name, fields)?),
            ItemKind::Bool => Self::Bool(BoolItem::parse(name, fields)?),
            ItemKind::String => Self::String(StringItem::parse(name, fields)?),
            ItemKind::Array => Self::Array(ArrayItem::parse(name, fields)?),
            ItemKind::Object => Self::Object(ObjectItem::parse(name, fields)?),
        })
    }

    /// Returns the common fields.
    #[must_use]
    pub const fn common(&self) -> &ItemCommon {
        match self {
            Self::Int(i) => &i.common,
            Self::Number(n) => &n.common,
            Self::Bool(b) => &b.common,
            Self::String(s) => &s.common,
            Self::Array(a) => &a.common,
            Self::Object(o) => &o.common,
        }
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.common().name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.common().description.as_deref()
    }

    /// Returns the kind of the item.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Int(_) => ItemKind::Int,
            Self::Number(_) => ItemKind::Number,
            Self::Bool(_) => ItemKind::Bool,
            Self::String(_) => ItemKind::String,
            Self::Array(_) => ItemKind::Array,
            Self::Object(_) => ItemKind::Object,
        }
    }

    /// Returns the item references held directly by this item.
    #[must_use]
    pub fn children(&self) -> Vec<&ItemRef> {
        match self {
            Self::Array(a) => vec![&a.items],
            Self::Object(o) => o.properties.values().collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(yaml: &str) -> RawFields {
        serde_yaml::from_str(yaml).expect("Failed to load test fields")
    }

    #[test]
    fn test_parse_common() {
        let cases: &[(&str, Option<&str>, bool)] = &[
            ("{}", None, false),
            ("{description: desc}", Some("desc"), false),
            ("{description: 1}", None, true),
            ("{field: x}", None, true),
        ];

        for (yaml, expected, is_err_expected) in cases {
            match ItemCommon::parse("Item", &fields(yaml), &[]) {
                Ok(common) => {
                    assert!(!is_err_expected, "expected error for {yaml}");
                    assert_eq!(common.name, "Item");
                    assert_eq!(common.description.as_deref(), *expected);
                }
                Err(e) => assert!(*is_err_expected, "unexpected error for {yaml}: {e}"),
            }
        }
    }

    #[test]
    fn test_unknown_field_message() {
        let err = IntItem::parse("Age", &fields("{extra: value}")).unwrap_err();
        assert_eq!(err.to_string(), "Age: unknown field 'extra'");
    }

    #[test]
    fn test_bad_description_message() {
        let err = BoolItem::parse("Flag", &fields("{description: [a]}")).unwrap_err();
        assert_eq!(err.to_string(), "Flag: description must be a string");
    }

    #[test]
    fn test_every_kind_accepts_common_fields() {
        let raw = fields("{type: bool, description: text}");
        let item = BoolItem::parse("Flag", &raw).expect("Failed to parse");
        assert_eq!(item.common.description.as_deref(), Some("text"));
    }

    #[test]
    fn test_parse_int() {
        let cases: &[(&str, Option<IntType>)] = &[
            ("{}", Some(IntType::Int32)),
            ("{format: int32}", Some(IntType::Int32)),
            ("{format: int64}", Some(IntType::Int64)),
            ("{format: uint32}", Some(IntType::Uint32)),
            ("{format: uint64}", Some(IntType::Uint64)),
            ("{format: int33}", None),
            ("{extra: value}", None),
        ];

        for (yaml, expected) in cases {
            let result = IntItem::parse("Integer", &fields(yaml));
            match expected {
                Some(int_type) => {
                    let item = result.expect("Failed to parse int");
                    assert_eq!(item.common.name, "Integer");
                    assert_eq!(item.int_type, *int_type);
                }
                None => assert!(result.is_err(), "expected error for {yaml}"),
            }
        }
    }

    #[test]
    fn test_bad_format_message() {
        let err = IntItem::parse("Age", &fields("{format: int33}")).unwrap_err();
        assert_eq!(err.to_string(), "Age: field format has invalid value 'int33'");
    }

    #[test]
    fn test_parse_number() {
        let cases: &[(&str, Option<NumberType>)] = &[
            ("{}", Some(NumberType::Float)),
            ("{format: float}", Some(NumberType::Float)),
            ("{format: double}", Some(NumberType::Double)),
            ("{format: int}", None),
            ("{extra: value}", None),
        ];

        for (yaml, expected) in cases {
            let result = NumberItem::parse("Number", &fields(yaml));
            match expected {
                Some(number_type) => {
                    assert_eq!(result.expect("Failed to parse number").number_type, *number_type);
                }
                None => assert!(result.is_err(), "expected error for {yaml}"),
            }
        }
    }

    #[test]
    fn test_bool_rejects_format() {
        assert!(BoolItem::parse("Flag", &fields("{}")).is_ok());
        assert!(BoolItem::parse("Flag", &fields("{format: int32}")).is_err());
    }

    #[test]
    fn test_parse_string() {
        let cases: Vec<(&str, Option<Option<Vec<&str>>>)> = vec![
            ("{}", Some(None)),
            ("{enum: [value1, value2]}", Some(Some(vec!["value1", "value2"]))),
            ("{enum: [b, a, c]}", Some(Some(vec!["b", "a", "c"]))),
            ("{enum: []}", None),
            ("{enum: {}}", None),
            ("{enum: value}", None),
            ("{enum: [1, 2, 3]}", None),
            ("{enum: [a, a]}", None),
            ("{enum: value, extra: value}", None),
        ];

        for (yaml, expected) in cases {
            let result = StringItem::parse("String", &fields(yaml));
            match expected {
                Some(enum_list) => {
                    let item = result.expect("Failed to parse string");
                    let parsed: Option<Vec<&str>> = item
                        .enumeration
                        .as_ref()
                        .map(|e| e.enum_list.iter().map(String::as_str).collect());
                    assert_eq!(parsed, enum_list, "for {yaml}");
                }
                None => assert!(result.is_err(), "expected error for {yaml}"),
            }
        }
    }

    #[test]
    fn test_string_enum_messages() {
        let err = StringItem::parse("Color", &fields("{enum: []}")).unwrap_err();
        assert_eq!(err.to_string(), "Color: empty enum");

        let err = StringItem::parse("Color", &fields("{enum: [red, 1]}")).unwrap_err();
        assert_eq!(err.to_string(), "Color: enum must be a list of strings");

        let err = StringItem::parse("Color", &fields("{enum: [red, red]}")).unwrap_err();
        assert_eq!(err.to_string(), "Color: duplicate enum value 'red'");
    }

    #[test]
    fn test_string_enum_contains() {
        let item = StringItem::parse("Color", &fields("{enum: [red, green]}")).unwrap();
        let enumeration = item.enumeration.unwrap();
        assert!(enumeration.contains("red"));
        assert!(!enumeration.contains("blue"));
    }

    #[test]
    fn test_parse_array_inline_items() {
        let item = ArrayItem::parse("Tags", &fields("{items: {type: int}}")).expect("Failed to parse");
        assert_eq!(item.array_type, ArrayType::Array);

        let nested = item.items.as_item().expect("expected an owned item");
        assert_eq!(nested.name(), "TagsItems");
        match nested {
            SchemaItem::Int(int) => assert_eq!(int.int_type, IntType::Int32),
            other => panic!("unexpected item {other:?}"),
        }
    }

    #[test]
    fn test_parse_array_reference() {
        let item = ArrayItem::parse("Tags", &fields("{items: '#Foo', array_type: set}"))
            .expect("Failed to parse");
        assert_eq!(item.items.as_reference(), Some("Foo"));
        assert_eq!(item.array_type, ArrayType::Set);
    }

    #[test]
    fn test_parse_array_errors() {
        let cases = [
            ("{}", "Tags: array requires field items"),
            ("{items: {}}", "Tags: array requires field items"),
            ("{items: ''}", "Tags: array requires field items"),
            (
                "{items: Foo}",
                "Tags: items must be an object or a reference, got Foo",
            ),
            (
                "{items: {type: int}, array_type: list}",
                "Tags: field array_type has invalid value 'list'",
            ),
            ("{items: {format: int32}}", "TagsItems: field 'type' is required"),
            (
                "{items: {type: int, format: int8}}",
                "TagsItems: field format has invalid value 'int8'",
            ),
        ];

        for (yaml, message) in cases {
            let err = ArrayItem::parse("Tags", &fields(yaml)).unwrap_err();
            assert_eq!(err.to_string(), message, "for {yaml}");
        }
    }

    #[test]
    fn test_array_items_match_independent_parse() {
        let raw = fields("{items: {type: string, enum: [a, b], description: letter}}");
        let array = ArrayItem::parse("Letters", &raw).expect("Failed to parse");

        let items_fields = fields("{type: string, enum: [a, b], description: letter}");
        let expected = SchemaItem::from_fields("LettersItems", &items_fields).unwrap();
        assert_eq!(array.items.as_item(), Some(&expected));
    }

    #[test]
    fn test_parse_object() {
        let raw = fields(
            r#"
properties:
  id: {type: int, format: uint64}
  owner: '#Person'
  tags:
    type: array
    items: {type: string}
required: [id, owner]
"#,
        );
        let object = ObjectItem::parse("Record", &raw).expect("Failed to parse");

        let names: Vec<&str> = object.properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["id", "owner", "tags"]);

        let id = object.properties["id"].as_item().unwrap();
        assert_eq!(id.name(), "id");
        assert_eq!(
            id,
            &SchemaItem::from_fields("id", &fields("{type: int, format: uint64}")).unwrap()
        );

        assert_eq!(object.properties["owner"].as_reference(), Some("Person"));

        let tags = object.properties["tags"].as_item().unwrap();
        match tags {
            SchemaItem::Array(array) => {
                assert_eq!(array.items.as_item().unwrap().name(), "tagsItems");
            }
            other => panic!("unexpected item {other:?}"),
        }

        assert!(object.is_required("id"));
        assert!(object.is_required("owner"));
        assert!(!object.is_required("tags"));
    }

    #[test]
    fn test_parse_object_required() {
        let cases: Vec<(&str, Option<Vec<&str>>)> = vec![
            ("{properties: {x: {type: bool}}}", Some(vec![])),
            ("{properties: {x: {type: bool}}, required: []}", Some(vec![])),
            ("{properties: {x: {type: bool}}, required: ~}", Some(vec![])),
            ("{properties: {x: {type: bool}}, required: [x]}", Some(vec!["x"])),
            ("{properties: {x: {type: bool}}, required: [x, x]}", Some(vec!["x"])),
            ("{properties: {x: {type: bool}}, required: [y]}", None),
            ("{properties: {x: {type: bool}}, required: [1]}", None),
            ("{properties: {x: {type: bool}}, required: x}", None),
        ];

        for (yaml, expected) in cases {
            let result = ObjectItem::parse("Point", &fields(yaml));
            match expected {
                Some(names) => {
                    let object = result.expect("Failed to parse object");
                    let required: Vec<&str> = object.required.iter().map(String::as_str).collect();
                    assert_eq!(required, names, "for {yaml}");
                }
                None => assert!(result.is_err(), "expected error for {yaml}"),
            }
        }
    }

    #[test]
    fn test_parse_object_errors() {
        let cases = [
            ("{}", "Point: field 'properties' is required"),
            ("{properties: {}}", "Point: properties must be a non-empty mapping"),
            ("{properties: [x]}", "Point: properties must be a non-empty mapping"),
            (
                "{properties: {x: 3}}",
                "Point: property 'x' must be an object or a reference, got 3",
            ),
            (
                "{properties: {x: {type: bool}}, required: [y]}",
                "Point: required property 'y' is not declared in properties",
            ),
            (
                "{properties: {x: {type: bool}}, required: y}",
                "Point: 'required' must be a list of property names",
            ),
            ("{properties: {x: {type: int, extra: 1}}}", "x: unknown field 'extra'"),
        ];

        for (yaml, message) in cases {
            let err = ObjectItem::parse("Point", &fields(yaml)).unwrap_err();
            assert_eq!(err.to_string(), message, "for {yaml}");
        }
    }

    #[test]
    fn test_nested_arrays() {
        let raw = fields("{items: {type: array, items: {type: array, items: {type: number}}}}");
        let array = ArrayItem::parse("Matrix", &raw).expect("Failed to parse");

        let inner = array.items.as_item().unwrap();
        assert_eq!(inner.name(), "MatrixItems");
        let children = inner.children();
        let innermost = children[0].as_item().unwrap();
        assert_eq!(innermost.name(), "MatrixItemsItems");
        assert_eq!(innermost.children()[0].as_item().unwrap().kind(), ItemKind::Number);
    }

    #[test]
    fn test_item_kind_from_fields() {
        assert_eq!(
            ItemKind::from_fields(&fields("{type: object}"), "X").unwrap(),
            ItemKind::Object
        );

        let err = ItemKind::from_fields(&fields("{format: int32}"), "X").unwrap_err();
        assert_eq!(err.to_string(), "X: field 'type' is required");

        let err = ItemKind::from_fields(&fields("{type: item}"), "X").unwrap_err();
        assert_eq!(err.to_string(), "X: field type has invalid value 'item'");
    }

    #[test]
    fn test_allowed_fields() {
        assert!(ItemKind::Int.allows("format"));
        assert!(ItemKind::Int.allows("description"));
        assert!(!ItemKind::Int.allows("enum"));
        assert!(ItemKind::Array.allows("items"));
        assert!(!ItemKind::Bool.allows("format"));
        assert!(ItemKind::Object.allows("required"));
    }

    #[test]
    fn test_reparse_is_identical() {
        let raw = fields(
            "{type: object, description: d, properties: {a: {type: string, enum: [x]}, b: '#B'}, required: [a]}",
        );
        let first = SchemaItem::from_fields("Obj", &raw).unwrap();
        let second = SchemaItem::from_fields("Obj", &raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.kind(), ItemKind::Object);
        assert_eq!(first.description(), Some("d"));
    }
}
