//! Error types for schema loading and validation.

use thiserror::Error;

/// Error raised when a definition document does not match the schema grammar.
///
/// Every validation failure in a parse pass is reported through this type and
/// aborts the whole document. The optional context names the item in which
/// the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.context, .message))]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub message: String,
    /// Name of the item being parsed when the error occurred.
    pub context: Option<String>,
}

fn render(context: &Option<String>, message: &str) -> String {
    match context.as_deref() {
        Some(context) if !context.is_empty() => format!("{context}: {message}"),
        _ => message.to_string(),
    }
}

impl ValidationError {
    /// Creates an error without item context.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
        }
    }

    /// Creates an error raised while parsing the named item.
    pub fn with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl std::fmt::Display, context: impl Into<String>) -> Self {
        Self::with_context(format!("unknown field '{field}'"), context)
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(name: impl std::fmt::Display) -> Self {
        Self::new(format!("{name} is defined more than once"))
    }
}

/// Error type for reading a definition document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax error or duplicate mapping key.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The source contained no document.
    #[error("no YAML document found")]
    Empty,
}

/// Error type for the load, parse and check pipeline.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Loading error.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reference to a name that is not defined in the document.
    #[error("{item}: reference '#{reference}' does not name any definition")]
    UnresolvedReference {
        /// Referenced definition name, without the sigil.
        reference: String,
        /// Name of the item holding the reference.
        item: String,
    },
}
