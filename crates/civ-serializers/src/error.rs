//! Validation and registry error types.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Value cannot be coerced to the field's declared type.
    InvalidValue,
    /// Required value missing or blank.
    EmptyField,
    /// Referenced id does not resolve to an existing record.
    NotFound,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid_value",
            Self::EmptyField => "empty_field",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(field, message, kind)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub kind: ErrorKind,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.kind)
    }
}

/// A rejected candidate mapping. Always carries at least one [`FieldError`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Validation failed: {}", render_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn render_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// The first reported failure.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Whether any failure was reported for `field` with `kind`.
    #[must_use]
    pub fn has(&self, field: &str, kind: ErrorKind) -> bool {
        self.errors
            .iter()
            .any(|error| error.field == field && error.kind == kind)
    }

    /// Names of the failing fields, in report order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.field.as_str()).collect()
    }
}

/// Failure to turn a record into its wire representation.
#[derive(Debug, Error)]
pub enum RepresentationError {
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The record did not serialize to a JSON object.
    #[error("Record {0} did not serialize to an object")]
    NotAnObject(&'static str),
}

/// Errors from the serializer registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No serializer is registered under this name.
    #[error("Unknown serializer: {0}")]
    UnknownSerializer(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Representation(#[from] RepresentationError),
}

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

/// Errors loading record fixtures or message catalogs from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid record fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("Invalid message catalog: {0}")]
    Catalog(#[from] toml::de::Error),
}
