//! Cross-cutting error types for the civ crates.
//!
//! Field-level validation failures are not errors of this kind; they are
//! reported through `DecodeError` here and `ValidationError` in
//! `civ-serializers`.

use thiserror::Error;

/// Errors that can be raised by any civ crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a known entity type.
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),
}
