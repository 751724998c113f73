//! # civ-serializers
//!
//! Serializers for organization, group, and status records.
//!
//! This crate provides:
//! - [`Serializer`]: the shared validate pipeline (drop read-only and
//!   undeclared keys, decode declared fields, run cross-record checks)
//! - [`RecordSerializer`] for pass-through records and [`JoinSerializer`] for
//!   records whose foreign ids must resolve
//! - The [`RecordLookup`] and [`Translate`] seams injected per call through
//!   [`ValidationContext`]
//! - [`SerializerRegistry`] and [`SchemaRegistry`] for name-based access
//!
//! ## Architecture
//!
//! Record types and their field lists live in `civ-core`. Persistence, the
//! record store behind [`RecordLookup`], and translation catalogs are owned by
//! the caller.

pub mod context;
pub mod error;
pub mod lookup;
pub mod messages;
pub mod registry;
pub mod schema;
pub mod serializer;

pub use context::{ValidationContext, ValidationPolicy};
pub use error::{
    ErrorKind, FieldError, LoadError, RegistryError, RepresentationError, SchemaError,
    ValidationError,
};
pub use lookup::{RecordIndex, RecordLookup};
pub use messages::{Catalog, Translate, Untranslated};
pub use registry::{DynSerializer, SerializerRegistry};
pub use schema::SchemaRegistry;
pub use serializer::*;
