//! Existence lookups against the record store.
//!
//! The store itself lives outside this crate. Serializers only see the
//! [`RecordLookup`] seam; [`RecordIndex`] is an in-memory implementation for
//! tests and offline validation.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use civ_core::enums::EntityType;
use civ_core::ids::RecordId;

use crate::error::LoadError;

/// Read-only check that `id` names a live record of type `entity`.
pub trait RecordLookup: Send + Sync {
    fn exists(&self, entity: EntityType, id: &RecordId) -> bool;
}

impl<F> RecordLookup for F
where
    F: Fn(EntityType, &RecordId) -> bool + Send + Sync,
{
    fn exists(&self, entity: EntityType, id: &RecordId) -> bool {
        self(entity, id)
    }
}

/// In-memory set of known record ids per entity type.
///
/// Fixture format:
///
/// ```json
/// { "organization": [5, "acme"], "user": [9] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordIndex {
    records: HashMap<EntityType, HashSet<RecordId>>,
}

impl RecordIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: EntityType, id: impl Into<RecordId>) {
        self.records.entry(entity).or_default().insert(id.into());
    }

    #[must_use]
    pub fn with(mut self, entity: EntityType, id: impl Into<RecordId>) -> Self {
        self.insert(entity, id);
        self
    }

    /// Number of ids known for `entity`.
    #[must_use]
    pub fn count(&self, entity: EntityType) -> usize {
        self.records.get(&entity).map_or(0, HashSet::len)
    }

    /// Parse a JSON fixture.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Fixture` if the JSON is malformed or names an
    /// unknown entity type.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let records: HashMap<EntityType, HashSet<RecordId>> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Read and parse a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, or
    /// `LoadError::Fixture` if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl RecordLookup for RecordIndex {
    fn exists(&self, entity: EntityType, id: &RecordId) -> bool {
        self.records
            .get(&entity)
            .is_some_and(|ids| ids.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn index_matches_type_and_id() {
        let index = RecordIndex::new()
            .with(EntityType::Organization, 5)
            .with(EntityType::User, "u-9");

        assert!(index.exists(EntityType::Organization, &RecordId::Int(5)));
        assert!(index.exists(EntityType::User, &RecordId::from("u-9")));
        assert!(!index.exists(EntityType::User, &RecordId::Int(5)));
        assert!(!index.exists(EntityType::Group, &RecordId::Int(5)));
    }

    #[test]
    fn integer_and_text_ids_are_distinct() {
        let index = RecordIndex::new().with(EntityType::Topic, 1);
        assert!(!index.exists(EntityType::Topic, &RecordId::from("1")));
    }

    #[test]
    fn parses_fixture_json() {
        let index =
            RecordIndex::from_json_str(r#"{"organization": [5, "acme"], "user": [9]}"#).unwrap();
        assert_eq!(index.count(EntityType::Organization), 2);
        assert_eq!(index.count(EntityType::User), 1);
        assert_eq!(index.count(EntityType::Event), 0);
        assert!(index.exists(EntityType::Organization, &RecordId::from("acme")));
    }

    #[test]
    fn fixture_rejects_unknown_entity_type() {
        let result = RecordIndex::from_json_str(r#"{"planet": [1]}"#);
        assert!(matches!(result, Err(LoadError::Fixture(_))));
    }

    #[test]
    fn loads_fixture_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"resource": [1, 2, 3]}}"#).unwrap();

        let index = RecordIndex::from_path(file.path()).unwrap();
        assert_eq!(index.count(EntityType::Resource), 3);
    }

    #[test]
    fn missing_fixture_file_is_io_error() {
        let result = RecordIndex::from_path(Path::new("/nonexistent/records.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn closures_are_lookups() {
        let lookup = |entity: EntityType, id: &RecordId| {
            entity == EntityType::Event && *id == RecordId::Int(3)
        };
        assert!(lookup.exists(EntityType::Event, &RecordId::Int(3)));
        assert!(!lookup.exists(EntityType::Event, &RecordId::Int(4)));
    }
}
