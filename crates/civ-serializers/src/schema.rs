//! JSON Schemas of every record's wire representation.
//!
//! The `SchemaRegistry` builds JSON Schemas from civ-core records at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use civ_core::entities::{
    Group, GroupEvent, GroupImage, GroupMember, GroupResource, GroupTopic, Organization,
    OrganizationApplication, OrganizationEvent, OrganizationImage, OrganizationMember,
    OrganizationResource, OrganizationTask, OrganizationTopic, Status, StatusEntityType,
};
use civ_core::record::Record;
use schemars::schema_for;

use crate::error::SchemaError;

/// Schemas keyed by record name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a record's schema under its record name, converting the `schemars`
/// output to a `serde_json::Value`. Panics if `serde_json::to_value` fails
/// (should be infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $ty:ty) => {
        $map.insert(
            <$ty as Record>::NAME,
            serde_json::to_value(schema_for!($ty)).unwrap(),
        );
    };
}

impl SchemaRegistry {
    /// Build a registry containing the schema of every record.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, Organization);
        register!(schemas, OrganizationApplication);
        register!(schemas, OrganizationEvent);
        register!(schemas, OrganizationMember);
        register!(schemas, OrganizationImage);
        register!(schemas, OrganizationResource);
        register!(schemas, OrganizationTask);
        register!(schemas, OrganizationTopic);
        register!(schemas, Group);
        register!(schemas, GroupImage);
        register!(schemas, GroupEvent);
        register!(schemas, GroupMember);
        register!(schemas, GroupResource);
        register!(schemas, GroupTopic);
        register!(schemas, Status);
        register!(schemas, StatusEntityType);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SerializerRegistry;
    use civ_core::ids::RecordId;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        assert_eq!(registry().schema_count(), 16);
    }

    #[test]
    fn schema_names_match_serializer_names() {
        assert_eq!(registry().list(), SerializerRegistry::new().list());
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn validate_valid_member() {
        let member = OrganizationMember {
            id: Some(RecordId::Int(1)),
            org_id: RecordId::Int(5),
            user_id: RecordId::from("u-9"),
            is_owner: Some(false),
            is_admin: None,
            is_comms: None,
        };
        let json = serde_json::to_value(&member).unwrap();
        assert!(registry().validate("organization_member", &json).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let invalid = serde_json::json!({
            "org_id": 5
            // "user_id" is missing
        });
        let result = registry().validate("organization_member", &invalid);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(!errors.is_empty());
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_wrong_id_shape() {
        let invalid = serde_json::json!({"group_id": [1], "topic_id": 2});
        assert!(registry().validate("group_topic", &invalid).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
