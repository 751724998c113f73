//! Lookup of serializers by wire name.
//!
//! Outer layers that only know an entity by name (`"organization_member"`)
//! go through [`SerializerRegistry`], which erases each serializer's record
//! type behind [`DynSerializer`].

use std::collections::BTreeMap;

use civ_core::record::{Field, FieldMap, Record};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::{RegistryError, RepresentationError, ValidationError};
use crate::serializer::{
    GroupEventSerializer, GroupImageSerializer, GroupMemberSerializer, GroupResourceSerializer,
    GroupSerializer, GroupTopicSerializer, OrganizationApplicationSerializer,
    OrganizationEventSerializer, OrganizationImageSerializer, OrganizationMemberSerializer,
    OrganizationResourceSerializer, OrganizationSerializer, OrganizationTaskSerializer,
    OrganizationTopicSerializer, Serializer, StatusEntityTypeSerializer, StatusSerializer,
};

/// Object-safe view of a [`Serializer`].
pub trait DynSerializer: Send + Sync {
    fn name(&self) -> &'static str;

    fn fields(&self) -> &'static [Field];

    /// Validate a candidate mapping and return the validated mapping.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] produced by the serializer.
    fn validate_map(
        &self,
        data: FieldMap,
        ctx: &ValidationContext<'_>,
    ) -> Result<FieldMap, ValidationError>;

    /// Render a persisted record (full JSON form) as its wire representation.
    ///
    /// # Errors
    ///
    /// Returns `RepresentationError::Json` if `stored` does not deserialize
    /// into the record type.
    fn represent(&self, stored: Value) -> Result<FieldMap, RepresentationError>;
}

impl<S: Serializer> DynSerializer for S {
    fn name(&self) -> &'static str {
        S::Record::NAME
    }

    fn fields(&self) -> &'static [Field] {
        S::Record::FIELDS
    }

    fn validate_map(
        &self,
        data: FieldMap,
        ctx: &ValidationContext<'_>,
    ) -> Result<FieldMap, ValidationError> {
        self.validate(data, ctx).map(|validated| validated.into_data())
    }

    fn represent(&self, stored: Value) -> Result<FieldMap, RepresentationError> {
        let record: S::Record = serde_json::from_value(stored)?;
        self.to_representation(&record)
    }
}

/// All sixteen serializers keyed by record name.
pub struct SerializerRegistry {
    serializers: BTreeMap<&'static str, Box<dyn DynSerializer>>,
}

fn register(
    map: &mut BTreeMap<&'static str, Box<dyn DynSerializer>>,
    serializer: impl DynSerializer + 'static,
) {
    map.insert(serializer.name(), Box::new(serializer));
}

impl SerializerRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut serializers = BTreeMap::new();

        // --- Pass-through (6) ---
        register(&mut serializers, OrganizationSerializer::new());
        register(&mut serializers, OrganizationImageSerializer::new());
        register(&mut serializers, GroupSerializer::new());
        register(&mut serializers, GroupImageSerializer::new());
        register(&mut serializers, StatusSerializer::new());
        register(&mut serializers, StatusEntityTypeSerializer::new());

        // --- Join (10) ---
        register(&mut serializers, OrganizationApplicationSerializer::new());
        register(&mut serializers, OrganizationEventSerializer::new());
        register(&mut serializers, OrganizationMemberSerializer::new());
        register(&mut serializers, OrganizationResourceSerializer::new());
        register(&mut serializers, OrganizationTaskSerializer::new());
        register(&mut serializers, OrganizationTopicSerializer::new());
        register(&mut serializers, GroupEventSerializer::new());
        register(&mut serializers, GroupMemberSerializer::new());
        register(&mut serializers, GroupResourceSerializer::new());
        register(&mut serializers, GroupTopicSerializer::new());

        Self { serializers }
    }

    /// # Errors
    ///
    /// Returns `RegistryError::UnknownSerializer` for an unregistered name.
    pub fn get(&self, name: &str) -> Result<&dyn DynSerializer, RegistryError> {
        self.serializers
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| RegistryError::UnknownSerializer(name.to_string()))
    }

    /// Validate `data` with the serializer registered under `name`.
    ///
    /// # Errors
    ///
    /// `UnknownSerializer` for an unregistered name, `Validation` when the
    /// mapping is rejected.
    pub fn validate(
        &self,
        name: &str,
        data: FieldMap,
        ctx: &ValidationContext<'_>,
    ) -> Result<FieldMap, RegistryError> {
        Ok(self.get(name)?.validate_map(data, ctx)?)
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.serializers.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.serializers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty()
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
