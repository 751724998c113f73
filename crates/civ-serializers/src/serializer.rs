//! Serializer pipeline and the two serializer shapes.
//!
//! Every serializer runs the same pipeline over a candidate mapping:
//!
//! 1. drop read-only and undeclared keys,
//! 2. decode each declared field to its type, collecting every failure,
//! 3. run the serializer's cross-record [`Serializer::check`].
//!
//! [`RecordSerializer`] has no cross-record checks. [`JoinSerializer`] checks
//! blank values and reference existence as declared by the record's
//! [`JoinRecord`] implementation.

use std::collections::HashSet;
use std::marker::PhantomData;

use civ_core::entities::{
    Group, GroupEvent, GroupImage, GroupMember, GroupResource, GroupTopic, Organization,
    OrganizationApplication, OrganizationEvent, OrganizationImage, OrganizationMember,
    OrganizationResource, OrganizationTask, OrganizationTopic, Status, StatusEntityType,
};
use civ_core::enums::EmptyIdPolicy;
use civ_core::ids::RecordId;
use civ_core::record::{DecodeError, FieldMap, Record};
use civ_core::references::JoinRecord;
use serde_json::Value;
use tracing::debug;

use crate::context::ValidationContext;
use crate::error::{ErrorKind, FieldError, RepresentationError, ValidationError};
use crate::messages::{FIELD_REQUIRED_MSGID, INVALID_VALUE_MSGID, NOT_FOUND_MSGID};

/// A mapping that passed validation, with its decoded record.
///
/// `data` holds exactly the writable, declared keys the caller sent, with
/// their values unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    data: FieldMap,
    record: T,
}

impl<T> Validated<T> {
    #[must_use]
    pub const fn data(&self) -> &FieldMap {
        &self.data
    }

    #[must_use]
    pub const fn record(&self) -> &T {
        &self.record
    }

    #[must_use]
    pub fn into_data(self) -> FieldMap {
        self.data
    }

    #[must_use]
    pub fn into_record(self) -> T {
        self.record
    }

    #[must_use]
    pub fn into_parts(self) -> (FieldMap, T) {
        (self.data, self.record)
    }
}

/// Maps one record type to and from its wire representation.
pub trait Serializer: Send + Sync {
    type Record: Record;

    /// Cross-record checks, run once the mapping decoded cleanly.
    ///
    /// # Errors
    ///
    /// Returns the failing fields.
    fn check(
        &self,
        record: &Self::Record,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError>;

    /// Validate a candidate mapping before it is handed to persistence.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing `invalid_value` / `empty_field`
    /// decode failures, or whatever [`Serializer::check`] rejects.
    fn validate(
        &self,
        data: FieldMap,
        ctx: &ValidationContext<'_>,
    ) -> Result<Validated<Self::Record>, ValidationError> {
        let data = writable_subset::<Self::Record>(data);

        let record = Self::Record::decode(&data).map_err(|errors| {
            debug!(
                serializer = Self::Record::NAME,
                failures = errors.len(),
                "candidate failed to decode"
            );
            decode_failure(errors, ctx)
        })?;

        self.check(&record, ctx)?;
        Ok(Validated { data, record })
    }

    /// Wire representation of a persisted record, read-only fields included.
    ///
    /// # Errors
    ///
    /// Returns `RepresentationError` if the record does not serialize to a
    /// JSON object.
    fn to_representation(&self, record: &Self::Record) -> Result<FieldMap, RepresentationError> {
        match serde_json::to_value(record)? {
            Value::Object(map) => Ok(map),
            _ => Err(RepresentationError::NotAnObject(Self::Record::NAME)),
        }
    }
}

/// Keep the declared, writable keys of `data`.
fn writable_subset<T: Record>(data: FieldMap) -> FieldMap {
    data.into_iter()
        .filter(|(key, _)| match T::field(key) {
            Some(field) if field.access.is_writable() => true,
            Some(_) => {
                debug!(serializer = T::NAME, field = %key, "dropping read-only field");
                false
            }
            None => {
                debug!(serializer = T::NAME, field = %key, "dropping undeclared field");
                false
            }
        })
        .collect()
}

fn decode_failure(errors: Vec<DecodeError>, ctx: &ValidationContext<'_>) -> ValidationError {
    let errors = errors
        .into_iter()
        .map(|error| match error {
            DecodeError::Missing { field } => FieldError::new(
                field,
                ctx.message(FIELD_REQUIRED_MSGID, &[]),
                ErrorKind::EmptyField,
            ),
            DecodeError::Malformed { field, reason } => FieldError::new(
                field,
                ctx.message(INVALID_VALUE_MSGID, &[("field", field), ("reason", reason.as_str())]),
                ErrorKind::InvalidValue,
            ),
        })
        .collect();
    ValidationError::new(errors)
}

// ---------------------------------------------------------------------------
// RecordSerializer
// ---------------------------------------------------------------------------

/// Pass-through serializer: field decoding only.
pub struct RecordSerializer<T>(PhantomData<fn() -> T>);

impl<T> RecordSerializer<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for RecordSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Serializer for RecordSerializer<T> {
    type Record = T;

    fn check(&self, _record: &T, _ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JoinSerializer
// ---------------------------------------------------------------------------

/// Serializer that rejects blank values and unresolved references.
pub struct JoinSerializer<T>(PhantomData<fn() -> T>);

impl<T> JoinSerializer<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for JoinSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JoinRecord> JoinSerializer<T> {
    /// Values that must not be blank under the context's policy.
    fn blank_candidates<'r>(
        record: &'r T,
        ctx: &ValidationContext<'_>,
    ) -> Vec<(&'static str, &'r RecordId)> {
        let mut candidates = record.non_blank();
        if ctx.policy.empty_ids == EmptyIdPolicy::AllReferences {
            for reference in record.references() {
                if !candidates.iter().any(|(field, _)| *field == reference.field) {
                    candidates.push((reference.field, reference.id));
                }
            }
        }
        candidates
    }
}

impl<T: JoinRecord> Serializer for JoinSerializer<T> {
    type Record = T;

    fn check(&self, record: &T, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        let first_only = ctx.policy.stops_at_first_error();
        let mut errors = Vec::new();
        let mut blank = HashSet::new();

        for (field, id) in Self::blank_candidates(record, ctx) {
            if !id.is_blank() {
                continue;
            }
            debug!(serializer = T::NAME, field, "blank value");
            errors.push(FieldError::new(
                field,
                ctx.message(T::BLANK_MSGID, &[("field", field)]),
                ErrorKind::EmptyField,
            ));
            if first_only {
                return Err(ValidationError::new(errors));
            }
            blank.insert(field);
        }

        for reference in record.references() {
            if blank.contains(reference.field) {
                continue;
            }
            if ctx.lookup.exists(reference.target, reference.id) {
                continue;
            }

            debug!(
                serializer = T::NAME,
                field = reference.field,
                entity = %reference.target,
                id = %reference.id,
                "referenced record not found"
            );
            let label = ctx.messages.gettext(reference.target.label());
            let id = reference.id.to_string();
            errors.push(FieldError::new(
                reference.field,
                ctx.message(
                    NOT_FOUND_MSGID,
                    &[("entity", label.as_str()), ("id", id.as_str())],
                ),
                ErrorKind::NotFound,
            ));
            if first_only {
                break;
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Concrete serializers
// ---------------------------------------------------------------------------

pub type OrganizationSerializer = RecordSerializer<Organization>;
pub type OrganizationApplicationSerializer = JoinSerializer<OrganizationApplication>;
pub type OrganizationEventSerializer = JoinSerializer<OrganizationEvent>;
pub type OrganizationMemberSerializer = JoinSerializer<OrganizationMember>;
pub type OrganizationImageSerializer = RecordSerializer<OrganizationImage>;
pub type OrganizationResourceSerializer = JoinSerializer<OrganizationResource>;
pub type OrganizationTaskSerializer = JoinSerializer<OrganizationTask>;
pub type OrganizationTopicSerializer = JoinSerializer<OrganizationTopic>;
pub type GroupSerializer = RecordSerializer<Group>;
pub type GroupImageSerializer = RecordSerializer<GroupImage>;
pub type GroupEventSerializer = JoinSerializer<GroupEvent>;
pub type GroupMemberSerializer = JoinSerializer<GroupMember>;
pub type GroupResourceSerializer = JoinSerializer<GroupResource>;
pub type GroupTopicSerializer = JoinSerializer<GroupTopic>;
pub type StatusSerializer = RecordSerializer<Status>;
pub type StatusEntityTypeSerializer = RecordSerializer<StatusEntityType>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::RecordIndex;
    use civ_core::enums::EntityType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn map(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn validated_data_keeps_only_writable_keys() {
        let index = RecordIndex::new();
        let ctx = ValidationContext::new(&index);

        let validated = OrganizationImageSerializer::new()
            .validate(
                map(json!({"id": 1, "org_id": 5, "image_id": "img", "caption": "x"})),
                &ctx,
            )
            .unwrap();

        assert_eq!(
            validated.data(),
            &map(json!({"org_id": 5, "image_id": "img"}))
        );
        assert_eq!(validated.record().id, None);
    }

    #[test]
    fn decode_failures_are_all_reported() {
        let index = RecordIndex::new();
        let ctx = ValidationContext::new(&index);

        let err = GroupSerializer::new()
            .validate(map(json!({"name": 3, "social_links": "x"})), &ctx)
            .unwrap_err();

        assert_eq!(err.fields(), ["org_id", "name", "social_links"]);
        assert!(err.has("org_id", ErrorKind::EmptyField));
        assert!(err.has("name", ErrorKind::InvalidValue));
        assert_eq!(err.errors[0].message, FIELD_REQUIRED_MSGID);
    }

    #[test]
    fn references_are_not_looked_up_when_decoding_fails() {
        let lookup = |_: EntityType, _: &RecordId| -> bool { panic!("lookup should not run") };
        let ctx = ValidationContext::new(&lookup);

        let err = GroupMemberSerializer::new()
            .validate(map(json!({"group_id": 1})), &ctx)
            .unwrap_err();
        assert_eq!(err.fields(), ["user_id"]);
    }

    #[test]
    fn representation_includes_read_only_fields() {
        let status = StatusEntityType {
            id: Some(RecordId::Int(1)),
            name: "organization".into(),
        };
        let wire = StatusEntityTypeSerializer::new()
            .to_representation(&status)
            .unwrap();
        assert_eq!(wire, map(json!({"id": 1, "name": "organization"})));
    }

    #[test]
    fn into_parts_returns_data_and_record() {
        let index = RecordIndex::new()
            .with(EntityType::Group, 2)
            .with(EntityType::Topic, 3);
        let ctx = ValidationContext::new(&index);

        let (data, record) = GroupTopicSerializer::new()
            .validate(map(json!({"group_id": 2, "topic_id": 3})), &ctx)
            .unwrap()
            .into_parts();
        assert_eq!(data, map(json!({"group_id": 2, "topic_id": 3})));
        assert_eq!(record.topic_id, RecordId::Int(3));
    }
}
