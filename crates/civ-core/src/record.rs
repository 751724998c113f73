//! Declared fields and typed decoding of wire mappings.
//!
//! Every entity declares its fields once through [`declare_record!`], which
//! generates the struct, its static [`Field`] list and a [`Record::decode`]
//! that decodes a [`FieldMap`] field by field. Decoding reports every field
//! that failed rather than stopping at the first one.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::enums::Access;

/// Field-name-to-value mapping as received from, and returned to, the
/// request layer.
pub type FieldMap = serde_json::Map<String, Value>;

/// A field declared on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub access: Access,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, access: Access) -> Self {
        Self { name, access }
    }
}

/// A single field that could not be decoded to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Required field absent or `null`.
    #[error("{field}: missing required value")]
    Missing { field: &'static str },

    /// Value present but of the wrong shape.
    #[error("{field}: {reason}")]
    Malformed { field: &'static str, reason: String },
}

impl DecodeError {
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Malformed { field, .. } => field,
        }
    }
}

/// A persisted record with a statically declared field list.
pub trait Record: Serialize + DeserializeOwned + Sized + Send + Sync + 'static {
    /// Wire name of the record, e.g. `"organization_member"`.
    const NAME: &'static str;

    /// Declared fields in declaration order.
    const FIELDS: &'static [Field];

    /// Decode a mapping into the record. Read-only fields are never taken
    /// from `data`; undeclared keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns one [`DecodeError`] per declared field that is missing or
    /// malformed.
    fn decode(data: &FieldMap) -> Result<Self, Vec<DecodeError>>;

    #[must_use]
    fn field(name: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

/// Decode one declared field out of `data`.
///
/// Read-only fields decode from `null`, so they must be declared as `Option`.
///
/// # Errors
///
/// [`DecodeError::Missing`] when the value is absent or `null` and `T` does
/// not accept `null`; [`DecodeError::Malformed`] for any other mismatch.
pub fn decode_field<T: DeserializeOwned>(
    data: &FieldMap,
    name: &'static str,
    access: Access,
) -> Result<T, DecodeError> {
    let value = match access {
        Access::ReadOnly => Value::Null,
        Access::ReadWrite => data.get(name).cloned().unwrap_or(Value::Null),
    };
    let missing = value.is_null();

    serde_json::from_value(value).map_err(|error| {
        if missing {
            DecodeError::Missing { field: name }
        } else {
            DecodeError::Malformed {
                field: name,
                reason: error.to_string(),
            }
        }
    })
}

macro_rules! field_access {
    () => {
        $crate::enums::Access::ReadWrite
    };
    (read_only) => {
        $crate::enums::Access::ReadOnly
    };
}

/// Declare a record struct together with its [`Record`] implementation.
///
/// Fields prefixed with `@read_only` are system-set.
macro_rules! declare_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $wire:literal {
            $(
                $(#[$fmeta:meta])*
                $(@$access:ident)? $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::record::Record for $name {
            const NAME: &'static str = $wire;

            const FIELDS: &'static [$crate::record::Field] = &[
                $(
                    $crate::record::Field::new(
                        stringify!($field),
                        $crate::record::field_access!($($access)?),
                    ),
                )*
            ];

            fn decode(
                data: &$crate::record::FieldMap,
            ) -> Result<Self, Vec<$crate::record::DecodeError>> {
                let mut errors = Vec::new();
                $(
                    let $field = $crate::record::decode_field::<$ty>(
                        data,
                        stringify!($field),
                        $crate::record::field_access!($($access)?),
                    )
                    .map_err(|error| errors.push(error))
                    .ok();
                )*

                match ($($field,)*) {
                    ($(Some($field),)*) if errors.is_empty() => Ok(Self { $($field),* }),
                    _ => Err(errors),
                }
            }
        }
    };
}

pub(crate) use declare_record;
pub(crate) use field_access;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::RecordId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    declare_record! {
        /// Minimal record exercising every field shape.
        pub struct Sample as "sample" {
            @read_only id: Option<RecordId>,
            owner_id: RecordId,
            title: String,
            note: Option<String>,
            rank: Option<u32>,
        }
    }

    fn map(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn field_list_follows_declaration_order() {
        let names: Vec<_> = Sample::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["id", "owner_id", "title", "note", "rank"]);
        assert_eq!(Sample::field("id").unwrap().access, Access::ReadOnly);
        assert_eq!(Sample::field("title").unwrap().access, Access::ReadWrite);
        assert!(Sample::field("missing").is_none());
    }

    #[test]
    fn decodes_complete_mapping() {
        let sample = Sample::decode(&map(json!({
            "owner_id": 7,
            "title": "hello",
            "note": "n",
            "rank": 2
        })))
        .unwrap();
        assert_eq!(
            sample,
            Sample {
                id: None,
                owner_id: RecordId::Int(7),
                title: "hello".into(),
                note: Some("n".into()),
                rank: Some(2),
            }
        );
    }

    #[test]
    fn read_only_values_are_not_taken_from_input() {
        let sample = Sample::decode(&map(json!({
            "id": 99,
            "owner_id": "abc",
            "title": "t"
        })))
        .unwrap();
        assert_eq!(sample.id, None);
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = Sample::decode(&map(json!({
            "title": 12,
            "rank": -1
        })))
        .unwrap_err();

        let fields: Vec<_> = errors.iter().map(DecodeError::field).collect();
        assert_eq!(fields, ["owner_id", "title", "rank"]);
        assert_eq!(errors[0], DecodeError::Missing { field: "owner_id" });
        assert!(matches!(errors[1], DecodeError::Malformed { field: "title", .. }));
    }

    #[test]
    fn explicit_null_on_required_field_is_missing() {
        let errors = Sample::decode(&map(json!({
            "owner_id": null,
            "title": "t"
        })))
        .unwrap_err();
        assert_eq!(errors, vec![DecodeError::Missing { field: "owner_id" }]);
    }

    #[test]
    fn undeclared_keys_are_ignored() {
        let sample = Sample::decode(&map(json!({
            "owner_id": 1,
            "title": "t",
            "colour": "blue"
        })))
        .unwrap();
        assert_eq!(sample.title, "t");
    }
}
