//! Record identifiers.
//!
//! Identifiers arrive either as JSON integers (serial primary keys) or as
//! strings (UUIDs, slugs). [`RecordId`] keeps whichever form it was given so a
//! validated mapping can be written back unchanged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// A text id that is empty or only whitespace. Integer ids are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_form_is_preserved() {
        let id: RecordId = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(id, RecordId::Int(5));
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(5));
    }

    #[test]
    fn text_form_is_preserved() {
        let id: RecordId =
            serde_json::from_value(json!("3f2c6a5e-8a1b-4f8e-9a57-0c2b1d4e6f70")).unwrap();
        assert!(matches!(id, RecordId::Text(_)));
        assert_eq!(
            serde_json::to_value(&id).unwrap(),
            json!("3f2c6a5e-8a1b-4f8e-9a57-0c2b1d4e6f70")
        );
    }

    #[test]
    fn numeric_strings_stay_text() {
        let id: RecordId = serde_json::from_value(json!("5")).unwrap();
        assert_eq!(id, RecordId::Text("5".into()));
        assert_ne!(id, RecordId::Int(5));
    }

    #[test]
    fn blank_detection() {
        assert!(RecordId::from("").is_blank());
        assert!(RecordId::from("   ").is_blank());
        assert!(!RecordId::from("abc").is_blank());
        assert!(!RecordId::Int(0).is_blank());
    }

    #[test]
    fn rejects_non_scalar_values() {
        assert!(serde_json::from_value::<RecordId>(json!(1.5)).is_err());
        assert!(serde_json::from_value::<RecordId>(json!({"id": 1})).is_err());
        assert!(serde_json::from_value::<RecordId>(json!(true)).is_err());
    }

    #[test]
    fn display_renders_raw_value() {
        assert_eq!(RecordId::Int(404).to_string(), "404");
        assert_eq!(RecordId::from("org-1").to_string(), "org-1");
    }
}
