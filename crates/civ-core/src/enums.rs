//! Entity types, field access modes, and validation policy enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose the same spelling through `as_str()` and `Display`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Collection a foreign identifier points into.
///
/// Used as the key of existence lookups and in not-found messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Organization,
    Group,
    User,
    Event,
    Resource,
    Task,
    Topic,
    Image,
    Status,
    StatusEntityType,
}

impl EntityType {
    pub const ALL: [Self; 10] = [
        Self::Organization,
        Self::Group,
        Self::User,
        Self::Event,
        Self::Resource,
        Self::Task,
        Self::Topic,
        Self::Image,
        Self::Status,
        Self::StatusEntityType,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Group => "group",
            Self::User => "user",
            Self::Event => "event",
            Self::Resource => "resource",
            Self::Task => "task",
            Self::Topic => "topic",
            Self::Image => "image",
            Self::Status => "status",
            Self::StatusEntityType => "status_entity_type",
        }
    }

    /// Human-readable label used in messages (`"Organization"`, `"Status entity type"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Group => "Group",
            Self::User => "User",
            Self::Event => "Event",
            Self::Resource => "Resource",
            Self::Task => "Task",
            Self::Topic => "Topic",
            Self::Image => "Image",
            Self::Status => "Status",
            Self::StatusEntityType => "Status entity type",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| CoreError::UnknownEntityType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// Whether a declared field is accepted from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Accepted from the caller and echoed back.
    ReadWrite,
    /// Set by the system. Caller-supplied values are dropped.
    ReadOnly,
}

impl Access {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadWrite => "read_write",
            Self::ReadOnly => "read_only",
        }
    }

    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::ReadWrite)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EmptyIdPolicy
// ---------------------------------------------------------------------------

/// Which join records reject blank identifiers before looking them up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmptyIdPolicy {
    /// Only the values each record lists in `JoinRecord::non_blank`.
    #[default]
    AsDeclared,
    /// Every reference id of every join record, plus the declared values.
    AllReferences,
}

impl EmptyIdPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AsDeclared => "as_declared",
            Self::AllReferences => "all_references",
        }
    }
}

impl fmt::Display for EmptyIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportMode
// ---------------------------------------------------------------------------

/// How many referential failures a join check reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Stop at the first blank or missing reference.
    #[default]
    FirstError,
    /// Run every check and report all failures together.
    AllErrors,
}

impl ReportMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstError => "first_error",
            Self::AllErrors => "all_errors",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
