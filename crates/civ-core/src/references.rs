//! Foreign-identifier declarations for join records.

use crate::enums::EntityType;
use crate::ids::RecordId;
use crate::record::Record;

/// Default message for a blank required value. `{field}` is substituted.
pub const BLANK_FIELD_MSGID: &str = "The field {field} cannot be empty.";

/// A foreign identifier that must resolve to an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    pub field: &'static str,
    pub target: EntityType,
    pub id: &'a RecordId,
}

impl<'a> Reference<'a> {
    #[must_use]
    pub const fn new(field: &'static str, target: EntityType, id: &'a RecordId) -> Self {
        Self { field, target, id }
    }
}

/// A record whose writes depend on other records existing.
pub trait JoinRecord: Record {
    /// Message used when a value from [`JoinRecord::non_blank`] is blank.
    const BLANK_MSGID: &'static str = BLANK_FIELD_MSGID;

    /// Foreign identifiers in the order they are checked.
    fn references(&self) -> Vec<Reference<'_>>;

    /// Values rejected when blank before any existence lookup runs.
    fn non_blank(&self) -> Vec<(&'static str, &RecordId)> {
        Vec::new()
    }
}
