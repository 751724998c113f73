use crate::ids::RecordId;
use crate::record::declare_record;

declare_record! {
    /// A status vote cast by a user on an organization.
    pub struct Status as "status" {
        @read_only id: Option<RecordId>,
        status_type: RecordId,
        org_id: RecordId,
        user_id: RecordId,
    }
}

declare_record! {
    /// Kind of entity a status can be attached to.
    pub struct StatusEntityType as "status_entity_type" {
        @read_only id: Option<RecordId>,
        name: String,
    }
}
