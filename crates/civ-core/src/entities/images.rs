use crate::ids::RecordId;
use crate::record::declare_record;

declare_record! {
    /// An image attached to an organization's page.
    pub struct OrganizationImage as "organization_image" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        image_id: RecordId,
        /// Position in the organization's image carousel.
        sequence_index: Option<u32>,
    }
}

declare_record! {
    /// An image attached to a group's page.
    pub struct GroupImage as "group_image" {
        @read_only id: Option<RecordId>,
        group_id: RecordId,
        image_id: RecordId,
        sequence_index: Option<u32>,
    }
}
