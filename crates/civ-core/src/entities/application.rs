use chrono::{DateTime, Utc};

use crate::enums::EntityType;
use crate::ids::RecordId;
use crate::record::declare_record;
use crate::references::{JoinRecord, Reference};

declare_record! {
    /// An organization's application to join the platform.
    pub struct OrganizationApplication as "organization_application" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        status: RecordId,
        orgs_in_favor: Option<Vec<RecordId>>,
        orgs_against: Option<Vec<RecordId>>,
        @read_only creation_date: Option<DateTime<Utc>>,
        @read_only status_updated: Option<DateTime<Utc>>,
    }
}

impl JoinRecord for OrganizationApplication {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![Reference::new("org_id", EntityType::Organization, &self.org_id)]
    }

    fn non_blank(&self) -> Vec<(&'static str, &RecordId)> {
        vec![("status", &self.status)]
    }
}
