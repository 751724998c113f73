use chrono::{DateTime, Utc};

use crate::ids::RecordId;
use crate::record::declare_record;

declare_record! {
    /// A working group inside an organization.
    pub struct Group as "group" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        name: String,
        tagline: Option<String>,
        description: Option<String>,
        social_links: Option<Vec<String>>,
        category: Option<String>,
        @read_only created_by: Option<RecordId>,
        @read_only creation_date: Option<DateTime<Utc>>,
    }
}
