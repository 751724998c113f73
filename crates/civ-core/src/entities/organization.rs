use chrono::{DateTime, Utc};

use crate::ids::RecordId;
use crate::record::declare_record;

declare_record! {
    /// An organization registered on the platform.
    pub struct Organization as "organization" {
        @read_only id: Option<RecordId>,
        name: String,
        tagline: Option<String>,
        /// Image id of the organization icon.
        org_icon: Option<RecordId>,
        about_images: Option<Vec<RecordId>>,
        @read_only created_by: Option<RecordId>,
        description: Option<String>,
        social_accounts: Option<Vec<String>>,
        high_risk: Option<bool>,
        status: Option<RecordId>,
        @read_only status_updated: Option<DateTime<Utc>>,
        @read_only acceptance_date: Option<DateTime<Utc>>,
    }
}
