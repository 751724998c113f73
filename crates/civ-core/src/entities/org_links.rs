use crate::enums::EntityType;
use crate::ids::RecordId;
use crate::record::declare_record;
use crate::references::{JoinRecord, Reference};

declare_record! {
    /// An event hosted by an organization.
    pub struct OrganizationEvent as "organization_event" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        event_id: RecordId,
    }
}

impl JoinRecord for OrganizationEvent {
    const BLANK_MSGID: &'static str = "The fields org_id and event_id cannot be empty. They must be filled so that the event can be added to the organization.";

    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("org_id", EntityType::Organization, &self.org_id),
            Reference::new("event_id", EntityType::Event, &self.event_id),
        ]
    }

    fn non_blank(&self) -> Vec<(&'static str, &RecordId)> {
        vec![("org_id", &self.org_id), ("event_id", &self.event_id)]
    }
}

declare_record! {
    /// A user's membership in an organization.
    pub struct OrganizationMember as "organization_member" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        user_id: RecordId,
        is_owner: Option<bool>,
        is_admin: Option<bool>,
        is_comms: Option<bool>,
    }
}

impl JoinRecord for OrganizationMember {
    const BLANK_MSGID: &'static str = "The fields org_id and user_id cannot be empty. They must be filled so that the user can be added to the organization.";

    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("org_id", EntityType::Organization, &self.org_id),
            Reference::new("user_id", EntityType::User, &self.user_id),
        ]
    }

    fn non_blank(&self) -> Vec<(&'static str, &RecordId)> {
        vec![("org_id", &self.org_id), ("user_id", &self.user_id)]
    }
}

declare_record! {
    /// A resource shared by an organization.
    pub struct OrganizationResource as "organization_resource" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        resource_id: RecordId,
    }
}

impl JoinRecord for OrganizationResource {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("org_id", EntityType::Organization, &self.org_id),
            Reference::new("resource_id", EntityType::Resource, &self.resource_id),
        ]
    }
}

declare_record! {
    /// A task an organization assigns to one of its groups.
    pub struct OrganizationTask as "organization_task" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        task_id: RecordId,
        group_id: RecordId,
    }
}

impl JoinRecord for OrganizationTask {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("org_id", EntityType::Organization, &self.org_id),
            Reference::new("task_id", EntityType::Task, &self.task_id),
            Reference::new("group_id", EntityType::Group, &self.group_id),
        ]
    }
}

declare_record! {
    /// A topic an organization works on.
    pub struct OrganizationTopic as "organization_topic" {
        @read_only id: Option<RecordId>,
        org_id: RecordId,
        topic_id: RecordId,
    }
}

impl JoinRecord for OrganizationTopic {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("org_id", EntityType::Organization, &self.org_id),
            Reference::new("topic_id", EntityType::Topic, &self.topic_id),
        ]
    }
}
