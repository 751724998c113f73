use crate::enums::EntityType;
use crate::ids::RecordId;
use crate::record::declare_record;
use crate::references::{JoinRecord, Reference};

declare_record! {
    /// An event hosted by a group.
    pub struct GroupEvent as "group_event" {
        @read_only id: Option<RecordId>,
        group_id: RecordId,
        event_id: RecordId,
    }
}

impl JoinRecord for GroupEvent {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("group_id", EntityType::Group, &self.group_id),
            Reference::new("event_id", EntityType::Event, &self.event_id),
        ]
    }
}

declare_record! {
    /// A user's membership in a group.
    pub struct GroupMember as "group_member" {
        @read_only id: Option<RecordId>,
        group_id: RecordId,
        user_id: RecordId,
        is_admin: Option<bool>,
    }
}

impl JoinRecord for GroupMember {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("group_id", EntityType::Group, &self.group_id),
            Reference::new("user_id", EntityType::User, &self.user_id),
        ]
    }
}

declare_record! {
    /// A resource shared by a group.
    pub struct GroupResource as "group_resource" {
        @read_only id: Option<RecordId>,
        group_id: RecordId,
        resource_id: RecordId,
    }
}

impl JoinRecord for GroupResource {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("group_id", EntityType::Group, &self.group_id),
            Reference::new("resource_id", EntityType::Resource, &self.resource_id),
        ]
    }
}

declare_record! {
    /// A topic a group works on.
    pub struct GroupTopic as "group_topic" {
        @read_only id: Option<RecordId>,
        group_id: RecordId,
        topic_id: RecordId,
    }
}

impl JoinRecord for GroupTopic {
    fn references(&self) -> Vec<Reference<'_>> {
        vec![
            Reference::new("group_id", EntityType::Group, &self.group_id),
            Reference::new("topic_id", EntityType::Topic, &self.topic_id),
        ]
    }
}
