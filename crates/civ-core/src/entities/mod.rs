//! Record types for every entity the validation layer serializes.
//!
//! Each struct is declared with `declare_record!`, so it derives `Serialize`,
//! `Deserialize` and `JsonSchema` and carries its static field list. Join
//! records additionally implement [`JoinRecord`](crate::references::JoinRecord).

mod application;
mod group;
mod group_links;
mod images;
mod org_links;
mod organization;
mod status;

pub use application::OrganizationApplication;
pub use group::Group;
pub use group_links::{GroupEvent, GroupMember, GroupResource, GroupTopic};
pub use images::{GroupImage, OrganizationImage};
pub use org_links::{
    OrganizationEvent, OrganizationMember, OrganizationResource, OrganizationTask,
    OrganizationTopic,
};
pub use organization::Organization;
pub use status::{Status, StatusEntityType};
