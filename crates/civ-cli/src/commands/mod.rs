pub mod dispatch;
pub mod fields;
pub mod schema;
pub mod serializers;
pub mod validate;
