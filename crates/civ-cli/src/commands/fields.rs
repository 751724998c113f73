use civ_core::enums::Access;
use civ_serializers::SerializerRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FieldsArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FieldRow {
    name: &'static str,
    access: Access,
}

/// Handle `civ fields <serializer>`.
pub fn handle(args: &FieldsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = field_rows(&SerializerRegistry::new(), &args.serializer)?;
    output(&rows, flags.format)
}

fn field_rows(registry: &SerializerRegistry, name: &str) -> anyhow::Result<Vec<FieldRow>> {
    let serializer = registry.get(name)?;
    Ok(serializer
        .fields()
        .iter()
        .map(|field| FieldRow {
            name: field.name,
            access: field.access,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_fields_in_declaration_order() {
        let rows = field_rows(&SerializerRegistry::new(), "group_member").expect("known serializer");
        let names: Vec<&str> = rows.iter().map(|row| row.name).collect();
        assert_eq!(names, ["id", "group_id", "user_id", "is_admin"]);
        assert_eq!(rows[0].access, Access::ReadOnly);
        assert_eq!(rows[1].access, Access::ReadWrite);
    }

    #[test]
    fn unknown_serializer_is_an_error() {
        let err = field_rows(&SerializerRegistry::new(), "planet").unwrap_err();
        assert!(err.to_string().contains("planet"));
    }
}
