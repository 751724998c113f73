use anyhow::Context;
use civ_serializers::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `civ schema [<name>]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match &args.name {
        Some(name) => {
            let schema = registry
                .get(name)
                .with_context(|| format!("no schema named '{name}' (see `civ schema`)"))?;
            output(schema, flags.format)
        }
        None => output(&registry.list(), flags.format),
    }
}
