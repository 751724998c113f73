use civ_serializers::SerializerRegistry;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `civ serializers`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&SerializerRegistry::new().list(), flags.format)
}
