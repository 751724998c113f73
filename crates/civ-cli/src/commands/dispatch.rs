use civ_config::CivConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &CivConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Validate(args) => commands::validate::handle(args, config, flags),
        Commands::Fields(args) => commands::fields::handle(args, flags),
        Commands::Serializers => commands::serializers::handle(flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
