use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl From<civ_config::OutputFormat> for OutputFormat {
    fn from(format: civ_config::OutputFormat) -> Self {
        match format {
            civ_config::OutputFormat::Json => Self::Json,
            civ_config::OutputFormat::Table => Self::Table,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
