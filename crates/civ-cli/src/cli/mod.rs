use clap::Parser;
use civ_config::CivConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `civ` binary.
#[derive(Debug, Parser)]
#[command(
    name = "civ",
    version,
    about = "Validate and inspect civic organization records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract global flags, filling unset values from config.
    #[must_use]
    pub fn global_flags(&self, config: &CivConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| config.general.default_format.into()),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use civ_config::CivConfig;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["civ", "--format", "table", "--verbose", "serializers"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serializers));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["civ", "serializers", "--format", "json", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.quiet);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["civ", "-q", "-v", "serializers"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["civ", "--format", "xml", "serializers"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn format_falls_back_to_config() {
        let mut config = CivConfig::default();
        config.general.default_format = civ_config::OutputFormat::Table;

        let cli = Cli::try_parse_from(["civ", "serializers"]).expect("cli should parse");
        assert_eq!(cli.global_flags(&config).format, OutputFormat::Table);

        let cli = Cli::try_parse_from(["civ", "-f", "json", "serializers"]).expect("cli should parse");
        assert_eq!(cli.global_flags(&config).format, OutputFormat::Json);
    }

    #[test]
    fn validate_parses_flags() {
        let cli = Cli::try_parse_from([
            "civ",
            "validate",
            "organization_task",
            "--data",
            "-",
            "--records",
            "records.json",
            "--all-errors",
            "--strict-empty-ids",
        ])
        .expect("cli should parse");

        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.serializer, "organization_task");
        assert_eq!(args.data.to_str(), Some("-"));
        assert!(args.records.is_some());
        assert!(args.all_errors);
        assert!(args.strict_empty_ids);
    }

    #[test]
    fn validate_requires_data() {
        assert!(Cli::try_parse_from(["civ", "validate", "group"]).is_err());
    }

    #[test]
    fn schema_name_is_optional() {
        let cli = Cli::try_parse_from(["civ", "schema"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Schema(ref args) if args.name.is_none()));
    }
}
