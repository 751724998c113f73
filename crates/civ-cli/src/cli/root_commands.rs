use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate a JSON payload with a serializer.
    Validate(ValidateArgs),
    /// List the fields a serializer declares.
    Fields(FieldsArgs),
    /// List serializer names.
    Serializers,
    /// Print the JSON schema of a record, or list schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Serializer name, e.g. `organization_member`.
    pub serializer: String,

    /// JSON object to validate, or `-` for stdin.
    #[arg(long)]
    pub data: PathBuf,

    /// JSON fixture of existing records, keyed by entity type.
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Report every failing reference instead of the first.
    #[arg(long)]
    pub all_errors: bool,

    /// Reject blank ids on every reference field.
    #[arg(long)]
    pub strict_empty_ids: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FieldsArgs {
    /// Serializer name.
    pub serializer: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record name. Lists all names when omitted.
    pub name: Option<String>,
}
