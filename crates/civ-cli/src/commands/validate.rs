use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use civ_config::CivConfig;
use civ_core::enums::{EmptyIdPolicy, ReportMode};
use civ_core::record::FieldMap;
use civ_serializers::{
    Catalog, RecordIndex, RegistryError, SerializerRegistry, Translate, Untranslated,
    ValidationContext, ValidationError, ValidationPolicy,
};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::output::output;

/// Handle `civ validate`.
///
/// Prints the validated mapping, or the field errors followed by a non-zero
/// exit through the returned error.
pub fn handle(args: &ValidateArgs, config: &CivConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let data = read_data(&args.data)?;
    match run(args, config, data)? {
        Ok(validated) => output(&validated, flags.format),
        Err(error) => {
            output(&error, flags.format)?;
            bail!(
                "{} rejected the payload ({} field error(s))",
                args.serializer,
                error.errors.len()
            )
        }
    }
}

/// Validate `data`; the outer error covers setup, the inner one the payload.
fn run(
    args: &ValidateArgs,
    config: &CivConfig,
    data: FieldMap,
) -> anyhow::Result<Result<FieldMap, ValidationError>> {
    let index = match &args.records {
        Some(path) => RecordIndex::from_path(path)
            .with_context(|| format!("failed to load records from {}", path.display()))?,
        None => RecordIndex::new(),
    };

    let catalog = match &config.messages.catalog_path {
        Some(path) => Some(
            Catalog::from_path(path)
                .with_context(|| format!("failed to load message catalog {}", path.display()))?,
        ),
        None => None,
    };
    let messages: &dyn Translate = match &catalog {
        Some(catalog) => catalog,
        None => &Untranslated,
    };

    let policy = policy(args, config);
    tracing::debug!(
        serializer = %args.serializer,
        empty_ids = %policy.empty_ids,
        report = %policy.report,
        "validating payload"
    );

    let ctx = ValidationContext::new(&index)
        .with_messages(messages)
        .with_policy(policy);

    match SerializerRegistry::new().validate(&args.serializer, data, &ctx) {
        Ok(validated) => Ok(Ok(validated)),
        Err(RegistryError::Validation(error)) => Ok(Err(error)),
        Err(other) => Err(other.into()),
    }
}

/// Config policy with command-line flags layered on top.
fn policy(args: &ValidateArgs, config: &CivConfig) -> ValidationPolicy {
    let empty_ids = if args.strict_empty_ids {
        EmptyIdPolicy::AllReferences
    } else {
        config.validation.empty_ids
    };
    let report = if args.all_errors {
        ReportMode::AllErrors
    } else {
        config.validation.report
    };
    ValidationPolicy::new(empty_ids, report)
}

fn read_data(path: &Path) -> anyhow::Result<FieldMap> {
    let raw = if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read payload from stdin")?;
        raw
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload {}", path.display()))?
    };
    parse_data(&raw)
}

fn parse_data(raw: &str) -> anyhow::Result<FieldMap> {
    match serde_json::from_str(raw).context("payload is not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("payload must be a JSON object, got {}", kind_of(&other)),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use civ_serializers::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn args(serializer: &str) -> ValidateArgs {
        ValidateArgs {
            serializer: serializer.to_string(),
            data: PathBuf::from("-"),
            records: None,
            all_errors: false,
            strict_empty_ids: false,
        }
    }

    fn map(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn parse_data_requires_an_object() {
        assert!(parse_data(r#"{"org_id": 5}"#).is_ok());
        let err = parse_data("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(parse_data("{").is_err());
    }

    #[test]
    fn read_data_from_file() {
        let file = write_temp(r#"{"name": "Acme"}"#);
        let data = read_data(file.path()).expect("payload reads");
        assert_eq!(data, map(json!({"name": "Acme"})));
    }

    #[test]
    fn flags_override_config_policy() {
        let config = CivConfig::default();
        let mut args = args("organization_task");
        assert_eq!(policy(&args, &config), ValidationPolicy::default());

        args.all_errors = true;
        args.strict_empty_ids = true;
        assert_eq!(
            policy(&args, &config),
            ValidationPolicy::new(EmptyIdPolicy::AllReferences, ReportMode::AllErrors)
        );
    }

    #[test]
    fn config_policy_applies_without_flags() {
        let mut config = CivConfig::default();
        config.validation.report = ReportMode::AllErrors;
        assert_eq!(policy(&args("group"), &config).report, ReportMode::AllErrors);
    }

    #[test]
    fn validates_against_records_fixture() {
        let records = write_temp(r#"{"organization": [5], "user": [9]}"#);
        let mut args = args("organization_member");
        args.records = Some(records.path().to_path_buf());

        let result = run(&args, &CivConfig::default(), map(json!({"org_id": 5, "user_id": 9})))
            .expect("setup succeeds");
        assert_eq!(result, Ok(map(json!({"org_id": 5, "user_id": 9}))));

        let result = run(&args, &CivConfig::default(), map(json!({"org_id": 5, "user_id": 10})))
            .expect("setup succeeds");
        let error = result.unwrap_err();
        assert!(error.has("user_id", ErrorKind::NotFound));
    }

    #[test]
    fn without_records_every_reference_is_missing() {
        let mut args = args("organization_task");
        args.all_errors = true;

        let error = run(
            &args,
            &CivConfig::default(),
            map(json!({"org_id": 5, "task_id": 6, "group_id": 7})),
        )
        .expect("setup succeeds")
        .unwrap_err();
        assert_eq!(error.fields(), ["org_id", "task_id", "group_id"]);
    }

    #[test]
    fn catalog_from_config_translates_messages() {
        let catalog = write_temp("\"This field is required.\" = \"Ce champ est obligatoire.\"\n");
        let mut config = CivConfig::default();
        config.messages.catalog_path = Some(catalog.path().to_path_buf());

        let error = run(&args("group"), &config, map(json!({"name": "Outreach"})))
            .expect("setup succeeds")
            .unwrap_err();
        assert_eq!(error.errors[0].field, "org_id");
        assert_eq!(error.errors[0].message, "Ce champ est obligatoire.");
    }

    #[test]
    fn unknown_serializer_is_a_setup_error() {
        let err = run(&args("planet"), &CivConfig::default(), FieldMap::new()).unwrap_err();
        assert!(err.to_string().contains("planet"));
    }

    #[test]
    fn unreadable_records_fixture_is_a_setup_error() {
        let mut args = args("group_topic");
        args.records = Some(PathBuf::from("/nonexistent/records.json"));
        assert!(run(&args, &CivConfig::default(), FieldMap::new()).is_err());
    }
}
