use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(to_table(&serde_json::to_value(value)?).render(options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects become key/value rows, arrays of objects one row per item with
/// the union of their keys as columns.
fn to_table(value: &Value) -> Table {
    match value {
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in map {
                table.push_row(vec![key.clone(), value_to_cell(value)]);
            }
            table
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let mut headers = Vec::<String>::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }

            let mut table = Table::new(headers.iter().map(String::as_str));
            for map in items.iter().filter_map(Value::as_object) {
                table.push_row(
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                        .collect(),
                );
            }
            table
        }
        Value::Array(items) => {
            let mut table = Table::new(["value"]);
            for item in items {
                table.push_row(vec![value_to_cell(item)]);
            }
            table
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push_row(vec![value_to_cell(scalar)]);
            table
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
