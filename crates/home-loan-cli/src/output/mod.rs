pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// A result object split for flat rendering.
#[derive(Debug, Default)]
pub(crate) struct Sections {
    /// Scalar fields; nested objects flattened as `parent.child`.
    pub fields: Vec<(String, Value)>,
    /// Arrays of records (schedule, yearly breakdown, tax years).
    pub tables: Vec<(String, Vec<Value>)>,
}

pub(crate) fn split_sections(map: &Map<String, Value>) -> Sections {
    let mut sections = Sections::default();
    collect(map, "", &mut sections);
    sections
}

fn collect(map: &Map<String, Value>, prefix: &str, sections: &mut Sections) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => collect(inner, &name, sections),
            Value::Array(items) if items.iter().any(Value::is_object) => {
                sections.tables.push((name, items.clone()));
            }
            other => sections.fields.push((name, other.clone())),
        }
    }
}

/// The `result` of a computation envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}
