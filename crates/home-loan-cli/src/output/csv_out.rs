use serde_json::Value;
use std::io;

use crate::output::{result_of, split_sections};

/// Write output as CSV to stdout.
///
/// Scalar fields come first as `field,value` rows; each array of records
/// (schedule, yearly breakdown) follows as its own block with a header.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(stdout.lock());

    match result_of(value) {
        Value::Object(map) => {
            let sections = split_sections(map);
            if !sections.fields.is_empty() {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in &sections.fields {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
            for (name, rows) in &sections.tables {
                let _ = wtr.write_record([""]);
                let _ = wtr.write_record([name.as_str()]);
                write_array_csv(&mut wtr, rows);
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr),
        other => {
            let _ = wtr.write_record([&format_csv_value(other)]);
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) {
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
