use serde_json::Value;

use crate::output::result_of;

/// Headline figures in priority order, searched through nested objects.
const PRIORITY_KEYS: [&str; 6] = [
    "monthly_payment",
    "total_tax_savings",
    "savings_by_buying",
    "total_rent_paid",
    "valid",
    "total_payments",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = result_of(value);

    if let Some(val) = PRIORITY_KEYS.iter().find_map(|k| find_key(result_obj, k)) {
        println!("{}", format_minimal(val));
        return;
    }

    match result_obj {
        Value::Object(map) => {
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val));
            }
        }
        // Schedules: the last row carries the payoff month and final balance
        Value::Array(rows) => {
            if let Some(last) = rows.last() {
                println!("{}", format_minimal(last));
            }
        }
        other => println!("{}", format_minimal(other)),
    }
}

/// Depth-first lookup of a non-null key, skipping arrays.
fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let map = value.as_object()?;
    if let Some(v) = map.get(key).filter(|v| !v.is_null()) {
        return Some(v);
    }
    map.values().find_map(|v| find_key(v, key))
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
