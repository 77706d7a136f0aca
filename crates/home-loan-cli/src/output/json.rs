use serde_json::Value;

/// Pretty-print JSON to stdout. Decimals are already strings, so values
/// pass through unrounded.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialise output");
            eprintln!("JSON serialization error: {}", e);
        }
    }
}
