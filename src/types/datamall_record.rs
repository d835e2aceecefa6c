use serde_json::{Map, Value};

/// One entry of a DataMall `value` array, kept untyped.
pub type Record = Map<String, Value>;

pub const NOT_AVAILABLE: &str = "N/A";

/// The field as DataMall sent it, or `default` when the key is absent.
/// A present `null` is echoed, not defaulted.
pub fn field_or(record: &Record, key: &str, default: &str) -> Value {
    record
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::String(default.to_string()))
}

/// The field rendered for use inside a formatted string: strings without
/// quotes, anything else as its JSON text, `N/A` when absent.
pub fn field_text(record: &Record, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}
