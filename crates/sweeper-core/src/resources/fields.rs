//! Shared field-extraction helpers for the adapters.

use serde_json::Value;

/// Last `/`-separated segment of a resource URL or full resource name.
pub(crate) fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Resource ids arrive as strings on most surfaces and as bare numbers on
/// some.
pub(crate) fn id_string(resource: &Value, field: &str) -> Option<String> {
    match resource.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
