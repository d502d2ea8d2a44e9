use serde_json::Value;
use std::collections::BTreeSet;

const EXAMPLE_PREVIEW_CHARS: usize = 80;

/// Infer the datatype label for a leaf value.
///
/// Booleans are matched ahead of numbers, so flag fields never come back as
/// `integer`. Non-empty arrays recurse into their elements: one uniform
/// element label yields `array<T>`, several yield `array<mixed:...>` with the
/// labels sorted and comma-joined.
pub fn infer_type(value: &Value) -> String {
    match value {
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => {
            if n.is_f64() {
                "double".to_string()
            } else {
                "integer".to_string()
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                return "array".to_string();
            }
            let inner: BTreeSet<String> = items.iter().map(infer_type).collect();
            let mut labels: Vec<String> = inner.into_iter().collect();
            if labels.len() == 1 {
                format!("array<{}>", labels.remove(0))
            } else {
                format!("array<mixed:{}>", labels.join(","))
            }
        }
        Value::Object(_) => "object".to_string(),
        Value::String(s) => {
            if looks_like_timestamp(s) {
                "timestamp".to_string()
            } else {
                "string".to_string()
            }
        }
        Value::Null => "unknown".to_string(),
    }
}

/// ISO-8601-ish detector, not a full parser.
fn looks_like_timestamp(value: &str) -> bool {
    if value.ends_with('Z') && value.contains('T') {
        return true;
    }
    value.matches('-').count() == 2 && (value.contains('T') || value.contains(' '))
}

/// Derive a short preview string for a value, if one makes sense.
///
/// Objects and arrays are JSON-serialized and truncated to 80 characters with
/// a trailing ellipsis when characters were dropped; null has no preview.
pub fn example_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(value).ok().map(|s| truncate_preview(&s))
        }
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn truncate_preview(serialized: &str) -> String {
    let mut chars = serialized.chars();
    let preview: String = chars.by_ref().take(EXAMPLE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", preview)
    } else {
        preview
    }
}
