use eventsift_types::Record;
use serde_json::Value;

/// Parse raw text into event records, trying strategies in order.
///
/// 1. The whole text as JSON: an array keeps only its object elements
///    (scalars are silently dropped), an object becomes a single record.
/// 2. Newline-delimited JSON: each non-blank line is parsed independently;
///    lines that fail to parse or parse to a non-object are skipped.
///
/// A successful whole-text array parse returns immediately, even when every
/// element was filtered out. Callers decide whether an empty result is fatal.
pub fn load_records(text: &str) -> Vec<Record> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => {
            return items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect();
        }
        Ok(Value::Object(map)) => return vec![map],
        // A bare scalar is not a record stream; fall through to NDJSON.
        Ok(_) | Err(_) => {}
    }

    trimmed
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            match serde_json::from_str::<Value>(line) {
                Ok(Value::Object(map)) => Some(map),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_of_objects() {
        let records = load_records(r#"[{"a": 1}, {"b": 2}]"#);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["a"], 1);
    }

    #[test]
    fn test_array_drops_scalar_elements() {
        let records = load_records(r#"[{"a": 1}, 42, "x", null]"#);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_array_of_scalars_yields_nothing() {
        // The array parse succeeded, so no NDJSON fallback runs.
        assert!(load_records("[1, 2, 3]").is_empty());
    }

    #[test]
    fn test_single_object_wraps() {
        let records = load_records(r#"{"event": "signup"}"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["event"], "signup");
    }

    #[test]
    fn test_ndjson_skips_malformed_lines() {
        let text = "{\"a\": 1}\nnot json\n\n{\"b\": 2}\n[3]\n";
        let records = load_records(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["b"], 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(load_records("").is_empty());
        assert!(load_records("   \n  ").is_empty());
    }

    #[test]
    fn test_bare_scalar_falls_through_to_ndjson() {
        assert!(load_records("42").is_empty());
    }
}
