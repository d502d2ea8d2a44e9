use eventsift_types::{Heuristics, Record};
use serde_json::Value;

/// Classification target for a flattened field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    User,
    Group,
    Ignored,
    Event,
}

/// Replace spaces so flattened paths are usable as column names.
pub fn normalize_key(key: &str) -> String {
    key.replace(' ', "_")
}

/// Classify a normalized field name into its property bucket.
///
/// Precedence, first match wins: user hints, then group hints, then ignored
/// names, then event. Hint matches are case-insensitive substring tests;
/// ignored names must match exactly.
pub fn classify_field(normalized_key: &str, heuristics: &Heuristics) -> Bucket {
    let lowered = normalized_key.to_lowercase();
    if heuristics.user_hints.iter().any(|hint| lowered.contains(hint)) {
        return Bucket::User;
    }
    if heuristics.group_hints.iter().any(|hint| lowered.contains(hint)) {
        return Bucket::Group;
    }
    if heuristics.ignored_keys.iter().any(|key| *key == normalized_key) {
        return Bucket::Ignored;
    }
    Bucket::Event
}

/// Detect the event type from a record's top-level keys.
///
/// The first candidate key holding a non-empty string wins; its value is
/// trimmed. Detection never looks at flattened paths.
pub fn detect_event_type(record: &Record, heuristics: &Heuristics) -> String {
    for key in heuristics.event_type_keys {
        if let Some(Value::String(value)) = record.get(*key)
            && !value.is_empty()
        {
            return value.trim().to_string();
        }
    }
    heuristics.fallback_event_type.to_string()
}
