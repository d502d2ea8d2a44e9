use eventsift_types::Record;
use serde_json::Value;

/// Collapse nested objects into dotted-path leaf entries.
///
/// Arrays, strings, numbers, booleans, and null are leaves; arrays are never
/// expanded into indexed paths. Encounter order is preserved.
pub fn flatten_record(record: &Record) -> Record {
    let mut flat = Record::new();
    flatten_into(record, "", &mut flat);
    flat
}

fn flatten_into(map: &Record, parent: &str, out: &mut Record) {
    for (key, value) in map {
        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", parent, key)
        };
        match value {
            Value::Object(inner) => flatten_into(inner, &path, out),
            _ => {
                out.insert(path, value.clone());
            }
        }
    }
}
