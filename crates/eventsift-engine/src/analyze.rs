use crate::classify::{Bucket, classify_field, detect_event_type, normalize_key};
use crate::flatten::flatten_record;
use crate::infer::{example_value, infer_type};
use crate::loader::load_records;
use eventsift_types::{
    Error, EventSchema, Heuristics, ImportSettings, PropertySuggestion, Record, Result,
    SchemaSuggestions,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

const DELIVERY_STRATEGY: &str = "timely";
const IMPORT_NOTES: &str =
    "Review mappings before production import; adjust warehouse queries for column names.";

const USER_DESCRIPTION: &str = "User-level attribute inferred from payload";
const GROUP_DESCRIPTION: &str = "Group/organization attribute inferred from payload";

/// Read a payload file and analyze it with the default heuristics.
pub fn analyze_payload(path: &Path) -> Result<SchemaSuggestions> {
    let text = std::fs::read_to_string(path)?;
    let records = load_records(&text);
    if records.is_empty() {
        return Err(Error::NoRecords {
            path: Some(path.to_path_buf()),
        });
    }
    analyze_records(&records, &Heuristics::DEFAULT)
}

/// Analyze raw payload text with caller-provided heuristics.
pub fn analyze_text(text: &str, heuristics: &Heuristics) -> Result<SchemaSuggestions> {
    let records = load_records(text);
    if records.is_empty() {
        return Err(Error::NoRecords { path: None });
    }
    analyze_records(&records, heuristics)
}

/// Aggregate flattened, classified fields across records into the final
/// suggestions.
///
/// Registries are first-seen-wins per bucket: a later occurrence of a name
/// never overwrites the stored suggestion, even when it would infer a
/// different datatype.
pub fn analyze_records(records: &[Record], heuristics: &Heuristics) -> Result<SchemaSuggestions> {
    if records.is_empty() {
        return Err(Error::NoRecords { path: None });
    }

    let mut event_map: BTreeMap<String, BTreeMap<String, PropertySuggestion>> = BTreeMap::new();
    let mut user_props: BTreeMap<String, PropertySuggestion> = BTreeMap::new();
    let mut group_props: BTreeMap<String, PropertySuggestion> = BTreeMap::new();

    for record in records {
        let event_type = detect_event_type(record, heuristics);
        let event_props = event_map.entry(event_type).or_default();

        for (key, value) in flatten_record(record) {
            let name = normalize_key(&key);
            match classify_field(&name, heuristics) {
                Bucket::User => {
                    insert_if_absent(&mut user_props, &name, &value, USER_DESCRIPTION.to_string());
                }
                Bucket::Group => {
                    insert_if_absent(&mut group_props, &name, &value, GROUP_DESCRIPTION.to_string());
                }
                Bucket::Event => {
                    let description = format!("Captured from field `{}`", name);
                    insert_if_absent(event_props, &name, &value, description);
                }
                Bucket::Ignored => {}
            }
        }
    }

    let event_schemas = event_map
        .into_iter()
        .map(|(event_type, props)| EventSchema {
            event_type,
            properties: props.into_values().collect(),
        })
        .collect();

    let import_settings = ImportSettings {
        deduplication_key: guess_dedup_key(records, heuristics),
        timestamp_key: guess_timestamp_key(records),
        delivery_strategy: DELIVERY_STRATEGY.to_string(),
        notes: IMPORT_NOTES.to_string(),
    };

    Ok(SchemaSuggestions {
        event_schemas,
        user_properties: user_props.into_values().collect(),
        group_properties: group_props.into_values().collect(),
        import_settings,
    })
}

/// Insert-if-absent: the first suggestion recorded for a name wins; later
/// sightings leave it untouched.
fn insert_if_absent(
    registry: &mut BTreeMap<String, PropertySuggestion>,
    name: &str,
    value: &Value,
    description: String,
) {
    registry
        .entry(name.to_string())
        .or_insert_with(|| PropertySuggestion {
            name: name.to_string(),
            datatype: infer_type(value),
            example: example_value(value),
            description: Some(description),
        });
}

/// First top-level key, scanning records then keys in input order, that looks
/// like an event timestamp.
fn guess_timestamp_key(records: &[Record]) -> String {
    for record in records {
        for key in record.keys() {
            let lowered = key.to_lowercase();
            if lowered.contains("time") || lowered.contains("timestamp") || lowered.ends_with("_at")
            {
                return key.clone();
            }
        }
    }
    "timestamp".to_string()
}

/// Count per-record occurrences of dedup candidate keys under their original
/// spelling. The highest count wins; ties break to the candidate encountered
/// first in input order.
fn guess_dedup_key(records: &[Record], heuristics: &Heuristics) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        for key in record.keys() {
            let lowered = key.to_lowercase();
            if !heuristics.dedup_candidates.iter().any(|c| *c == lowered) {
                continue;
            }
            match counts.iter_mut().find(|entry| entry.0 == *key) {
                Some(entry) => entry.1 += 1,
                None => counts.push((key.clone(), 1)),
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in &counts {
        if best.is_none_or(|(_, best_count)| *count > best_count) {
            best = Some((name.as_str(), *count));
        }
    }
    match best {
        Some((name, _)) => name.to_string(),
        None => "event_id".to_string(),
    }
}
