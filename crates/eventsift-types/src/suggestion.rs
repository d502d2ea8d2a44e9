use serde::{Deserialize, Serialize};

/// A single recommended property mapping.
///
/// Identity is `name`: within a bucket the first suggestion created for a
/// name wins and is never overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySuggestion {
    pub name: String,

    /// Inferred datatype label, e.g. `string`, `double`, `array<integer>`.
    pub datatype: String,

    /// Short preview of the first value seen for this name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Inferred schema for one detected event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSchema {
    pub event_type: String,

    /// Event-level properties, sorted by name.
    pub properties: Vec<PropertySuggestion>,
}

/// Recommended import-time settings derived from the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    pub deduplication_key: String,
    pub timestamp_key: String,
    pub delivery_strategy: String,
    pub notes: String,
}

/// Aggregate analysis result, consumed by the SQL generator and the report
/// writer. Immutable once produced; every list is sorted lexicographically
/// for deterministic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSuggestions {
    pub event_schemas: Vec<EventSchema>,
    pub user_properties: Vec<PropertySuggestion>,
    pub group_properties: Vec<PropertySuggestion>,
    pub import_settings: ImportSettings,
}
