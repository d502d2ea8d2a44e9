use anyhow::Result;
use eventsift_types::{PropertySuggestion, SchemaSuggestions};
use std::collections::BTreeMap;
use std::path::Path;

/// Write the import blueprint to disk, creating parent directories.
pub fn save_report(
    path: &Path,
    suggestions: &SchemaSuggestions,
    queries: &BTreeMap<String, String>,
    summary: &str,
) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_report(suggestions, queries, summary))?;
    Ok(())
}

/// Render the blueprint text: summary, per-event schemas, user/group
/// properties, import settings, and one fenced SQL block per dialect.
pub fn render_report(
    suggestions: &SchemaSuggestions,
    queries: &BTreeMap<String, String>,
    summary: &str,
) -> String {
    let mut lines: Vec<String> = vec!["# Event Import Blueprint".to_string(), String::new()];

    lines.push("## Summary".to_string());
    lines.push(summary.to_string());
    lines.push(String::new());

    lines.push("## Event Schemas".to_string());
    for schema in &suggestions.event_schemas {
        lines.push(format!("### {}", schema.event_type));
        if schema.properties.is_empty() {
            lines.push("- No event properties detected".to_string());
            continue;
        }
        for prop in &schema.properties {
            lines.push(format_property(prop));
        }
        lines.push(String::new());
    }

    lines.push("## User Properties".to_string());
    if suggestions.user_properties.is_empty() {
        lines.push("- None detected".to_string());
    } else {
        for prop in &suggestions.user_properties {
            lines.push(format_property(prop));
        }
    }
    lines.push(String::new());

    lines.push("## Group Properties".to_string());
    if suggestions.group_properties.is_empty() {
        lines.push("- None detected".to_string());
    } else {
        for prop in &suggestions.group_properties {
            lines.push(format_property(prop));
        }
    }
    lines.push(String::new());

    let settings = &suggestions.import_settings;
    lines.push("## Import Settings".to_string());
    lines.push(format!("- Deduplication key: `{}`", settings.deduplication_key));
    lines.push(format!("- Timestamp key: `{}`", settings.timestamp_key));
    lines.push(format!("- Delivery strategy: {}", settings.delivery_strategy));
    lines.push(format!("- Notes: {}", settings.notes));
    lines.push(String::new());

    lines.push("## Warehouse Queries".to_string());
    for (name, query) in queries {
        lines.push(format!("### {}", title_case(name)));
        lines.push("```sql".to_string());
        lines.push(query.trim().to_string());
        lines.push("```".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

fn format_property(prop: &PropertySuggestion) -> String {
    let mut line = format!("- `{}` ({})", prop.name, prop.datatype);
    if let Some(example) = &prop.example {
        line.push_str(&format!(" e.g. `{}`", example));
    }
    if let Some(description) = &prop.description {
        line.push_str(&format!(" - {}", description));
    }
    line
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
