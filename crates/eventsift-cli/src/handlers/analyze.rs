use crate::report;
use anyhow::Result;
use eventsift_assist::SchemaAssistant;
use eventsift_engine::{analyze_records, load_records};
use eventsift_types::{Error, Heuristics};
use eventsift_warehouse::generate_queries;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn handle(json_path: &Path, output: &Path, offline: bool) -> Result<()> {
    let text = std::fs::read_to_string(json_path)?;
    let records = load_records(&text);
    if records.is_empty() {
        return Err(Error::NoRecords {
            path: Some(json_path.to_path_buf()),
        }
        .into());
    }
    println!(
        "Loaded {} record(s) from {}",
        records.len().bold(),
        json_path.display()
    );

    let suggestions = analyze_records(&records, &Heuristics::DEFAULT)?;

    println!(
        "Detected {} event type(s):",
        suggestions.event_schemas.len().bold()
    );
    for schema in &suggestions.event_schemas {
        println!(
            "  - {} ({} properties)",
            schema.event_type.bright_blue(),
            schema.properties.len()
        );
    }
    println!(
        "Identified {} user and {} group propert(ies)",
        suggestions.user_properties.len().bold(),
        suggestions.group_properties.len().bold()
    );

    let settings = &suggestions.import_settings;
    println!(
        "Guessed keys: dedup {} / timestamp {}",
        settings.deduplication_key.green(),
        settings.timestamp_key.green()
    );

    let queries = generate_queries(&suggestions);

    let assistant = if offline {
        SchemaAssistant::offline()
    } else {
        SchemaAssistant::from_env()
    };
    let summary = assistant.summarize(&suggestions);

    report::save_report(output, &suggestions, &queries, &summary)?;
    println!("Report saved to {}", output.display());

    Ok(())
}
