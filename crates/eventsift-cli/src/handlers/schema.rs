use crate::types::SchemaFormat;
use anyhow::Result;
use eventsift_engine::analyze_payload;
use eventsift_types::{PropertySuggestion, SchemaSuggestions};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn handle(json_path: &Path, format: SchemaFormat) -> Result<()> {
    let suggestions = analyze_payload(json_path)?;

    match format {
        SchemaFormat::Json => println!("{}", serde_json::to_string_pretty(&suggestions)?),
        SchemaFormat::Plain => print_suggestions(&suggestions),
    }

    Ok(())
}

fn print_suggestions(suggestions: &SchemaSuggestions) {
    for schema in &suggestions.event_schemas {
        println!("{}", schema.event_type.bright_blue().bold());
        if schema.properties.is_empty() {
            println!("  (no event properties)");
        }
        for prop in &schema.properties {
            print_property(prop);
        }
        println!();
    }

    println!("{}", "User properties".bold());
    if suggestions.user_properties.is_empty() {
        println!("  (none)");
    }
    for prop in &suggestions.user_properties {
        print_property(prop);
    }
    println!();

    println!("{}", "Group properties".bold());
    if suggestions.group_properties.is_empty() {
        println!("  (none)");
    }
    for prop in &suggestions.group_properties {
        print_property(prop);
    }
    println!();

    let settings = &suggestions.import_settings;
    println!("{}", "Import settings".bold());
    println!("  Deduplication key: {}", settings.deduplication_key.green());
    println!("  Timestamp key:     {}", settings.timestamp_key.green());
    println!("  Delivery strategy: {}", settings.delivery_strategy);
}

fn print_property(prop: &PropertySuggestion) {
    match &prop.example {
        Some(example) => println!(
            "  {} ({}) e.g. {}",
            prop.name,
            prop.datatype.cyan(),
            example.dimmed()
        ),
        None => println!("  {} ({})", prop.name, prop.datatype.cyan()),
    }
}
