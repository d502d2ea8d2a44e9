use anyhow::Result;
use eventsift_engine::analyze_payload;
use eventsift_warehouse::{Dialect, example_query};
use std::path::Path;

pub fn handle(json_path: &Path, dialect: &str) -> Result<()> {
    let dialect: Dialect = dialect.parse()?;
    let suggestions = analyze_payload(json_path)?;

    println!("{}", example_query(dialect, &suggestions.event_schemas));

    Ok(())
}
