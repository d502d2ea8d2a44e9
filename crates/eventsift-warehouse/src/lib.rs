//! Example SQL statements projecting inferred event schemas out of a staged
//! raw-JSON column, one template per supported warehouse.

use eventsift_types::{Error, EventSchema, PropertySuggestion, Result, SchemaSuggestions};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Supported warehouse dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Snowflake,
    Databricks,
    Bigquery,
    Redshift,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::Snowflake,
        Dialect::Databricks,
        Dialect::Bigquery,
        Dialect::Redshift,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Snowflake => "snowflake",
            Dialect::Databricks => "databricks",
            Dialect::Bigquery => "bigquery",
            Dialect::Redshift => "redshift",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "snowflake" => Ok(Dialect::Snowflake),
            "databricks" => Ok(Dialect::Databricks),
            "bigquery" => Ok(Dialect::Bigquery),
            "redshift" => Ok(Dialect::Redshift),
            _ => Err(Error::UnsupportedDialect(s.to_string())),
        }
    }
}

/// Render one example query per dialect, keyed by dialect name.
pub fn generate_queries(suggestions: &SchemaSuggestions) -> BTreeMap<String, String> {
    Dialect::ALL
        .iter()
        .map(|dialect| {
            (
                dialect.name().to_string(),
                example_query(*dialect, &suggestions.event_schemas),
            )
        })
        .collect()
}

/// Build the staged `WITH` clause plus `UNION ALL`-joined projection blocks
/// for a single dialect.
pub fn example_query(dialect: Dialect, event_schemas: &[EventSchema]) -> String {
    let selects: Vec<String> = event_schemas
        .iter()
        .map(|schema| select_block(schema, dialect))
        .collect();
    let body = selects.join("\nUNION ALL\n");

    let header = match dialect {
        Dialect::Snowflake => concat!(
            "-- Snowflake example: staged JSON ingested into VARIANT column named payload\n",
            "WITH staged AS (\n",
            "    SELECT payload, metadata:source_file::string AS source_file\n",
            "    FROM @analytics.stage/events\n",
            ")\n",
        ),
        Dialect::Databricks => concat!(
            "-- Databricks example leveraging Auto Loader\n",
            "WITH bronze AS (\n",
            "    SELECT * FROM delta.`/mnt/events/raw`\n",
            ")\n",
        ),
        Dialect::Bigquery => concat!(
            "-- BigQuery example reading from JSON ingestion table\n",
            "WITH source AS (\n",
            "    SELECT payload, _FILE_NAME AS source_file\n",
            "    FROM `analytics.events_raw`\n",
            ")\n",
        ),
        Dialect::Redshift => concat!(
            "-- Redshift example using SUPER column projection\n",
            "WITH staged AS (\n",
            "    SELECT payload\n",
            "    FROM events_raw\n",
            ")\n",
        ),
    };

    format!("{}SELECT * FROM ({})", header, body)
}

/// One SELECT block per event schema: a quoted event_type literal, one
/// projected column per property, and a load timestamp trailer.
fn select_block(schema: &EventSchema, dialect: Dialect) -> String {
    let event_literal = schema.event_type.replace('\'', "''");
    let mut lines = vec!["SELECT".to_string()];
    lines.push(format!("    '{}' AS event_type,", event_literal));
    for prop in &schema.properties {
        lines.push(format!("    {},", projection(prop, dialect)));
    }
    lines.push("    CURRENT_TIMESTAMP AS loaded_at".to_string());
    lines.join("\n")
}

fn projection(prop: &PropertySuggestion, dialect: Dialect) -> String {
    let alias = prop
        .name
        .replace('.', "_")
        .replace('[', "_")
        .replace(']', "");
    let mut pointer = String::from("payload");

    match dialect {
        Dialect::Snowflake => {
            for part in path_parts(&prop.name) {
                pointer.push_str(&format!(":\"{}\"", part));
            }
            format!("{}::string AS {}", pointer, alias)
        }
        Dialect::Databricks | Dialect::Bigquery => {
            for part in path_parts(&prop.name) {
                pointer.push('.');
                pointer.push_str(&part);
            }
            format!("{} AS {}", pointer, alias)
        }
        Dialect::Redshift => {
            for part in path_parts(&prop.name) {
                pointer.push_str(&format!("['{}']", part));
            }
            format!("{} AS {}", pointer, alias)
        }
    }
}

/// Split a property name on `.` and bracket accessors into path components,
/// dropping blanks and surrounding quotes.
fn path_parts(name: &str) -> Vec<String> {
    name.replace('[', ".")
        .replace(']', "")
        .split('.')
        .filter_map(|part| {
            let cleaned = part.trim().trim_matches('\'');
            (!cleaned.is_empty()).then(|| cleaned.to_string())
        })
        .collect()
}
