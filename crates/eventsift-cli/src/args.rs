use crate::types::SchemaFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eventsift")]
#[command(about = "Infer analytics event schemas from JSON payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Load environment variables from this file instead of the default .env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a JSON payload and write the full import blueprint
    Analyze {
        /// Path to the JSON payload to inspect
        json_path: PathBuf,

        /// Where to write the blueprint
        #[arg(long, default_value = "artifacts/analysis_report.md")]
        output: PathBuf,

        /// Skip the LLM call and use the offline summary
        #[arg(long)]
        offline: bool,
    },

    /// Print the inferred schema suggestions
    Schema {
        /// Path to the JSON payload to inspect
        json_path: PathBuf,

        #[arg(long, default_value = "plain")]
        format: SchemaFormat,
    },

    /// Print the example projection query for one warehouse dialect
    Queries {
        /// Path to the JSON payload to inspect
        json_path: PathBuf,

        #[arg(long, default_value = "snowflake")]
        dialect: String,
    },
}
