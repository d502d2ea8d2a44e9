use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    load_env(cli.env_file.as_deref());

    match cli.command {
        Commands::Analyze {
            json_path,
            output,
            offline,
        } => handlers::analyze::handle(&json_path, &output, offline),
        Commands::Schema { json_path, format } => handlers::schema::handle(&json_path, format),
        Commands::Queries { json_path, dialect } => handlers::queries::handle(&json_path, &dialect),
    }
}

/// Populate the process environment from a dotenv file. Variables already set
/// always win; a missing default .env is not an error.
fn load_env(explicit: Option<&Path>) {
    match explicit {
        Some(path) => {
            if let Err(e) = dotenvy::from_path(path) {
                eprintln!("Warning: could not load env file {}: {}", path.display(), e);
            }
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }
}
