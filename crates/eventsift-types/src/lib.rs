pub mod error;
pub mod heuristics;
pub mod record;
pub mod suggestion;

pub use error::{Error, Result};
pub use heuristics::Heuristics;
pub use record::Record;
pub use suggestion::{EventSchema, ImportSettings, PropertySuggestion, SchemaSuggestions};
