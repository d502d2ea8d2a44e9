// Schema inference engine - pure business logic over in-memory records.
// The only I/O in this crate is analyze_payload reading the input file once.

pub mod analyze;
pub mod classify;
pub mod flatten;
pub mod infer;
pub mod loader;

pub use analyze::{analyze_payload, analyze_records, analyze_text};
pub use classify::{Bucket, classify_field, detect_event_type, normalize_key};
pub use flatten::flatten_record;
pub use infer::{example_value, infer_type};
pub use loader::load_records;
