use serde_json::{Map, Value};

/// A single input event: an ordered mapping from field names to JSON values.
///
/// Key order follows the input document (`serde_json` is built with
/// `preserve_order`); the timestamp-key guess depends on it.
pub type Record = Map<String, Value>;
