/// Keyword tables driving field classification and key guessing.
///
/// The defaults match common product-analytics payloads. Callers pass the
/// table by reference into the engine, so tests can substitute their own
/// without touching global state.
#[derive(Debug, Clone, Copy)]
pub struct Heuristics {
    /// Exact flattened names excluded from every bucket.
    pub ignored_keys: &'static [&'static str],
    /// Substrings marking a field as a user-level attribute.
    pub user_hints: &'static [&'static str],
    /// Substrings marking a field as a group/organization attribute.
    pub group_hints: &'static [&'static str],
    /// Top-level keys probed, in order, for the event type.
    pub event_type_keys: &'static [&'static str],
    /// Lower-cased top-level key names that qualify as dedup candidates.
    pub dedup_candidates: &'static [&'static str],
    /// Event type used when no candidate key holds a non-empty string.
    pub fallback_event_type: &'static str,
}

impl Heuristics {
    pub const DEFAULT: Heuristics = Heuristics {
        ignored_keys: &["timestamp", "time", "ts", "received_at", "sent_at"],
        user_hints: &["user_id", "customer_id", "account_id", "profile", "user"],
        group_hints: &["group_id", "organization", "team", "company", "group"],
        event_type_keys: &["event_type", "event", "action", "type", "name"],
        dedup_candidates: &["event_id", "id", "uuid"],
        fallback_event_type: "unknown_event",
    };
}

impl Default for Heuristics {
    fn default() -> Self {
        Heuristics::DEFAULT
    }
}
