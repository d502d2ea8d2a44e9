use eventsift::report::render_report;
use eventsift_assist::offline_summary;
use eventsift_engine::analyze_text;
use eventsift_types::Heuristics;
use eventsift_warehouse::generate_queries;

const PAYLOAD: &str = r#"[
  {"event_type": "purchase_completed", "event_id": "e1", "timestamp": "2024-05-01T10:15:00Z", "user_id": "u1", "cart": {"currency": "USD"}},
  {"event_type": "cart_abandoned", "event_id": "e2", "timestamp": "2024-05-01T11:02:00Z", "user_id": "u2", "organization": "acme"}
]"#;

#[test]
fn test_full_pipeline_renders_blueprint() {
    let suggestions = analyze_text(PAYLOAD, &Heuristics::DEFAULT).unwrap();
    let queries = generate_queries(&suggestions);
    let summary = offline_summary(&suggestions);
    let report = render_report(&suggestions, &queries, &summary);

    assert!(report.contains("### cart_abandoned"));
    assert!(report.contains("### purchase_completed"));
    assert!(report.contains("- `cart.currency` (string) e.g. `USD`"));
    assert!(report.contains("- `user_id` (string)"));
    assert!(report.contains("- `organization` (string)"));
    assert!(report.contains("- Deduplication key: `event_id`"));
    assert!(report.contains("- Timestamp key: `timestamp`"));
    assert!(report.contains("cart_abandoned, purchase_completed"));

    // One fenced block per dialect
    assert_eq!(report.matches("```sql").count(), 4);
    for dialect in ["Snowflake", "Databricks", "Bigquery", "Redshift"] {
        assert!(report.contains(&format!("### {}", dialect)));
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let first = analyze_text(PAYLOAD, &Heuristics::DEFAULT).unwrap();
    let second = analyze_text(PAYLOAD, &Heuristics::DEFAULT).unwrap();
    let first_report = render_report(&first, &generate_queries(&first), &offline_summary(&first));
    let second_report =
        render_report(&second, &generate_queries(&second), &offline_summary(&second));
    assert_eq!(first_report, second_report);
}
