use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

const STREAMING_PAYLOAD: &str = r#"[
  {"event_type": "playback_started", "event_id": "p-1", "occurred_at": "2024-06-01T20:00:00Z", "user_id": "viewer-4", "quality": "1080p"},
  {"event_type": "playback_paused", "event_id": "p-2", "occurred_at": "2024-06-01T20:05:12Z", "user_id": "viewer-4", "position_seconds": 312.5}
]"#;

fn eventsift() -> Command {
    Command::cargo_bin("eventsift").unwrap()
}

fn write_payload(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("payload.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_analyze_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_payload(&dir, STREAMING_PAYLOAD);
    let output = dir.path().join("out/report.md");

    eventsift()
        .arg("analyze")
        .arg(&payload)
        .arg("--output")
        .arg(&output)
        .arg("--offline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved"));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("# Event Import Blueprint"));
    assert!(text.contains("## Warehouse Queries"));
    assert!(text.contains("playback_started"));
    assert!(text.contains("- Deduplication key: `event_id`"));
}

#[test]
fn test_analyze_fails_without_records() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_payload(&dir, "[1, 2, 3]");
    let output = dir.path().join("report.md");

    eventsift()
        .arg("analyze")
        .arg(&payload)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no JSON records found"));

    // No partial report on failure
    assert!(!output.exists());
}

#[test]
fn test_schema_json_output_parses() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_payload(&dir, STREAMING_PAYLOAD);

    let assert = eventsift()
        .arg("schema")
        .arg(&payload)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["event_schemas"][0]["event_type"], "playback_paused");
    assert_eq!(
        parsed["user_properties"][0]["name"],
        "user_id"
    );
}

#[test]
fn test_queries_prints_dialect_sql() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_payload(&dir, STREAMING_PAYLOAD);

    eventsift()
        .arg("queries")
        .arg(&payload)
        .args(["--dialect", "bigquery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UNION ALL"))
        .stdout(predicate::str::contains("playback_started"));
}

#[test]
fn test_queries_rejects_unknown_dialect() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_payload(&dir, STREAMING_PAYLOAD);

    eventsift()
        .arg("queries")
        .arg(&payload)
        .args(["--dialect", "postgres"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported warehouse dialect"));
}

#[test]
fn test_env_file_is_loaded_set_if_absent() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_payload(&dir, STREAMING_PAYLOAD);
    let env_file = dir.path().join("custom.env");
    fs::write(&env_file, "OPENAI_MODEL=test-model\n").unwrap();
    let output = dir.path().join("report.md");

    eventsift()
        .arg("analyze")
        .arg(&payload)
        .arg("--output")
        .arg(&output)
        .arg("--offline")
        .arg("--env-file")
        .arg(&env_file)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("## Summary"));
}
