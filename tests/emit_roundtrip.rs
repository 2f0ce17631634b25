use chrono::Utc;
use std::fs;
use tempfile::tempdir;
use unclog::config::keys;
use unclog::{log_info, log_success, log_warning, Configuration, Emitter, LogRecord, LogRequest};

fn emitter_for(dir: &std::path::Path) -> Emitter {
    let mut config = Configuration::default();
    config.set(keys::LOG_PATH, dir.to_string_lossy().to_string());
    config.set(keys::SHOW_LOGS, false);
    config.set(keys::APPLICATION_NAME, "roundtrip");
    Emitter::new(config)
}

fn todays_file(dir: &std::path::Path) -> std::path::PathBuf {
    dir.join(format!("{}.unclog", Utc::now().format("%Y-%m-%d")))
}

#[test]
fn emitted_records_parse_back_as_json_lines() {
    let root = tempdir().unwrap();
    let logs = root.path().join("logs");
    let emitter = emitter_for(&logs);

    log_info!(emitter, "service starting");
    log_success!(
        emitter,
        "migration applied",
        serde_json::json!({"migration": "0042_add_index", "rows": 15301})
    );
    log_warning!(emitter, "cache miss rate above threshold");

    let contents = fs::read_to_string(todays_file(&logs)).unwrap();
    // Consumers parse JSON lines, tolerant of trailing blank lines.
    let records: Vec<LogRecord> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].head, "service starting");
    assert_eq!(records[1].application, "roundtrip");
    assert_eq!(
        records[1].body.as_ref().unwrap()["migration"],
        "0042_add_index"
    );
    assert_eq!(records[2].call_stack.len(), 1);
    assert!(records[2].call_stack[0].file.ends_with("emit_roundtrip.rs"));

    // Identifiers are unique and timestamps were fixed at construction.
    assert_ne!(records[0].identifier, records[1].identifier);
    assert!(records[0].datetime <= records[1].datetime);
    assert!(records[1].datetime <= records[2].datetime);
}

#[test]
fn disabling_the_file_sink_stops_persistence_immediately() {
    let root = tempdir().unwrap();
    let logs = root.path().join("logs");
    let mut emitter = emitter_for(&logs);

    emitter.info("persisted");
    emitter.config_mut().set(keys::WRITE_LOGS, false);
    emitter.info("not persisted");

    let contents = fs::read_to_string(todays_file(&logs)).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn explicit_directory_overrides_the_configured_log_path() {
    let root = tempdir().unwrap();
    let configured = root.path().join("configured");
    let explicit = root.path().join("explicit");
    let emitter = emitter_for(&configured);

    emitter.emit(LogRequest::error("routed elsewhere").directory(&explicit));

    assert!(!configured.exists());
    assert!(todays_file(&explicit).exists());
}
