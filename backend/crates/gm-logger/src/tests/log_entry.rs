use crate::{LogEntry, LogFields, LogLevel};

use chrono::{TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, ends_with};
use serde_json::{Value, json};

// =========================================================================
// Record Shape
// =========================================================================

#[test]
fn given_entry_without_fields_when_to_record_then_only_base_keys() {
    // Given
    let timestamp = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let entry = LogEntry::at(timestamp, LogLevel::Info, "Server started", LogFields::new());

    // When
    let record = entry.to_record();

    // Then
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["timestamp", "level", "message"]);
    assert_eq!(record["timestamp"], json!("2026-10-16T09:30:00.000Z"));
    assert_eq!(record["level"], json!("info"));
    assert_eq!(record["message"], json!("Server started"));
}

#[test]
fn given_fields_when_to_record_then_appended_after_base_keys() {
    // Given
    let fields = LogFields::new().tool("generate_text").duration_ms(1500);
    let entry = LogEntry::new(LogLevel::Warn, "slow tool", fields);

    // When
    let record = entry.to_record();

    // Then
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["timestamp", "level", "message", "tool", "durationMs"]
    );
    assert_eq!(record["tool"], json!("generate_text"));
    assert_eq!(record["durationMs"], json!(1500));
}

#[test]
fn given_message_field_when_to_record_then_field_overrides_positional_message() {
    // Given
    let fields = LogFields::new().with("message", "from fields");
    let entry = LogEntry::new(LogLevel::Info, "positional", fields);

    // When
    let record = entry.to_record();

    // Then
    assert_eq!(record["message"], json!("from fields"));
    assert_that!(record.len(), eq(3));
}

#[test]
fn given_level_field_when_to_record_then_field_value_written_verbatim() {
    // Given
    let fields = LogFields::new().with("level", "custom");
    let entry = LogEntry::new(LogLevel::Error, "boom", fields);

    // When
    let record = entry.to_record();

    // Then
    assert_eq!(record["level"], json!("custom"));
    assert_that!(entry.level(), eq(LogLevel::Error));
}

// =========================================================================
// Line Encoding
// =========================================================================

#[test]
fn given_entry_when_to_line_then_single_newline_terminated_json_line() {
    // Given
    let entry = LogEntry::new(LogLevel::Debug, "one", LogFields::new());

    // When
    let line = entry.to_line().unwrap();

    // Then
    assert_that!(line.as_str(), ends_with("}\n"));
    assert_that!(line.matches('\n').count(), eq(1));
    let parsed: Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(parsed["level"], json!("debug"));
}

#[test]
fn given_newlines_in_values_when_to_line_then_escaped_inside_line() {
    // Given
    let fields = LogFields::new().error("line one\nline two\r\n");
    let entry = LogEntry::new(LogLevel::Error, "multi\nline", fields);

    // When
    let line = entry.to_line().unwrap();

    // Then
    assert_that!(line.matches('\n').count(), eq(1));
    let parsed: Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(parsed["message"], json!("multi\nline"));
    assert_eq!(parsed["error"], json!("line one\nline two\r\n"));
}

#[test]
fn given_entry_when_serialized_then_matches_record() {
    // Given
    let entry = LogEntry::new(
        LogLevel::Info,
        "tool call",
        LogFields::new().request_id("abc-123"),
    );

    // When
    let value = serde_json::to_value(&entry).unwrap();

    // Then
    assert_eq!(value, Value::Object(entry.to_record()));
}
