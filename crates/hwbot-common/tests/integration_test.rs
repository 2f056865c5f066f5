//! Integration tests for hwbot-common crate.

use hwbot_common::{
    format_timestamp, truncate_string, ChatTarget, FromDate, HomeworkRecord, HomeworkStatus,
    HwbotError,
};
use serde_json::json;

#[test]
fn test_from_date_display() {
    assert_eq!(FromDate(1_704_110_400).to_string(), "1704110400");
    assert_eq!(format_timestamp(FromDate(0)), "1970-01-01 00:00:00 UTC");
}

#[test]
fn test_chat_target_serialization() {
    let target = ChatTarget::parse("-100200300");
    let serialized = serde_json::to_string(&target).unwrap();
    let deserialized: ChatTarget = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, target);
}

#[test]
fn test_status_serializes_as_wire_code() {
    assert_eq!(
        serde_json::to_string(&HomeworkStatus::Reviewing).unwrap(),
        "\"reviewing\""
    );
    let parsed: HomeworkStatus = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(parsed, HomeworkStatus::Rejected);
}

#[test]
fn test_record_from_api_object() {
    let record = HomeworkRecord::from(json!({
        "homework_name": "username__hw_python_oop.zip",
        "status": "reviewing",
        "reviewer_comment": "",
    }));

    assert_eq!(record.homework_name().unwrap(), "username__hw_python_oop.zip");
    assert_eq!(record.status().unwrap(), HomeworkStatus::Reviewing);
}

#[test]
fn test_record_unknown_status_is_not_schema_error() {
    let record = HomeworkRecord::from(json!({"homework_name": "hw", "status": "on_hold"}));
    assert!(matches!(
        record.status(),
        Err(HwbotError::UnknownVerdict { status }) if status == "on_hold"
    ));
}

#[test]
fn test_truncate_string() {
    assert_eq!(truncate_string("abcdef", 5), "ab...");
    assert_eq!(truncate_string("abc", 5), "abc");
}
