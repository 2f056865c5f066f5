//! Shape checks on the API payload.

use hwbot_common::{json_type_name, HomeworkRecord, HwbotError, Result};
use serde_json::Value;

/// Payload field listing the updated homeworks.
pub const HOMEWORKS_FIELD: &str = "homeworks";

/// Extracts the `homeworks` list from an API payload.
///
/// Elements are returned in order and untouched; their fields are checked
/// later, when a record is formatted.
pub fn check_response(response: &Value) -> Result<Vec<HomeworkRecord>> {
    let payload = response.as_object().ok_or_else(|| {
        HwbotError::schema(format!(
            "response must be a JSON object, found {}",
            json_type_name(response)
        ))
    })?;

    match payload.get(HOMEWORKS_FIELD) {
        None => Err(HwbotError::missing_field(HOMEWORKS_FIELD)),
        Some(Value::Array(homeworks)) => {
            Ok(homeworks.iter().cloned().map(HomeworkRecord::from).collect())
        }
        Some(other) => Err(HwbotError::field_type(
            HOMEWORKS_FIELD,
            "an array",
            json_type_name(other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_homeworks() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        assert_eq!(err.kind(), "schema");
        assert_eq!(err.field(), Some("homeworks"));
    }

    #[test]
    fn test_non_array_homeworks() {
        for value in [json!("hw"), json!({"a": 1}), json!(1), json!(true), json!(null)] {
            let err = check_response(&json!({ "homeworks": value })).unwrap_err();
            assert_eq!(err.field(), Some("homeworks"), "accepted {value}");
            assert!(err.to_string().contains("must be an array"));
        }
    }

    #[test]
    fn test_empty_array() {
        assert!(check_response(&json!({"homeworks": []})).unwrap().is_empty());
    }

    #[test]
    fn test_elements_returned_in_order_unmodified() {
        let first = json!({"homework_name": "a", "status": "approved"});
        let second = json!(42);
        let records = check_response(&json!({"homeworks": [first, second]})).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_value(), &first);
        assert_eq!(records[1].as_value(), &second);
    }

    #[test]
    fn test_non_object_payload() {
        let err = check_response(&json!([{"homework_name": "a"}])).unwrap_err();
        assert_eq!(err.kind(), "schema");
        assert!(err.to_string().contains("found an array"));
    }
}
