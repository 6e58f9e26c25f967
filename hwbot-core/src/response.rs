//! Review API response handling
//!
//! Validation of the raw JSON payload returned by the homework statuses
//! endpoint, and conversion of a single homework record into the text of a
//! notification. Both operate on `serde_json::Value` so that shape errors can
//! be reported precisely instead of surfacing as generic decode failures.

use crate::domain::homework::HomeworkStatus;
use crate::error::{ResponseError, Result};
use serde_json::Value;
use tracing::info;

/// Key holding the list of homework records
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key holding the server timestamp to use as the next lower bound
pub const CURRENT_DATE_KEY: &str = "current_date";
/// Key holding the homework name in a record
pub const HOMEWORK_NAME_KEY: &str = "homework_name";
/// Key holding the review status in a record
pub const STATUS_KEY: &str = "status";

/// Validates the API payload and returns its homework records
///
/// Checks, in order:
/// 1. the payload is a JSON object
/// 2. it has a `homeworks` key
/// 3. it has a `current_date` key
/// 4. `homeworks` is an array
///
/// The returned slice is the array as received; an empty slice is valid and
/// means there is nothing new to report.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    info!("Checking API response");

    let body = response.as_object().ok_or_else(|| {
        ResponseError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_type(response)
        ))
    })?;

    let homeworks = body
        .get(HOMEWORKS_KEY)
        .ok_or(ResponseError::MissingKey(HOMEWORKS_KEY))?;

    if !body.contains_key(CURRENT_DATE_KEY) {
        return Err(ResponseError::MissingKey(CURRENT_DATE_KEY));
    }

    let homeworks = homeworks.as_array().ok_or_else(|| {
        ResponseError::MalformedResponse(format!(
            "expected \"{}\" to be an array, got {}",
            HOMEWORKS_KEY,
            json_type(homeworks)
        ))
    })?;

    info!("API response is valid ({} homework(s))", homeworks.len());
    Ok(homeworks)
}

/// Reads `current_date` as a Unix timestamp
///
/// Returns `None` when the key is missing or not an integer.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

/// Builds the notification text for a single homework record
///
/// Only the record passed in is inspected; callers choose which record
/// (normally the most recent one, at index 0) to report.
pub fn parse_status(homework: &Value) -> Result<String> {
    info!("Checking homework status");

    let record = homework.as_object().ok_or_else(|| {
        ResponseError::MalformedResponse(format!(
            "expected homework to be a JSON object, got {}",
            json_type(homework)
        ))
    })?;

    let homework_name = required_str(record, HOMEWORK_NAME_KEY)?;
    let status = required_str(record, STATUS_KEY)?;

    let status: HomeworkStatus = status
        .parse()
        .map_err(ResponseError::UnknownStatus)?;

    info!("Homework \"{}\" has status {}", homework_name, status);

    Ok(format!(
        "Homework review status changed for \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}

/// Fetches a non-empty string field, treating absent, empty, or null as missing
fn required_str<'a>(
    record: &'a serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<&'a str> {
    match record.get(key) {
        None | Some(Value::Null) => Err(ResponseError::MissingKey(key)),
        Some(Value::String(s)) if s.is_empty() => Err(ResponseError::MissingKey(key)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ResponseError::MalformedResponse(format!(
            "expected \"{}\" to be a string, got {}",
            key,
            json_type(other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =============================================================================
    // check_response
    // =============================================================================

    #[test]
    fn test_empty_homeworks_is_valid() {
        let response = json!({"current_date": 1, "homeworks": []});
        let homeworks = check_response(&response).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn test_homeworks_returned_unchanged() {
        let response = json!({
            "current_date": 1,
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing"},
                {"homework_name": "hw1", "status": "approved"}
            ]
        });
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw2");
        assert_eq!(homeworks[1]["homework_name"], "hw1");
    }

    #[test]
    fn test_non_object_is_malformed() {
        let response = json!([{"homeworks": []}]);
        assert!(matches!(
            check_response(&response),
            Err(ResponseError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_missing_homeworks_key() {
        let response = json!({"current_date": 1});
        assert_eq!(
            check_response(&response),
            Err(ResponseError::MissingKey("homeworks"))
        );
    }

    #[test]
    fn test_missing_current_date_key() {
        let response = json!({"homeworks": []});
        assert_eq!(
            check_response(&response),
            Err(ResponseError::MissingKey("current_date"))
        );
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let response = json!({"homeworks": "not a list", "current_date": 1});
        assert!(matches!(
            check_response(&response),
            Err(ResponseError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_key_checks_run_before_type_check() {
        // Wrong type and a missing key: the missing key wins.
        let response = json!({"homeworks": "not a list"});
        assert_eq!(
            check_response(&response),
            Err(ResponseError::MissingKey("current_date"))
        );
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({"current_date": 1700000000})), Some(1700000000));
        assert_eq!(current_date(&json!({"current_date": "soon"})), None);
        assert_eq!(current_date(&json!({})), None);
    }

    // =============================================================================
    // parse_status
    // =============================================================================

    #[test]
    fn test_parse_approved() {
        let message = parse_status(&json!({"homework_name": "hw1", "status": "approved"})).unwrap();
        assert!(message.contains("hw1"));
        assert!(message.contains(HomeworkStatus::Approved.verdict()));
    }

    #[test]
    fn test_parse_every_known_status() {
        for status in HomeworkStatus::ALL {
            let record = json!({"homework_name": "hw", "status": status.as_str()});
            let message = parse_status(&record).unwrap();
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_parse_unknown_status() {
        let record = json!({"homework_name": "hw1", "status": "unknown_status"});
        assert_eq!(
            parse_status(&record),
            Err(ResponseError::UnknownStatus("unknown_status".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_name() {
        let record = json!({"status": "approved"});
        let err = parse_status(&record).unwrap_err();
        assert_eq!(err, ResponseError::MissingKey("homework_name"));
        assert!(err.to_string().contains("homework_name"));
    }

    #[test]
    fn test_parse_empty_values_count_as_missing() {
        let record = json!({"homework_name": "", "status": "approved"});
        assert_eq!(
            parse_status(&record),
            Err(ResponseError::MissingKey("homework_name"))
        );

        let record = json!({"homework_name": "hw1", "status": ""});
        assert_eq!(parse_status(&record), Err(ResponseError::MissingKey("status")));
    }

    #[test]
    fn test_parse_missing_status() {
        let record = json!({"homework_name": "hw1"});
        assert_eq!(parse_status(&record), Err(ResponseError::MissingKey("status")));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let record = json!({"homework_name": "hw1", "status": "rejected"});
        assert_eq!(parse_status(&record).unwrap(), parse_status(&record).unwrap());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let record = json!({
            "id": 124,
            "homework_name": "user__hw_python_oop.zip",
            "lesson_name": "OOP",
            "reviewer_comment": "Nice",
            "date_updated": "2020-02-13T14:40:57Z",
            "status": "reviewing"
        });
        let message = parse_status(&record).unwrap();
        assert!(message.contains("user__hw_python_oop.zip"));
    }
}
