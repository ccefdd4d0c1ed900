//! Section 9.6: Lists from JSON
//!
//! The chapter's running example is a list of issue records. Each record is
//! a JSON object, so it becomes a named list; the top-level array becomes an
//! unnamed list of records. Nothing is simplified into flat vectors along the
//! way: a record's `labels` array stays a list of lists even when it is empty.

use lists_common::json::{from_json_str, to_json};
use lists_common::{Container, ListError, ListResult, Value};
use tracing::info;

/// The sample issues bundled with the chapter.
pub const ISSUES_JSON: &str = include_str!("../data/issues.json");

/// Parses [`ISSUES_JSON`].
pub fn load_issues() -> ListResult<Container> {
    parse_records(ISSUES_JSON)
}

/// Parses a JSON array of records. Anything but a top-level array is a
/// shape error: the rest of the chapter assumes a list of records.
pub fn parse_records(text: &str) -> ListResult<Container> {
    match from_json_str(text)? {
        Value::List(records) if records.names().iter().all(Option::is_none) => {
            info!(records = records.len(), "loaded records");
            Ok(records)
        }
        other => Err(ListError::ShapeMismatch {
            message: format!("expected a JSON array of records, found {}", other.kind()),
        }),
    }
}

/// Serializes records back to pretty JSON.
pub fn records_to_json(records: &Container) -> ListResult<String> {
    let json = to_json(&Value::List(records.clone()));
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lists_common::path::PathSegment;

    #[test]
    fn test_load_issues() {
        let issues = load_issues().unwrap();
        assert_eq!(issues.len(), 4);

        let first = issues.get(&PathSegment::Index(0)).unwrap().as_list().unwrap();
        assert_eq!(
            first.names(),
            vec![
                Some("id"),
                Some("number"),
                Some("title"),
                Some("state"),
                Some("locked"),
                Some("comments"),
                Some("user"),
                Some("labels"),
                Some("assignee"),
            ]
        );
    }

    #[test]
    fn test_empty_arrays_stay_lists() {
        let issues = load_issues().unwrap();
        let labels = issues
            .pluck(&lists_common::path![1, "labels"])
            .unwrap();
        assert_eq!(labels, &Value::List(Container::new()));
    }

    #[test]
    fn test_object_at_top_level_is_rejected() {
        let err = parse_records(r#"{"id": 1}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected a JSON array of records, found list"
        );
        assert!(parse_records("3").is_err());
    }

    #[test]
    fn test_records_round_trip() {
        let issues = load_issues().unwrap();
        let text = records_to_json(&issues).unwrap();
        assert_eq!(parse_records(&text).unwrap(), issues);
    }
}
