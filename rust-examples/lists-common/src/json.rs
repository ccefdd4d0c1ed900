//! # JSON
//!
//! Builds lists from parsed JSON without forcing arrays into uniform
//! vectors: objects become named lists (keys in document order), arrays
//! become unnamed lists and scalars become leaves.
//!
//! ```
//! use lists_common::{list, Value};
//! use lists_common::json::from_json_str;
//!
//! let v = from_json_str(r#"[{"id": 1, "user": {"login": "bob"}}, [true, null]]"#).unwrap();
//! assert_eq!(v, Value::from(list![
//!     list!["id" => 1, "user" => list!["login" => "bob"]],
//!     list![true, Value::Null],
//! ]));
//! ```
//!
//! ## Depth
//!
//! Reading is bounded by [`Options::max_depth`]. `serde_json` stops parsing
//! text at 128 levels on its own, so with a `max_depth` above that, deeper
//! text fails as [`ListError::Json`] instead of
//! [`ListError::DepthExceeded`]. Writing with [`to_json`] recurses without a
//! bound; values built from JSON or through the checked operations never
//! exceed `max_depth`, but a hand-built value can.

use std::collections::HashSet;

use serde_json::{Map, Number, Value as Json};
use tracing::{debug, instrument};

use crate::config::Options;
use crate::container::{Container, Element};
use crate::error::{ListError, ListResult};
use crate::value::Value;

/// Parses JSON text into a [`Value`] with the default options.
#[instrument(level = "trace", skip_all, fields(bytes = text.len()))]
pub fn from_json_str(text: &str) -> ListResult<Value> {
    from_json_str_with(text, &Options::default())
}

pub fn from_json_str_with(text: &str, options: &Options) -> ListResult<Value> {
    let json: Json = serde_json::from_str(text)?;
    from_json_with(&json, options)
}

/// Converts an already parsed JSON document.
pub fn from_json(json: &Json) -> ListResult<Value> {
    from_json_with(json, &Options::default())
}

pub fn from_json_with(json: &Json, options: &Options) -> ListResult<Value> {
    convert(json, 0, options.max_depth)
}

fn convert(json: &Json, depth: usize, limit: usize) -> ListResult<Value> {
    let value = match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => number(n),
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => {
            check_depth(depth + 1, limit)?;
            let list = items
                .iter()
                .map(|item| convert(item, depth + 1, limit).map(Element::unnamed))
                .collect::<ListResult<Container>>()?;
            Value::List(list)
        }
        Json::Object(fields) => {
            check_depth(depth + 1, limit)?;
            let list = fields
                .iter()
                .map(|(key, item)| convert(item, depth + 1, limit).map(|v| Element::named(key, v)))
                .collect::<ListResult<Container>>()?;
            Value::List(list)
        }
    };
    Ok(value)
}

fn check_depth(depth: usize, limit: usize) -> ListResult<()> {
    if depth > limit {
        debug!(limit, "JSON document nests too deeply");
        return Err(ListError::DepthExceeded { limit });
    }
    Ok(())
}

fn number(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        // u64 beyond i64::MAX and all fractional numbers
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Converts a [`Value`] back to JSON.
///
/// A list whose elements all carry distinct names becomes an object; any
/// other list becomes an array and loses its names. Non-finite floats
/// become `null`.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(n) => Json::from(*n),
        Value::Float(x) => Number::from_f64(*x).map_or(Json::Null, Json::Number),
        Value::Str(s) => Json::String(s.clone()),
        Value::List(list) if has_unique_names(list) => Json::Object(
            list.iter()
                .filter_map(|el| el.name().map(|name| (name.to_owned(), to_json(&el.value))))
                .collect::<Map<String, Json>>(),
        ),
        Value::List(list) => Json::Array(list.values().map(to_json).collect()),
    }
}

fn has_unique_names(list: &Container) -> bool {
    let mut seen = HashSet::new();
    list.is_fully_named() && list.names().into_iter().flatten().all(|name| seen.insert(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use serde_json::json;

    #[test]
    fn test_object_key_order_is_preserved() {
        let v = from_json_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let list = v.as_list().unwrap();
        assert_eq!(list.names(), vec![Some("zeta"), Some("alpha"), Some("mid")]);
    }

    #[test]
    fn test_numbers() {
        let v = from_json(&json!([1, -2, 2.5, 18446744073709551615u64])).unwrap();
        assert_eq!(
            v,
            Value::from(list![1, -2, 2.5, 18446744073709551615u64 as f64])
        );
    }

    #[test]
    fn test_arrays_are_not_simplified() {
        let v = from_json(&json!([1, "a", [2, 3]])).unwrap();
        assert_eq!(v, Value::from(list![1, "a", list![2, 3]]));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(from_json_str("[1,"), Err(ListError::Json(_))));
    }

    #[test]
    fn test_depth_limit() {
        let opts = Options::default().with_max_depth(2);
        assert!(from_json_with(&json!([[1]]), &opts).is_ok());
        assert!(matches!(
            from_json_with(&json!([[[1]]]), &opts),
            Err(ListError::DepthExceeded { limit: 2 })
        ));
    }

    #[test]
    fn test_default_depth_limit_applies_before_parser_limit() {
        let levels = 110;
        let text = format!("{}{}", "[".repeat(levels), "]".repeat(levels));
        assert!(matches!(
            from_json_str(&text),
            Err(ListError::DepthExceeded { limit: 100 })
        ));

        let shallow = format!("{}{}", "[".repeat(100), "]".repeat(100));
        assert_eq!(from_json_str(&shallow).unwrap().depth(), 100);
    }

    #[test]
    fn test_to_json_round_trip() {
        let doc = json!({"id": 1, "labels": ["bug", "docs"], "user": {"login": "bob"}, "x": null});
        let v = from_json(&doc).unwrap();
        assert_eq!(to_json(&v), doc);
    }

    #[test]
    fn test_to_json_duplicate_names_become_array() {
        let v = Value::from(Container::from_pairs([("a", 1), ("a", 2)]));
        assert_eq!(to_json(&v), json!([1, 2]));
        assert_eq!(to_json(&Value::Float(f64::INFINITY)), Json::Null);
    }
}
