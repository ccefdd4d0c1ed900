//! Section 9.3: Predicate Functions
//!
//! A predicate answers yes or no about one element. Combined with a list it
//! can select (`keep`, `discard`), cut (`head_while`, `tail_while`), search
//! (`detect`, `detect_index`) or summarize (`some`, `every`).

use lists_common::predicate::{
    detect, detect_index, discard, every, head_while, keep, some, tail_while,
};
use lists_common::{Container, Value, path};

fn field<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    record.pluck(&path![name]).ok()
}

fn is_open(record: &Value) -> bool {
    field(record, "state").and_then(Value::as_str) == Some("open")
}

fn is_locked(record: &Value) -> bool {
    field(record, "locked").and_then(Value::as_bool) == Some(true)
}

fn comments(record: &Value) -> i64 {
    field(record, "comments").and_then(Value::as_int).unwrap_or(0)
}

pub fn open_issues(issues: &Container) -> Container {
    keep(issues, is_open)
}

pub fn unlocked_issues(issues: &Container) -> Container {
    discard(issues, is_locked)
}

/// Is anybody still talking?
pub fn any_discussed(issues: &Container) -> bool {
    some(issues, |r| comments(r) > 0)
}

pub fn all_have_authors(issues: &Container) -> bool {
    every(issues, |r| r.pluck(&path!["user", "login"]).is_ok())
}

/// Position of the first closed issue.
pub fn first_closed(issues: &Container) -> Option<usize> {
    detect_index(issues, |r| !is_open(r))
}

/// The first issue with a busy thread (more than `threshold` comments).
pub fn first_busy(issues: &Container, threshold: i64) -> Option<&Value> {
    detect(issues, |r| comments(r) > threshold)
}

fn is_positive(value: &Value) -> bool {
    value.as_float().is_some_and(|x| x > 0.0)
}

/// Leading run of positive numbers.
pub fn leading_positives(numbers: &Container) -> Container {
    head_while(numbers, is_positive)
}

/// Trailing run of positive numbers.
pub fn trailing_positives(numbers: &Container) -> Container {
    tail_while(numbers, is_positive)
}
