//! Section 9.2: Extracting Deeply Nested Elements
//!
//! Given a list of records, the usual first question is "give me field X of
//! every record". A path names X: a string steps into a named element, a
//! number into a positional one. The typed variants (`map_int`, `map_chr`,
//! ...) also promise the shape of the answer and fail loudly when a record
//! does not fit.

use lists_common::map::{map_chr, map_chr_or, map_int, map_path, par_map_as};
use lists_common::{Container, ListResult, Path, Value, path};

/// `map_int(issues, "id")`
pub fn issue_ids(issues: &Container) -> ListResult<Vec<i64>> {
    map_int(issues, &path!["id"])
}

/// Two levels down: `map_chr(issues, c("user", "login"))`
pub fn user_logins(issues: &Container) -> ListResult<Vec<String>> {
    map_chr(issues, &path!["user", "login"])
}

/// Unassigned issues hold `null` where the assignee record would be, so the
/// path stops early. The default stands in for those.
pub fn assignee_logins(issues: &Container) -> ListResult<Vec<String>> {
    map_chr_or(issues, &path!["assignee", "login"], "unassigned")
}

/// Mixing names and positions: the first label of every issue, if any.
pub fn first_labels(issues: &Container) -> ListResult<Vec<String>> {
    map_chr_or(issues, &path!["labels", 0, "name"], "none")
}

/// Comment counts extracted on the rayon pool.
pub fn comment_counts(issues: &Container) -> ListResult<Vec<i64>> {
    par_map_as(issues, &path!["comments"])
}

/// The untyped extractor keeps whatever it finds and stops at the first
/// record that is missing the path.
pub fn extract_until_missing<'a>(issues: &'a Container, field: &'a Path) -> Vec<&'a Value> {
    map_path(issues, field).map_while(Result::ok).collect()
}
