//! Section 9.5: Transposing
//!
//! A list of records and a record of columns hold the same data. `transpose`
//! turns one into the other: records matched by name when the first record
//! is fully named, by position otherwise.

use lists_common::transpose::transpose;
use lists_common::{Container, ListError, ListResult, PathSegment, Value};

const SUMMARY_FIELDS: [&str; 3] = ["number", "state", "comments"];

/// Each issue cut down to a few scalar fields.
pub fn issue_summaries(issues: &Container) -> ListResult<Container> {
    let fields: Vec<PathSegment> = SUMMARY_FIELDS.iter().map(|f| PathSegment::from(*f)).collect();
    issues
        .values()
        .enumerate()
        .map(|(i, record)| {
            let record = record.as_list().ok_or_else(|| ListError::ShapeMismatch {
                message: format!("element {i} is a {} leaf, not a record", record.kind()),
            })?;
            record.subset(&fields).map(Value::List)
        })
        .collect()
}

/// Records to columns: `list(number = list(...), state = list(...), ...)`.
pub fn issue_columns(issues: &Container) -> ListResult<Container> {
    transpose(&issue_summaries(issues)?)
}

/// Splits a list of pairs into a pair of lists.
pub fn unzip(pairs: &Container) -> ListResult<(Container, Container)> {
    if pairs.is_empty() {
        return Ok((Container::new(), Container::new()));
    }
    let columns = transpose(pairs)?;
    let halves: Vec<&Container> = columns.values().filter_map(Value::as_list).collect();
    match halves.as_slice() {
        [left, right] => Ok(((*left).clone(), (*right).clone())),
        _ => Err(ListError::ShapeMismatch {
            message: format!("expected pairs, found {} columns", columns.len()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section_9_6::load_issues;
    use lists_common::map::{map_chr, map_int};
    use lists_common::{list, path};

    #[test]
    fn test_issue_columns() {
        let issues = load_issues().unwrap();
        let columns = issue_columns(&issues).unwrap();
        assert_eq!(
            columns.names(),
            vec![Some("number"), Some("state"), Some("comments")]
        );

        let numbers = columns.pluck(&path!["number"]).unwrap().as_list().unwrap();
        assert_eq!(map_int(numbers, &path![]).unwrap(), vec![118, 117, 116, 115]);
        let states = columns.pluck(&path!["state"]).unwrap().as_list().unwrap();
        assert_eq!(
            map_chr(states, &path![]).unwrap(),
            vec!["open", "closed", "open", "closed"]
        );
    }

    #[test]
    fn test_columns_transpose_back() {
        let issues = load_issues().unwrap();
        let summaries = issue_summaries(&issues).unwrap();
        let back = transpose(&issue_columns(&issues).unwrap()).unwrap();
        assert_eq!(back, summaries);
    }

    #[test]
    fn test_unzip() {
        let pairs = list![list![1, "a"], list![2, "b"], list![3, "c"]];
        let (left, right) = unzip(&pairs).unwrap();
        assert_eq!(left, list![1, 2, 3]);
        assert_eq!(right, list!["a", "b", "c"]);

        assert_eq!(unzip(&list![]).unwrap(), (Container::new(), Container::new()));
        assert!(unzip(&list![list![1, 2], list![3]]).is_err());
        assert!(unzip(&list![list![1, 2, 3]]).is_err());
    }
}
