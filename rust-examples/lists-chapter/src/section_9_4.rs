//! Section 9.4: Flattening
//!
//! `flatten` removes exactly one level of nesting; `flatten_all` removes all
//! of them. The typed forms (`flatten_int`, `flatten_chr`, ...) add a check
//! that every element is now a leaf of the promised type, which is the
//! difference between a silently wrong answer and an error when the input
//! drifts one level deeper than expected.

use lists_common::flatten::{flatten, flatten_all_with, flatten_chr, flatten_int, flatten_with};
use lists_common::map::{map_chr, map_path, map_values};
use lists_common::{Container, ListResult, NamePolicy, Options, Value, path};

/// Every label record of every issue, in one list.
pub fn all_labels(issues: &Container) -> Container {
    let per_issue = map_values(issues, |record| {
        record
            .pluck_or(&path!["labels"], &Value::List(Container::new()))
            .clone()
    });
    flatten(&per_issue)
}

/// Label names across all issues, duplicates included.
pub fn label_names(issues: &Container) -> ListResult<Vec<String>> {
    map_chr(&all_labels(issues), &path!["name"])
}

/// Same answer, two steps: extract each issue's names, then flatten.
pub fn label_names_typed(issues: &Container) -> ListResult<Vec<String>> {
    let names = map_values(issues, |record| {
        let labels = record
            .pluck(&path!["labels"])
            .ok()
            .and_then(Value::as_list)
            .cloned()
            .unwrap_or_default();
        let names: Container = map_path(&labels, &path!["name"])
            .filter_map(Result::ok)
            .cloned()
            .collect();
        Value::List(names)
    });
    flatten_chr(&names)
}

/// Sums a list of integer lists. The typed flatten refuses input that is
/// nested one level deeper than expected instead of skipping it.
pub fn sum_nested(groups: &Container) -> ListResult<i64> {
    Ok(flatten_int(groups)?.into_iter().sum())
}

/// Flattens every level, joining names with `.` on the way down.
pub fn dotted_leaves(list: &Container) -> ListResult<Container> {
    let options = Options::default().with_name_policy(NamePolicy::Concat {
        separator: ".".to_owned(),
    });
    flatten_all_with(list, &options)
}

/// One level, keeping the names of the spliced elements.
pub fn flatten_keep_names(list: &Container) -> Container {
    flatten_with(list, &Options::default().with_name_policy(NamePolicy::KeepInner))
}
