//! # Flattening
//!
//! [`flatten`] removes exactly one level of nesting, [`flatten_all`] removes
//! all of it, and the typed variants ([`flatten_int`] and friends) remove one
//! level and then insist every remaining element is a leaf of the requested
//! type.
//!
//! The typed variants are the ones to reach for. An untyped flatten happily
//! returns whatever it finds, so when the shape of the input drifts (one
//! record grows an extra level, a number turns into a string) the result is
//! silently wrong instead of loudly failing.
//!
//! ```
//! use lists_common::list;
//! use lists_common::flatten::{flatten, flatten_int};
//!
//! let x = list![list![1, 2], list![3, 4]];
//! assert_eq!(flatten(&x), list![1, 2, 3, 4]);
//! assert_eq!(flatten_int(&x).unwrap(), vec![1, 2, 3, 4]);
//!
//! let drifted = list![list![1, 2], list![list![3], 4]];
//! assert!(flatten_int(&drifted).is_err());
//! ```

use tracing::{debug, instrument};

use crate::config::Options;
use crate::container::{Container, Element};
use crate::error::{ListError, ListResult};
use crate::value::{FromLeaf, Value};

/// Removes one level of nesting using the default options (names dropped).
#[instrument(level = "trace", skip_all, fields(len = list.len()))]
pub fn flatten(list: &Container) -> Container {
    flatten_with(list, &Options::default())
}

/// Removes one level of nesting. Elements holding a list are replaced by
/// that list's elements, in order; leaf elements are kept where they are.
pub fn flatten_with(list: &Container, options: &Options) -> Container {
    let policy = &options.name_policy;
    let mut spliced = Vec::with_capacity(list.len());
    for el in list {
        match &el.value {
            Value::List(inner) => spliced.extend(inner.iter().map(|child| Element {
                name: policy.combine(el.name(), child.name()),
                value: child.value.clone(),
            })),
            leaf => spliced.push(Element {
                name: policy.combine(None, el.name()),
                value: leaf.clone(),
            }),
        }
    }
    spliced.into_iter().collect()
}

/// Removes every level of nesting using the default options.
#[instrument(level = "trace", skip_all, fields(len = list.len()))]
pub fn flatten_all(list: &Container) -> ListResult<Container> {
    flatten_all_with(list, &Options::default())
}

/// Removes every level of nesting, leaves in depth-first, left-to-right
/// order. Fails with [`ListError::DepthExceeded`] past `options.max_depth`.
pub fn flatten_all_with(list: &Container, options: &Options) -> ListResult<Container> {
    let mut leaves = Vec::new();
    collect_leaves(list, None, 1, options, &mut leaves)?;
    Ok(leaves.into_iter().collect())
}

fn collect_leaves(
    list: &Container,
    prefix: Option<&str>,
    level: usize,
    options: &Options,
    leaves: &mut Vec<Element>,
) -> ListResult<()> {
    if level > options.max_depth {
        debug!(limit = options.max_depth, "flatten_all: nesting too deep");
        return Err(ListError::DepthExceeded {
            limit: options.max_depth,
        });
    }
    for el in list {
        let name = options.name_policy.combine(prefix, el.name());
        match &el.value {
            Value::List(inner) => {
                collect_leaves(inner, name.as_deref(), level + 1, options, leaves)?;
            }
            leaf => leaves.push(Element {
                name,
                value: leaf.clone(),
            }),
        }
    }
    Ok(())
}

/// Flattens one level and reads every resulting element as `T`.
///
/// Anything that is not a leaf of type `T` (including a list that was
/// nested one level too deep) fails with [`ListError::TypeMismatch`]; the
/// reported position is the index in the flattened sequence.
#[instrument(level = "trace", skip_all, fields(len = list.len()))]
pub fn flatten_as<T: FromLeaf>(list: &Container) -> ListResult<Vec<T>> {
    let result: ListResult<Vec<T>> = flatten(list)
        .values()
        .enumerate()
        .map(|(position, value)| T::coerce(value, position))
        .collect();
    if let Err(err) = &result {
        debug!(%err, "typed flatten rejected input");
    }
    result
}

pub fn flatten_int(list: &Container) -> ListResult<Vec<i64>> {
    flatten_as(list)
}

pub fn flatten_dbl(list: &Container) -> ListResult<Vec<f64>> {
    flatten_as(list)
}

pub fn flatten_chr(list: &Container) -> ListResult<Vec<String>> {
    flatten_as(list)
}

pub fn flatten_lgl(list: &Container) -> ListResult<Vec<bool>> {
    flatten_as(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamePolicy;
    use crate::list;
    use crate::value::ValueKind;

    #[test]
    fn test_flatten_one_level() {
        let x = list![list![1, 2], list![3, 4]];
        assert_eq!(flatten(&x), list![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten(&Container::new()), Container::new());
        assert_eq!(flatten_all(&Container::new()).unwrap(), Container::new());
    }

    #[test]
    fn test_flatten_only_removes_one_level() {
        let x = list![list![1, list![2, 3]], 4];
        assert_eq!(flatten(&x), list![1, list![2, 3], 4]);
        assert_eq!(flatten_all(&x).unwrap(), list![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_leaves_is_value_equal_copy() {
        let x = list![1, "a", true];
        assert_eq!(flatten(&x), x);
    }

    #[test]
    fn test_flatten_drops_names_by_default() {
        let x = list!["a" => list!["b" => 1], "c" => 2];
        let flat = flatten(&x);
        assert_eq!(flat.names(), vec![None, None]);
    }

    #[test]
    fn test_flatten_concat_names() {
        let opts = Options::default().with_name_policy(NamePolicy::Concat {
            separator: "_".into(),
        });
        let x = list!["a" => list!["b" => 1, "c" => 2], "d" => 3];
        let flat = flatten_with(&x, &opts);
        assert_eq!(flat.names(), vec![Some("a_b"), Some("a_c"), Some("d")]);

        let deep = list!["a" => list!["b" => list!["c" => 1]]];
        let all = flatten_all_with(&deep, &opts).unwrap();
        assert_eq!(all.names(), vec![Some("a_b_c")]);
    }

    #[test]
    fn test_flatten_keep_inner_names() {
        let opts = Options::default().with_name_policy(NamePolicy::KeepInner);
        let x = list!["a" => list!["b" => 1, 2], "d" => 3];
        let flat = flatten_with(&x, &opts);
        assert_eq!(flat.names(), vec![Some("b"), None, Some("d")]);
    }

    #[test]
    fn test_flatten_all_depth_limit() {
        let opts = Options::default().with_max_depth(2);
        let x = list![list![list![1]]];
        assert!(matches!(
            flatten_all_with(&x, &opts),
            Err(ListError::DepthExceeded { limit: 2 })
        ));
        assert!(flatten_all_with(&list![list![1]], &opts).is_ok());
    }

    #[test]
    fn test_typed_flatten() {
        let x = list![list![1.5, 2], list![3]];
        assert_eq!(flatten_dbl(&x).unwrap(), vec![1.5, 2.0, 3.0]);
        assert_eq!(
            flatten_chr(&list![list!["a"], list!["b", "c"]]).unwrap(),
            vec!["a", "b", "c"]
        );
        assert_eq!(flatten_lgl(&list![list![true], list![false]]).unwrap(), vec![true, false]);
    }

    #[test]
    fn test_typed_flatten_rejects_wrong_leaf() {
        let x = list![list![1, 2], list!["3"]];
        match flatten_int(&x).unwrap_err() {
            ListError::TypeMismatch {
                position,
                expected,
                found,
            } => {
                assert_eq!(position, 2);
                assert_eq!(expected, ValueKind::Int);
                assert_eq!(found, ValueKind::Str);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_typed_flatten_rejects_leftover_list() {
        let x = list![list![1, list![2]]];
        match flatten_int(&x).unwrap_err() {
            ListError::TypeMismatch { found, .. } => assert_eq!(found, ValueKind::List),
            other => panic!("unexpected error: {other}"),
        }
    }
}
