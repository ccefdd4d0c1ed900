//! # Predicate Functions
//!
//! Filtering, searching and testing lists with a predicate. A predicate here
//! is any `FnMut(&Value) -> bool`; it sees each element's value, never its
//! name.
//!
//! Every function calls the predicate at most once per element it visits,
//! and the searching ones ([`some`], [`every`], [`detect`], [`detect_index`],
//! [`head_while`], [`tail_while`]) stop as soon as the answer is known.
//!
//! ## Example
//!
//! ```
//! use lists_common::{list, Value};
//! use lists_common::predicate::{detect, detect_index, keep};
//!
//! let is_even = |v: &Value| v.as_int().is_some_and(|n| n % 2 == 0);
//! let x = list![1, 3, 5, 4, 7];
//!
//! assert_eq!(detect_index(&x, is_even), Some(3));
//! assert_eq!(detect(&x, is_even), Some(&Value::Int(4)));
//! assert_eq!(keep(&x, is_even), list![4]);
//! ```

use tracing::instrument;

use crate::container::Container;
use crate::value::Value;

/// Elements for which `predicate` holds, in order, names preserved.
///
/// # Example
/// ```
/// use lists_common::{list, Value};
/// use lists_common::predicate::keep;
///
/// let x = list!["a" => 1, "b" => "two", "c" => 3];
/// assert_eq!(keep(&x, |v: &Value| v.as_int().is_some()), list!["a" => 1, "c" => 3]);
/// ```
#[instrument(level = "trace", skip_all, fields(len = list.len()))]
pub fn keep<P>(list: &Container, mut predicate: P) -> Container
where
    P: FnMut(&Value) -> bool,
{
    list.iter().filter(|el| predicate(&el.value)).cloned().collect()
}

/// Elements for which `predicate` does not hold; the complement of [`keep`].
#[instrument(level = "trace", skip_all, fields(len = list.len()))]
pub fn discard<P>(list: &Container, mut predicate: P) -> Container
where
    P: FnMut(&Value) -> bool,
{
    list.iter().filter(|el| !predicate(&el.value)).cloned().collect()
}

/// Drops `NULL` elements.
pub fn compact(list: &Container) -> Container {
    discard(list, Value::is_null)
}

/// Longest prefix on which `predicate` holds.
///
/// # Example
/// ```
/// use lists_common::{list, Value};
/// use lists_common::predicate::head_while;
///
/// let x = list![2, 4, 5, 6];
/// let even = |v: &Value| v.as_int().is_some_and(|n| n % 2 == 0);
/// assert_eq!(head_while(&x, even), list![2, 4]);
/// ```
pub fn head_while<P>(list: &Container, mut predicate: P) -> Container
where
    P: FnMut(&Value) -> bool,
{
    list.iter().take_while(|el| predicate(&el.value)).cloned().collect()
}

/// Longest suffix on which `predicate` holds, scanning from the end.
pub fn tail_while<P>(list: &Container, mut predicate: P) -> Container
where
    P: FnMut(&Value) -> bool,
{
    let run = list.iter().rev().take_while(|el| predicate(&el.value)).count();
    list.iter().skip(list.len() - run).cloned().collect()
}

/// True if `predicate` holds for at least one element. False for an empty list.
pub fn some<P>(list: &Container, predicate: P) -> bool
where
    P: FnMut(&Value) -> bool,
{
    list.values().any(predicate)
}

/// True if `predicate` holds for every element. True for an empty list.
pub fn every<P>(list: &Container, predicate: P) -> bool
where
    P: FnMut(&Value) -> bool,
{
    list.values().all(predicate)
}

/// First value satisfying `predicate`.
pub fn detect<P>(list: &Container, mut predicate: P) -> Option<&Value>
where
    P: FnMut(&Value) -> bool,
{
    list.values().find(|v| predicate(*v))
}

/// Zero-based position of the first value satisfying `predicate`.
pub fn detect_index<P>(list: &Container, predicate: P) -> Option<usize>
where
    P: FnMut(&Value) -> bool,
{
    list.values().position(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use std::cell::Cell;

    fn is_even(v: &Value) -> bool {
        v.as_int().is_some_and(|n| n % 2 == 0)
    }

    #[test]
    fn test_keep_and_discard_partition() {
        let x = list!["a" => 1, "b" => 2, "c" => 3, "d" => 4];
        assert_eq!(keep(&x, is_even), list!["b" => 2, "d" => 4]);
        assert_eq!(discard(&x, is_even), list!["a" => 1, "c" => 3]);
    }

    #[test]
    fn test_compact_drops_nulls() {
        let x = list![1, None::<i64>, "a", Value::Null];
        assert_eq!(compact(&x), list![1, "a"]);
    }

    #[test]
    fn test_head_and_tail_while() {
        let x = list![2, 4, 5, 6, 8];
        assert_eq!(head_while(&x, is_even), list![2, 4]);
        assert_eq!(tail_while(&x, is_even), list![6, 8]);

        let all_even = list![2, 4];
        assert_eq!(head_while(&all_even, is_even), all_even);
        assert_eq!(tail_while(&all_even, is_even), all_even);

        let none_even = list![1, 3];
        assert!(head_while(&none_even, is_even).is_empty());
        assert!(tail_while(&none_even, is_even).is_empty());
    }

    #[test]
    fn test_empty_list_quantifiers() {
        let empty = Container::new();
        assert!(every(&empty, |_| false));
        assert!(!some(&empty, |_| true));
        assert_eq!(detect(&empty, |_| true), None);
        assert_eq!(detect_index(&empty, |_| true), None);
    }

    #[test]
    fn test_detect_index_example() {
        let x = list![1, 3, 5, 4, 7];
        assert_eq!(detect_index(&x, is_even), Some(3));
        assert_eq!(detect(&x, is_even), Some(&Value::Int(4)));
        assert_eq!(detect_index(&list![1, 3], is_even), None);
    }

    #[test]
    fn test_short_circuit_counts() {
        let x = list![1, 3, 4, 5, 7];
        let calls = Cell::new(0);
        let counted = |v: &Value| {
            calls.set(calls.get() + 1);
            is_even(v)
        };

        assert!(some(&x, counted));
        assert_eq!(calls.replace(0), 3);

        assert!(!every(&x, |v| {
            calls.set(calls.get() + 1);
            !is_even(v)
        }));
        assert_eq!(calls.replace(0), 3);

        assert_eq!(detect_index(&x, counted), Some(2));
        assert_eq!(calls.replace(0), 3);

        // tail_while visits 7, 5, 4 and stops at the first failure
        let odd_tail = tail_while(&x, |v| {
            calls.set(calls.get() + 1);
            !is_even(v)
        });
        assert_eq!(odd_tail, list![5, 7]);
        assert_eq!(calls.replace(0), 3);

        keep(&x, counted);
        assert_eq!(calls.get(), x.len());
    }
}
