//! Section 9.1: Creating and Subsetting Lists
//!
//! This section demonstrates:
//! - Building heterogeneous, nested lists
//! - Looking at a list's structure before working with it
//! - The two kinds of subsetting: `[` keeps the list, `[[` pulls the element out

use std::f64::consts::PI;

use lists_common::display::str_structure;
use lists_common::{Container, ListResult, PathSegment, Value, list};

// ============================================================================
// Section 9.1.1: Creating Lists
// ============================================================================

/// The list the chapter keeps coming back to: a numeric vector, a string,
/// a number and a nested list, each under its own name.
pub fn chapter_list() -> Container {
    list![
        "a" => list![1, 2, 3],
        "b" => "a string",
        "c" => PI,
        "d" => list![-1, -5],
    ]
}

/// Lists can hold lists, which is what makes them hierarchical.
pub fn nested_example() -> Container {
    list![list![1, 2], list![3, 4]]
}

/// Unlike a vector, a list happily mixes types.
pub fn mixed_example() -> Container {
    list!["a", 1, 1.5, true]
}

/// Describes a list one element per line.
pub fn describe(list: &Container) -> String {
    str_structure(&Value::List(list.clone()))
}

// ============================================================================
// Section 9.1.2: Subsetting
// ============================================================================

/// `[`: select elements, get a (smaller) list back.
pub fn single_bracket(list: &Container, keys: &[&str]) -> ListResult<Container> {
    let segments: Vec<PathSegment> = keys.iter().map(|k| PathSegment::from(*k)).collect();
    list.subset(&segments)
}

/// `[[`: select exactly one element and drop the list around it.
pub fn double_bracket<'a>(list: &'a Container, key: &str) -> Option<&'a Value> {
    list.get(&PathSegment::from(key))
}

/// `[[` by position (zero-based).
pub fn nth(list: &Container, index: usize) -> Option<&Value> {
    list.get(&PathSegment::Index(index))
}

/// Chaining `[[` walks down the hierarchy: `a[["d"]][[1]]`.
pub fn chained(list: &Container) -> ListResult<&Value> {
    list.pluck(&lists_common::path!["d", 1])
}
