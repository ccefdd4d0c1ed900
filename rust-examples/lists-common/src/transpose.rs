//! # Transposing
//!
//! Turns a list of N lists of length M inside out, giving M lists of length
//! N, so that `x[[i]][[j]] == transpose(x)[[j]][[i]]`. This is how a list of
//! records becomes a record of columns and back again.
//!
//! ```
//! use lists_common::list;
//! use lists_common::transpose::transpose;
//!
//! let x = list![
//!     "x" => list!["a" => 1, "b" => 3],
//!     "y" => list!["a" => 2, "b" => 4],
//! ];
//! let t = transpose(&x).unwrap();
//! assert_eq!(t, list![
//!     "a" => list!["x" => 1, "y" => 2],
//!     "b" => list!["x" => 3, "y" => 4],
//! ]);
//! assert_eq!(transpose(&t).unwrap(), x);
//! ```
//!
//! ## Keys versus positions
//!
//! When the first inner list is fully named with distinct names, every inner
//! list is matched *by name* and must carry exactly that set of names, in any
//! order. Otherwise inner lists are matched *by position*: they must all have
//! the same length and agree on the name (or absence of one) at every
//! position, and those names label the result. Anything else is a
//! [`ListError::ShapeMismatch`], so no name is ever dropped and
//! `transpose(transpose(x)) == x` whenever the first call succeeds on a
//! non-empty grid.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::container::{Container, Element};
use crate::error::{ListError, ListResult};
use crate::value::Value;

type Row<'a> = (Option<&'a str>, &'a Container);

#[instrument(level = "trace", skip_all, fields(len = list.len()))]
pub fn transpose(list: &Container) -> ListResult<Container> {
    let rows = rows_of(list)?;
    let Some((_, first)) = rows.first() else {
        return Ok(Container::new());
    };
    match keys_of(first) {
        Some(keys) => transpose_keyed(&rows, &keys),
        None => transpose_positional(&rows, first),
    }
}

fn mismatch(message: String) -> ListError {
    debug!(%message, "transpose rejected input");
    ListError::shape(message)
}

fn rows_of(list: &Container) -> ListResult<Vec<Row<'_>>> {
    list.iter()
        .enumerate()
        .map(|(i, el)| match &el.value {
            Value::List(inner) => Ok((el.name(), inner)),
            leaf => Err(mismatch(format!(
                "element {i} is a {} leaf, not a list",
                leaf.kind()
            ))),
        })
        .collect()
}

/// The key order to transpose by, or `None` for positional matching.
/// Repeated names cannot act as keys, so they also select positions.
fn keys_of(first: &Container) -> Option<Vec<&str>> {
    if !first.is_fully_named() {
        return None;
    }
    let mut seen = HashSet::new();
    let keys: Vec<&str> = first.names().into_iter().flatten().collect();
    keys.iter().all(|name| seen.insert(*name)).then_some(keys)
}

fn transpose_keyed(rows: &[Row<'_>], keys: &[&str]) -> ListResult<Container> {
    // positions[i][j]: where key j lives in row i
    let mut positions = Vec::with_capacity(rows.len());
    for (i, (_, row)) in rows.iter().enumerate() {
        if row.len() != keys.len() {
            return Err(mismatch(format!(
                "element {i} has {} elements, expected {}",
                row.len(),
                keys.len()
            )));
        }
        let found = keys
            .iter()
            .map(|key| {
                row.position_of(key)
                    .ok_or_else(|| mismatch(format!("element {i} has no element named {key:?}")))
            })
            .collect::<ListResult<Vec<usize>>>()?;
        positions.push(found);
    }

    Ok(keys
        .iter()
        .enumerate()
        .map(|(j, key)| {
            let column = rows
                .iter()
                .zip(&positions)
                .map(|((name, row), at)| cell(*name, row, at[j]))
                .collect::<Container>();
            Element::named(*key, column)
        })
        .collect())
}

fn transpose_positional(rows: &[Row<'_>], first: &Container) -> ListResult<Container> {
    let width = first.len();
    if let Some((i, (_, row))) = rows.iter().enumerate().find(|(_, (_, row))| row.len() != width) {
        return Err(mismatch(format!(
            "element {i} has {} elements, expected {width}",
            row.len()
        )));
    }
    let names = first.names();
    for (i, (_, row)) in rows.iter().enumerate().skip(1) {
        if let Some(j) = (0..width).find(|&j| row.element(j).and_then(|el| el.name()) != names[j]) {
            return Err(mismatch(format!(
                "element {i} names position {j} {}, element 0 names it {}",
                label(row.element(j).and_then(|el| el.name())),
                label(names[j])
            )));
        }
    }
    Ok(names
        .iter()
        .enumerate()
        .map(|(j, name)| {
            let column = rows
                .iter()
                .map(|(outer, row)| cell(*outer, row, j))
                .collect::<Container>();
            Element {
                name: name.map(str::to_owned),
                value: Value::List(column),
            }
        })
        .collect())
}

fn label(name: Option<&str>) -> String {
    name.map_or_else(|| "nothing".to_owned(), |n| format!("{n:?}"))
}

fn cell(outer_name: Option<&str>, row: &Container, index: usize) -> Element {
    Element {
        name: outer_name.map(str::to_owned),
        value: row
            .element(index)
            .map(|el| el.value.clone())
            .unwrap_or_default(),
    }
}
