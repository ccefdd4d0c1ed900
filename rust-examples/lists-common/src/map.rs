//! # Mapping and Extraction
//!
//! Applying a function, or a [`Path`], to every element of a list.
//!
//! Path extraction is the chapter's workhorse for lists of records: given a
//! list of issues, pull out every issue's `user.login`.
//!
//! ```
//! use lists_common::{list, path, Value};
//! use lists_common::map::{map_chr, map_path};
//!
//! let issues = list![
//!     list!["user" => list!["login" => "bob", "id" => 7]],
//! ];
//!
//! let login_path = path!["user", "login"];
//! let logins: Vec<&Value> = map_path(&issues, &login_path)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(logins, vec![&Value::from("bob")]);
//!
//! assert_eq!(map_chr(&issues, &path!["user", "login"]).unwrap(), vec!["bob"]);
//! ```
//!
//! The untyped [`map_path`] and [`map_path_or`] are lazy: nothing is looked
//! up until the iterator is driven. The typed variants collect eagerly and
//! stop at the first failure.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::container::{Container, Element};
use crate::error::{ListError, ListResult};
use crate::path::{Path, walk};
use crate::value::{FromLeaf, Value};

/// Applies `f` to every value, keeping names and order.
pub fn map_values<F>(list: &Container, mut f: F) -> Container
where
    F: FnMut(&Value) -> Value,
{
    list.iter()
        .map(|el| Element {
            name: el.name.clone(),
            value: f(&el.value),
        })
        .collect()
}

/// Lazily applies `path` to every top-level element.
pub fn map_path<'a>(
    list: &'a Container,
    path: &'a Path,
) -> impl Iterator<Item = ListResult<&'a Value>> + 'a {
    list.values()
        .enumerate()
        .map(move |(position, value)| walk(value, path, position))
}

/// Lazily applies `path` to every top-level element, substituting `default`
/// wherever a component is missing. Never fails.
pub fn map_path_or<'a>(
    list: &'a Container,
    path: &'a Path,
    default: &'a Value,
) -> impl Iterator<Item = &'a Value> + 'a {
    list.values()
        .enumerate()
        .map(move |(position, value)| walk(value, path, position).unwrap_or(default))
}

/// Extracts `path` from every element and reads the leaf as `T`.
#[instrument(level = "trace", skip_all, fields(len = list.len(), path = %path))]
pub fn map_as<T: FromLeaf>(list: &Container, path: &Path) -> ListResult<Vec<T>> {
    list.values()
        .enumerate()
        .map(|(position, value)| {
            let leaf = walk(value, path, position)?;
            T::coerce(leaf, position)
        })
        .collect::<ListResult<Vec<T>>>()
        .inspect_err(|err| debug!(%err, "typed map failed"))
}

/// Like [`map_as`], using `default` where the path is missing. A leaf that
/// is present but of the wrong type still fails.
#[instrument(level = "trace", skip_all, fields(len = list.len(), path = %path))]
pub fn map_as_or<T: FromLeaf + Clone>(
    list: &Container,
    path: &Path,
    default: T,
) -> ListResult<Vec<T>> {
    list.values()
        .enumerate()
        .map(|(position, value)| match walk(value, path, position) {
            Ok(leaf) => T::coerce(leaf, position),
            Err(ListError::Lookup { .. }) => Ok(default.clone()),
            Err(err) => Err(err),
        })
        .collect()
}

/// Parallel [`map_as`]. Output order matches input order; if several
/// elements fail, which error is returned is unspecified.
#[instrument(level = "trace", skip_all, fields(len = list.len(), path = %path))]
pub fn par_map_as<T>(list: &Container, path: &Path) -> ListResult<Vec<T>>
where
    T: FromLeaf + Send,
{
    let values: Vec<&Value> = list.values().collect();
    values
        .par_iter()
        .enumerate()
        .map(|(position, value)| {
            let leaf = walk(value, path, position)?;
            T::coerce(leaf, position)
        })
        .collect()
}

pub fn map_int(list: &Container, path: &Path) -> ListResult<Vec<i64>> {
    map_as(list, path)
}

pub fn map_dbl(list: &Container, path: &Path) -> ListResult<Vec<f64>> {
    map_as(list, path)
}

pub fn map_chr(list: &Container, path: &Path) -> ListResult<Vec<String>> {
    map_as(list, path)
}

pub fn map_lgl(list: &Container, path: &Path) -> ListResult<Vec<bool>> {
    map_as(list, path)
}

pub fn map_int_or(list: &Container, path: &Path, default: i64) -> ListResult<Vec<i64>> {
    map_as_or(list, path, default)
}

pub fn map_dbl_or(list: &Container, path: &Path, default: f64) -> ListResult<Vec<f64>> {
    map_as_or(list, path, default)
}

pub fn map_chr_or(list: &Container, path: &Path, default: &str) -> ListResult<Vec<String>> {
    map_as_or(list, path, default.to_owned())
}

pub fn map_lgl_or(list: &Container, path: &Path, default: bool) -> ListResult<Vec<bool>> {
    map_as_or(list, path, default)
}
