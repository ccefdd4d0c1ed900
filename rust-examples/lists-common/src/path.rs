//! # Paths
//!
//! A [`Path`] is the sequence of keys and indices you would chain with
//! `[[...]]` to reach into nested lists. Indices are zero-based.
//!
//! ```
//! use lists_common::{list, path, Value};
//!
//! let issue = Value::from(list![
//!     "id" => 1,
//!     "user" => list!["login" => "bob", "id" => 7],
//! ]);
//!
//! assert_eq!(issue.pluck(&path!["user", "login"]).unwrap(), &Value::from("bob"));
//! assert_eq!(issue.pluck(&path!["user", 1]).unwrap(), &Value::from(7));
//! assert!(issue.pluck(&path!["user", "name"]).is_err());
//! ```

use std::fmt;

use crate::container::Container;
use crate::error::{ListError, ListResult};
use crate::value::Value;

/// One step of a path: a name or a zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "key {key:?}"),
            PathSegment::Index(index) => write!(f, "index {index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// An ordered sequence of [`PathSegment`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    #[must_use]
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => write!(f, "[[{key:?}]]")?,
                PathSegment::Index(index) => write!(f, "[[{index}]]")?,
            }
        }
        Ok(())
    }
}

impl From<PathSegment> for Path {
    fn from(segment: PathSegment) -> Self {
        Self::new(vec![segment])
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Self::from(PathSegment::from(key))
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Self::from(PathSegment::from(index))
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::new(segments)
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Builds a [`Path`] from keys and indices: `path!["user", "login"]`,
/// `path!["labels", 0, "name"]`.
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        $crate::path::Path::new(vec![$($crate::path::PathSegment::from($segment)),*])
    };
}

/// Follows `path` from `start`. `position` is the index of the top-level
/// element being navigated; it only feeds error messages.
pub(crate) fn walk<'a>(start: &'a Value, path: &Path, position: usize) -> ListResult<&'a Value> {
    let mut current = start;
    for segment in path.segments() {
        let list = match current {
            Value::List(list) => list,
            leaf => {
                return Err(ListError::Lookup {
                    position,
                    segment: Some(segment.clone()),
                    reason: format!("reached a {} leaf", leaf.kind()),
                });
            }
        };
        current = step(list, segment, position)?;
    }
    Ok(current)
}

fn step<'a>(list: &'a Container, segment: &PathSegment, position: usize) -> ListResult<&'a Value> {
    list.get(segment).ok_or_else(|| {
        let reason = match segment {
            PathSegment::Key(_) => "no element with that name".to_owned(),
            PathSegment::Index(_) => format!("list has {} elements", list.len()),
        };
        ListError::Lookup {
            position,
            segment: Some(segment.clone()),
            reason,
        }
    })
}

impl Value {
    /// Applies `path` to this value (`x[[p1]][[p2]]...`).
    pub fn pluck(&self, path: &Path) -> ListResult<&Value> {
        walk(self, path, 0)
    }

    /// Like [`Value::pluck`], substituting `default` for a missing component.
    #[must_use]
    pub fn pluck_or<'a>(&'a self, path: &Path, default: &'a Value) -> &'a Value {
        walk(self, path, 0).unwrap_or(default)
    }
}

impl Container {
    /// Applies `path` starting at this list. A list is not itself a
    /// [`Value`], so an empty path has nothing to return and is a lookup
    /// failure.
    pub fn pluck(&self, path: &Path) -> ListResult<&Value> {
        let Some((first, rest)) = path.segments().split_first() else {
            return Err(ListError::Lookup {
                position: 0,
                segment: None,
                reason: "the path is empty".to_owned(),
            });
        };
        let head = step(self, first, 0)?;
        walk(head, &Path::new(rest.to_vec()), 0)
    }
}
