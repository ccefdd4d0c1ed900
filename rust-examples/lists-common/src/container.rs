//! # Containers
//!
//! An ordered, optionally named sequence of [`Value`]s. This is the list
//! from the chapter: elements can be leaves or further lists, names are
//! optional and may repeat, and position order is always kept.
//!
//! Storage is an `im::Vector`, so cloning a container is O(1) and every
//! "modifying" operation returns a new container sharing structure with
//! the old one.
//!
//! ## Subsetting
//!
//! There are two ways to pull things out of a list:
//!
//! - [`Container::get`] returns one element's *value* (the `[[` operator).
//! - [`Container::subset`] returns a smaller *list* (the `[` operator).
//!
//! ```
//! use lists_common::{list, Value};
//! use lists_common::path::PathSegment;
//!
//! let x = list!["a" => 1, "b" => "two", "c" => list![3, 4]];
//!
//! // [[ pulls out the element itself
//! assert_eq!(x.get(&"b".into()), Some(&Value::from("two")));
//!
//! // [ keeps the list wrapper and the names
//! let sub = x.subset(&[PathSegment::from("a"), PathSegment::from(2)]).unwrap();
//! assert_eq!(sub.len(), 2);
//! assert_eq!(sub.names(), vec![Some("a"), Some("c")]);
//! ```
//!
//! ## Cycles
//!
//! Children are owned by value, so a container can never contain itself.

use im::Vector;

use crate::error::{ListError, ListResult};
use crate::path::PathSegment;
use crate::value::Value;

/// One slot of a container: an optional name and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: Option<String>,
    pub value: Value,
}

impl Element {
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    pub fn unnamed(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// An ordered, optionally named, persistent list of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    items: Vector<Element>,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Builds an unnamed list.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().map(Element::unnamed).collect()
    }

    /// Builds a named list; pairs keep their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| Element::named(name, value))
            .collect()
    }

    /// Returns a new container with `value` appended.
    #[must_use]
    pub fn push(&self, value: impl Into<Value>) -> Self {
        self.push_element(Element::unnamed(value))
    }

    /// Returns a new container with a named `value` appended.
    #[must_use]
    pub fn push_named(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push_element(Element::named(name, value))
    }

    #[must_use]
    pub fn push_element(&self, element: Element) -> Self {
        let mut items = self.items.clone();
        items.push_back(element);
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Element> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.items.iter().map(|el| &el.value)
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Element> {
        self.items.get(index)
    }

    #[must_use]
    pub fn names(&self) -> Vec<Option<&str>> {
        self.items.iter().map(Element::name).collect()
    }

    /// True when the list is non-empty and every element carries a name.
    #[must_use]
    pub fn is_fully_named(&self) -> bool {
        !self.is_empty() && self.items.iter().all(|el| el.name.is_some())
    }

    /// Returns a copy with names replaced, one per element.
    pub fn set_names<I, S>(&self, names: I) -> ListResult<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let names: Vec<Option<String>> = names.into_iter().map(|n| n.map(Into::into)).collect();
        if names.len() != self.len() {
            return Err(ListError::shape(format!(
                "{} names given for a list of length {}",
                names.len(),
                self.len()
            )));
        }
        Ok(self
            .items
            .iter()
            .zip(names)
            .map(|(el, name)| Element {
                name,
                value: el.value.clone(),
            })
            .collect())
    }

    /// Position of the first element called `key`.
    #[must_use]
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|el| el.name() == Some(key))
    }

    /// Single-element lookup by name (first match) or zero-based index.
    #[must_use]
    pub fn get(&self, segment: &PathSegment) -> Option<&Value> {
        self.get_element(segment).map(|el| &el.value)
    }

    fn get_element(&self, segment: &PathSegment) -> Option<&Element> {
        match segment {
            PathSegment::Key(key) => self.items.iter().find(|el| el.name() == Some(key.as_str())),
            PathSegment::Index(index) => self.items.get(*index),
        }
    }

    /// Selects several elements into a new list, keeping their names.
    pub fn subset(&self, segments: &[PathSegment]) -> ListResult<Self> {
        segments
            .iter()
            .map(|segment| {
                self.get_element(segment)
                    .cloned()
                    .ok_or_else(|| ListError::Lookup {
                        position: 0,
                        segment: Some(segment.clone()),
                        reason: match segment {
                            PathSegment::Key(_) => "no element with that name".to_owned(),
                            PathSegment::Index(_) => format!("list has {} elements", self.len()),
                        },
                    })
            })
            .collect()
    }

    /// Nesting depth: 1 for a list of leaves (or an empty list).
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 1;
        let mut pending: Vec<(&Container, usize)> = vec![(self, 1)];
        while let Some((list, level)) = pending.pop() {
            deepest = deepest.max(level);
            for value in list.values() {
                if let Value::List(child) = value {
                    pending.push((child, level + 1));
                }
            }
        }
        deepest
    }

    /// Fails with [`ListError::DepthExceeded`] when nesting exceeds `limit`.
    pub fn check_depth(&self, limit: usize) -> ListResult<()> {
        if self.depth() > limit {
            return Err(ListError::DepthExceeded { limit });
        }
        Ok(())
    }
}

impl FromIterator<Element> for Container {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Value> for Container {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        iter.into_iter().map(Element::unnamed).collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, value)| Element::named(name, value))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Element;
    type IntoIter = im::vector::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Container {
    type Item = Element;
    type IntoIter = im::vector::ConsumingIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Builds a [`Container`].
///
/// Each item is either `value` or `"name" => value`, and the two can be
/// mixed: `list!["a" => 1, 2]` names only its first element. Values go
/// through `Value::from`, so nested lists, scalars and `Option`s can be
/// mixed freely.
#[macro_export]
macro_rules! list {
    () => {
        $crate::container::Container::new()
    };
    (@items [$($done:tt)*]) => {
        <$crate::container::Container as ::core::iter::FromIterator<$crate::container::Element>>::from_iter([
            $($done)*
        ])
    };
    (@items [$($done:tt)*] $name:literal => $value:expr $(, $($rest:tt)*)?) => {
        $crate::list!(@items [
            $($done)*
            $crate::container::Element::named($name, $crate::value::Value::from($value)),
        ] $($($rest)*)?)
    };
    (@items [$($done:tt)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::list!(@items [
            $($done)*
            $crate::container::Element::unnamed($crate::value::Value::from($value)),
        ] $($($rest)*)?)
    };
    ($($items:tt)+) => {
        $crate::list!(@items [] $($items)+)
    };
}
