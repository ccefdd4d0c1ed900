//! # Values
//!
//! A [`Value`] is either a scalar leaf or a nested [`Container`]. Leaves are
//! a closed enum, so every operation that cares about the type of a leaf
//! matches on it exhaustively.
//!
//! ```
//! use lists_common::value::{Value, ValueKind};
//!
//! let v = Value::from(42);
//! assert_eq!(v.kind(), ValueKind::Int);
//! assert_eq!(v.as_int(), Some(42));
//! assert!(v.is_leaf());
//! ```

use std::fmt;

use crate::container::Container;
use crate::error::{ListError, ListResult};

/// A leaf value or a nested container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Container),
}

/// The type tag of a [`Value`], used in error messages and structure views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "NULL",
            ValueKind::Bool => "lgl",
            ValueKind::Int => "int",
            ValueKind::Float => "dbl",
            ValueKind::Str => "chr",
            ValueKind::List => "list",
        };
        f.write_str(name)
    }
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::List(_))
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&Container> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        bool::from_leaf(self)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        i64::from_leaf(self)
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        f64::from_leaf(self)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Nesting depth: 0 for a leaf, 1 for a list of leaves, and so on.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Value::List(list) => list.depth(),
            _ => 0,
        }
    }
}

/// Scalar types a leaf can be read as.
///
/// Coercions are deliberately narrow:
///
/// | target | accepts |
/// |--------|---------|
/// | `i64`  | int, lgl (0/1), dbl with an exact integral value |
/// | `f64`  | dbl, int, lgl |
/// | `String` | chr |
/// | `bool` | lgl |
///
/// `NULL` and lists never coerce.
pub trait FromLeaf: Sized {
    const KIND: ValueKind;

    fn from_leaf(value: &Value) -> Option<Self>;

    /// Reads `value` as `Self`, reporting the element position on failure.
    fn coerce(value: &Value, position: usize) -> ListResult<Self> {
        Self::from_leaf(value).ok_or(ListError::TypeMismatch {
            position,
            expected: Self::KIND,
            found: value.kind(),
        })
    }
}

impl FromLeaf for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_leaf(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            // i64::MAX as f64 rounds up to 2^63, hence the strict bound.
            Value::Float(x)
                if x.fract() == 0.0 && *x >= i64::MIN as f64 && *x < i64::MAX as f64 =>
            {
                Some(*x as i64)
            }
            _ => None,
        }
    }
}

impl FromLeaf for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_leaf(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }
}

impl FromLeaf for String {
    const KIND: ValueKind = ValueKind::Str;

    fn from_leaf(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromLeaf for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_leaf(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Container> for Value {
    fn from(list: Container) -> Self {
        Value::List(list)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
