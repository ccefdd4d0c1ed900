//! Printing lists: a compact literal form via `Display`, and
//! [`str_structure`] for the indented one-element-per-line view the chapter
//! uses to explore unfamiliar data.
//!
//! Both recurse once per nesting level with no depth check of their own.
//! Lists built from JSON or by the checked operations stay within
//! [`Options::max_depth`](crate::config::Options::max_depth); a hand-built
//! list nested far deeper can exhaust the stack here.

use std::fmt::{self, Write};

use crate::container::Container;
use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(true) => f.write_str("TRUE"),
            Value::Bool(false) => f.write_str("FALSE"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(list) => write!(f, "{list}"),
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("list(")?;
        for (i, el) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(name) = el.name() {
                write!(f, "{name} = ")?;
            }
            write!(f, "{}", el.value)?;
        }
        f.write_str(")")
    }
}

/// Renders the structure of `value`, one line per element.
///
/// ```
/// use lists_common::{list, Value};
/// use lists_common::display::str_structure;
///
/// let x = Value::from(list!["a" => 1, "b" => list![true]]);
/// assert_eq!(
///     str_structure(&x),
///     "List of 2\n $ a: int 1\n $ b:List of 1\n  ..$ : lgl TRUE\n"
/// );
/// ```
#[must_use]
pub fn str_structure(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::List(list) => write_list(&mut out, list, 0),
        leaf => {
            let _ = writeln!(out, " {} {leaf}", leaf.kind());
        }
    }
    out
}

fn write_list(out: &mut String, list: &Container, level: usize) {
    let _ = writeln!(out, "List of {}", list.len());
    let width = list
        .iter()
        .map(|el| el.name().map_or(0, |n| n.chars().count()))
        .max()
        .unwrap_or(0);
    let prefix = format!(" {}$ ", " ..".repeat(level));
    for el in list {
        let name = el.name().unwrap_or("");
        let _ = write!(out, "{prefix}{name:<width$}:");
        match &el.value {
            Value::List(inner) => write_list(out, inner, level + 1),
            leaf => {
                let _ = writeln!(out, " {} {leaf}", leaf.kind());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_display_literal_form() {
        let x = list!["a" => 1, "b" => list![2.0, "x", Value::Null], true];
        assert_eq!(
            Value::from(x).to_string(),
            "list(a = 1, b = list(2.0, \"x\", NULL), TRUE)"
        );
        assert_eq!(Container::new().to_string(), "list()");
    }

    #[test]
    fn test_str_structure_pads_names() {
        let x = Value::from(list![
            "id" => 1,
            "user" => list!["login" => "bob", "id" => 7],
        ]);
        let expected = "List of 2\n \
                        $ id  : int 1\n \
                        $ user:List of 2\n  \
                        ..$ login: chr \"bob\"\n  \
                        ..$ id   : int 7\n";
        assert_eq!(str_structure(&x), expected);
    }

    #[test]
    fn test_str_structure_leaf() {
        assert_eq!(str_structure(&Value::from(2.5)), " dbl 2.5\n");
    }
}
