//! # Errors
//!
//! Every fallible operation in this crate returns [`ListResult`]. Failures
//! are surfaced to the caller as soon as they are found; nothing retries and
//! nothing silently coerces a value into a type it does not have.

use thiserror::Error;

use crate::path::PathSegment;
use crate::value::ValueKind;

#[derive(Error, Debug)]
pub enum ListError {
    /// A path component does not exist in the element being navigated.
    /// `segment` is `None` when there was no component to follow at all.
    #[error("element {position}: cannot find {}: {reason}", describe(.segment.as_ref()))]
    Lookup {
        position: usize,
        segment: Option<PathSegment>,
        reason: String,
    },

    /// A leaf could not be read as the requested scalar type.
    #[error("element {position}: expected {expected}, found {found}")]
    TypeMismatch {
        position: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Containers passed to a shape-sensitive operation do not line up.
    #[error("shape mismatch: {message}")]
    ShapeMismatch { message: String },

    #[error("nesting is deeper than the limit of {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid options: {0}")]
    Config(#[from] toml::de::Error),
}

impl ListError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        ListError::ShapeMismatch {
            message: message.into(),
        }
    }
}

fn describe(segment: Option<&PathSegment>) -> String {
    segment.map_or_else(|| "an element".to_owned(), PathSegment::to_string)
}

pub type ListResult<T> = Result<T, ListError>;
