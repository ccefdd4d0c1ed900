//! # Lists Common
//!
//! Shared library for the hierarchical data chapter: a nested, optionally
//! named list type and the functional operations the chapter teaches on it.
//!
//! ## Modules
//!
//! - [`value`] and [`container`]: the list type and its leaves
//! - [`path`]: `[[key]][[index]]`-style navigation
//! - [`map`]: mapping and path extraction, untyped and typed
//! - [`flatten`]: removing one or all levels of nesting
//! - [`transpose`]: turning a list of records inside out
//! - [`predicate`]: keep, discard, detect, some, every, ...
//! - [`json`]: building lists from JSON and back
//! - [`display`]: literal and structure views
//! - [`config`]: traversal options
//! - [`error`]: the error type shared by all of the above
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Operations return new lists instead of mutating
//! 2. **Persistent storage**: `im::Vector` makes those new lists cheap
//! 3. **Closed types**: leaves are an enum, matched exhaustively
//! 4. **Fail fast**: typed variants report the first element that does not fit

pub mod config;
pub mod container;
pub mod display;
pub mod error;
pub mod flatten;
pub mod json;
pub mod map;
pub mod path;
pub mod predicate;
pub mod testing;
pub mod transpose;
pub mod value;

// Re-export main types for convenience
pub use config::{NamePolicy, Options};
pub use container::{Container, Element};
pub use error::{ListError, ListResult};
pub use path::{Path, PathSegment};
pub use value::{FromLeaf, Value, ValueKind};
