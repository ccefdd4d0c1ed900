//! Chapter 9: Lists and Hierarchical Data
//!
//! This chapter works with data that does not fit in a table:
//! - Nested, heterogeneous lists and how to subset them
//! - Pulling fields out of a list of records
//! - Selecting and searching with predicates
//! - Flattening, untyped and typed
//! - Transposing records into columns and back
//! - Building lists from JSON

pub mod section_9_1; // Creating and subsetting lists
pub mod section_9_2; // Extracting deeply nested elements
pub mod section_9_3; // Predicate functions
pub mod section_9_4; // Flattening
pub mod section_9_5; // Transposing
pub mod section_9_6; // Lists from JSON
