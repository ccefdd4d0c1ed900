//! Options shared by the traversal operations.
//!
//! Plain functions use [`Options::default`]; the `_with` variants take an
//! explicit `&Options`. Options can be read from TOML:
//!
//! ```
//! use lists_common::config::{NamePolicy, Options};
//!
//! let opts = Options::from_toml_str(r#"
//!     max_depth = 16
//!
//!     [name_policy]
//!     concat = { separator = "." }
//! "#).unwrap();
//! assert_eq!(opts.max_depth, 16);
//! assert_eq!(opts.name_policy, NamePolicy::Concat { separator: ".".into() });
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ListResult;

/// Kept below `serde_json`'s own nesting limit of 128, so that deep JSON input
/// fails with [`ListError::DepthExceeded`](crate::error::ListError::DepthExceeded)
/// rather than a parse error.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// What flattening does with element names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// Every name is removed from the result.
    #[default]
    Drop,
    /// Inner names survive; outer names of spliced lists are lost.
    KeepInner,
    /// `outer<separator>inner`, or whichever of the two exists.
    Concat { separator: String },
}

impl NamePolicy {
    /// Combines an outer and an inner name according to the policy.
    #[must_use]
    pub fn combine(&self, outer: Option<&str>, inner: Option<&str>) -> Option<String> {
        match self {
            NamePolicy::Drop => None,
            NamePolicy::KeepInner => inner.map(str::to_owned),
            NamePolicy::Concat { separator } => match (outer, inner) {
                (Some(o), Some(i)) => Some(format!("{o}{separator}{i}")),
                (Some(o), None) => Some(o.to_owned()),
                (None, Some(i)) => Some(i.to_owned()),
                (None, None) => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Deepest nesting a recursive traversal will follow.
    pub max_depth: usize,
    pub name_policy: NamePolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            name_policy: NamePolicy::default(),
        }
    }
}

impl Options {
    pub fn from_toml_str(source: &str) -> ListResult<Self> {
        Ok(toml::from_str(source)?)
    }

    #[must_use]
    pub fn with_name_policy(mut self, name_policy: NamePolicy) -> Self {
        self.name_policy = name_policy;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
