//! Primitive access steps of a simple path

use std::fmt;

/// One access step of a simple path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// The root marker `$`; contributes no context
    Root,
    /// Map access by key
    Key(String),
    /// List access by index; negative values count from the end
    Index(i64),
}

impl Step {
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, Step::Root)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Root => f.write_str("$"),
            Step::Key(key) => write!(f, "['{}']", key.replace('\'', "\\'")),
            Step::Index(index) => write!(f, "[{index}]"),
        }
    }
}
