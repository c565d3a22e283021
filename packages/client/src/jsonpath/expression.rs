//! Compiled `JSONPath` expression

use std::fmt;

use super::ast::{JsonSelector, PathFunction};

/// A compiled `JSONPath` expression: a selector chain rooted at `$` plus an
/// optional trailing function.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPathExpression {
    selectors: Vec<JsonSelector>,
    function: Option<PathFunction>,
    original: String,
}

impl JsonPathExpression {
    #[must_use]
    pub fn new(
        selectors: Vec<JsonSelector>,
        function: Option<PathFunction>,
        original: String,
    ) -> Self {
        Self {
            selectors,
            function,
            original,
        }
    }

    /// Selector chain, starting with [`JsonSelector::Root`]
    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &[JsonSelector] {
        &self.selectors
    }

    #[inline]
    #[must_use]
    pub fn function(&self) -> Option<PathFunction> {
        self.function
    }

    /// The expression text this was compiled from
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// True when the expression can match at most one node
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.selectors.iter().all(JsonSelector::is_singular)
    }

    /// True when the only non-singular part is a trailing `length()`
    #[must_use]
    pub fn is_plain_length(&self) -> bool {
        self.function == Some(PathFunction::Length) && self.is_singular()
    }
}

impl fmt::Display for JsonPathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
