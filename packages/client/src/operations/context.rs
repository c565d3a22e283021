//! Container descent contexts

use std::fmt;

/// One descent into a nested collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionContext {
    /// Descend into the map value stored under this key
    MapKey(String),
    /// Descend into the list element at this index
    ListIndex(i64),
}

impl fmt::Display for CollectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionContext::MapKey(key) => write!(f, "map[{key:?}]"),
            CollectionContext::ListIndex(index) => write!(f, "list[{index}]"),
        }
    }
}

/// Ordered, non-empty chain of descent contexts
///
/// "No nesting" is `Option::None`, never an empty chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextChain(Vec<CollectionContext>);

impl ContextChain {
    /// Wrap `contexts`, returning `None` when there are none
    #[must_use]
    pub fn new(contexts: Vec<CollectionContext>) -> Option<Self> {
        if contexts.is_empty() {
            None
        } else {
            Some(Self(contexts))
        }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[CollectionContext] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CollectionContext> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContextChain {
    type Item = &'a CollectionContext;
    type IntoIter = std::slice::Iter<'a, CollectionContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ContextChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, context) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{context}")?;
        }
        Ok(())
    }
}
