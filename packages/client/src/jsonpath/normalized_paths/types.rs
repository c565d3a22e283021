//! Core types for normalized paths

use std::fmt;

/// A normalized `JSONPath` expression that uniquely identifies a single node
///
/// Normalized paths use the canonical bracket syntax (`$['a'][0]`). Segments
/// order left to right; the root is implicit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NormalizedPath {
    pub(crate) segments: Vec<PathSegment>,
}

/// Individual segment in a normalized path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Object member access (['member'])
    Member(String),
    /// Array index access ([index])
    Index(usize),
}

impl NormalizedPath {
    /// Create a root normalized path ($)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this path by one segment
    #[must_use]
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Get the path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Check if this is the root path ($)
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of non-root segments
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Member(name) => {
                write!(f, "['{}']", name.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}
