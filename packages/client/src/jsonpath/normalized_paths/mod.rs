//! Normalized paths
//!
//! Canonical `$['member'][index]` locations that uniquely identify a single
//! node inside a document, plus navigation helpers used by the mutating
//! evaluator operations.

mod navigation;
mod types;

pub use types::{NormalizedPath, PathSegment};
