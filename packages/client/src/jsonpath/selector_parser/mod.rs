//! Segment parsing over the token queue
//!
//! Dot segments, bracket segments (indices, slices, unions, filters) and the
//! target of a `..` descendant segment.

mod bracket;
mod core;
mod dot;
mod slice;

pub use self::core::SelectorParser;
