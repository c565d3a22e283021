//! Filter expression parsing
//!
//! Recursive-descent parser for `[?...]` predicates: logical operators,
//! comparisons, relative paths and literals.

mod core;
mod expressions;

pub use self::core::FilterParser;
