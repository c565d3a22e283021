//! JSONPath error handling module
//!
//! Error types and constructors for compiling and evaluating JSONPath
//! expressions against in-memory documents.

mod constructors;
mod types;

pub use constructors::invalid_expression_error;
pub use types::{ErrorKind, JsonPathError, JsonPathResult};
