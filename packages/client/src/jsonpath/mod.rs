//! JSONPath compilation and in-memory evaluation
//!
//! Expressions compile into a selector chain ([`ast::JsonSelector`]) with an
//! optional trailing function. The [`CoreJsonPathEvaluator`] walks a
//! `serde_json::Value` with that chain, tracking the normalized location of
//! every match so the same walk backs both reads and in-place mutation.
//!
//! # Examples
//!
//! ```rust
//! use docpath_client::jsonpath::{CoreJsonPathEvaluator, PathEvaluator};
//! use serde_json::json;
//!
//! let evaluator = CoreJsonPathEvaluator::new();
//! let expression = evaluator.compile("$.items[?(@.price < 10)].name").unwrap();
//! let document = json!({"items": [
//!     {"name": "pen", "price": 2},
//!     {"name": "lamp", "price": 40},
//! ]});
//! assert_eq!(evaluator.find(&expression, &document), vec![json!("pen")]);
//! ```

pub mod core_evaluator;
pub mod error;
pub mod evaluator;
pub mod normalized_paths;

// Decomposed parser modules
pub mod ast;
pub mod compiler;
pub mod expression;
pub mod filter_parser;
pub mod selector_parser;
pub mod tokenizer;
pub mod tokens;

pub use self::{
    ast::{ComparisonOp, FilterExpression, FilterValue, JsonSelector, LogicalOp, PathFunction},
    compiler::JsonPathParser,
    core_evaluator::CoreJsonPathEvaluator,
    error::{JsonPathError, JsonPathResult},
    evaluator::PathEvaluator,
    expression::JsonPathExpression,
    normalized_paths::{NormalizedPath, PathSegment},
};
