//! Core JSONPath evaluator
//!
//! In-memory evaluation of compiled expressions against `serde_json::Value`
//! documents. Every intermediate result carries its normalized location so
//! the same walk serves reads and in-place mutation.

mod engine;
mod filters;
mod functions;
mod selectors;

pub use engine::CoreJsonPathEvaluator;
