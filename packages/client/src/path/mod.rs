//! Path compilation pipeline
//!
//! A raw path string goes through [`validate`], then [`divide`] into a
//! native-resolvable prefix and an optional advanced suffix, then the prefix
//! is [`tokenize`]d into [`Step`]s. [`PathPlan`] bundles the result.

mod plan;
mod quoting;
mod splitter;
mod step;
mod tokenizer;
mod validator;

pub use plan::PathPlan;
pub use splitter::{SplitPath, divide};
pub use step::Step;
pub use tokenizer::tokenize;
pub use validator::validate;
