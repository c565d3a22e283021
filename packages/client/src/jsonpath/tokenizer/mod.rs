//! Lexer and top-level parse loop for `JSONPath` expressions

mod characters;
mod core;
mod numbers;
mod operators;
mod strings;

pub use self::core::ExpressionParser;
