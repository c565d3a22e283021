//! Dot notation selector parsing
//!
//! Handles parsing of dot-notation selectors: property access and wildcard (.*).

use super::core::SelectorParser;
use crate::jsonpath::{ast::JsonSelector, error::JsonPathResult, tokens::Token};

/// Parse dot-notation selector (.property or .*)
pub fn parse_dot_selector(parser: &mut SelectorParser) -> JsonPathResult<JsonSelector> {
    if let Some(name) = parser.peek_name() {
        parser.consume_token();
        return Ok(JsonSelector::Child { name });
    }
    match parser.peek_token() {
        Some(Token::Star) => {
            parser.consume_token();
            Ok(JsonSelector::Wildcard)
        }
        Some(Token::EOF) | None => {
            Err(parser.error("incomplete property access (path ends with '.')"))
        }
        _ => Err(parser.error("expected property name or '*' (wildcard) after '.'")),
    }
}
