//! Slice and index parsing for array selectors
//!
//! Handles array index and slice notation with start, end, and step values.

use super::core::SelectorParser;
use crate::jsonpath::{ast::JsonSelector, error::JsonPathResult, tokens::Token};

/// Parse index or slice notation after initial integer
pub fn parse_index_or_slice(
    parser: &mut SelectorParser,
    start: i64,
) -> JsonPathResult<JsonSelector> {
    match parser.peek_token() {
        Some(Token::RightBracket) => {
            parser.consume_token();
            Ok(JsonSelector::Index { index: start })
        }
        Some(Token::Colon) => {
            parser.consume_token();
            parse_slice_tail(parser, Some(start))
        }
        Some(Token::Comma) => {
            super::bracket::parse_union_selector(parser, JsonSelector::Index { index: start })
        }
        _ => Err(parser.error("expected ']', ':', or ',' after index")),
    }
}

/// Parse slice notation starting with colon (e.g., [:5], [::2])
pub fn parse_slice_from_colon(parser: &mut SelectorParser) -> JsonPathResult<JsonSelector> {
    parser.consume_token(); // consume colon
    parse_slice_tail(parser, None)
}

/// Parse `end? (":" step?)? "]"` once the first colon has been consumed
fn parse_slice_tail(
    parser: &mut SelectorParser,
    start: Option<i64>,
) -> JsonPathResult<JsonSelector> {
    let end = parse_optional_integer(parser);

    let step = if matches!(parser.peek_token(), Some(Token::Colon)) {
        parser.consume_token();
        let step = parse_optional_integer(parser);
        if step == Some(0) {
            return Err(parser.error("step value cannot be zero in slice expression"));
        }
        step
    } else {
        None
    };

    parser.expect_token(Token::RightBracket)?;
    Ok(JsonSelector::Slice { start, end, step })
}

fn parse_optional_integer(parser: &mut SelectorParser) -> Option<i64> {
    if let Some(Token::Integer(n)) = parser.peek_token() {
        let n = *n;
        parser.consume_token();
        Some(n)
    } else {
        None
    }
}
