//! Bracket segments: `[*]`, `[?filter]`, `['name']`, indices, slices and unions

use super::core::SelectorParser;
use crate::jsonpath::{
    ast::JsonSelector, error::JsonPathResult, filter_parser::FilterParser, tokens::Token,
};

/// Parse the contents of a bracket segment; the `[` is already consumed
pub fn parse_bracket_selector(parser: &mut SelectorParser) -> JsonPathResult<JsonSelector> {
    match parser.peek_token() {
        Some(Token::Question) => {
            parser.consume_token();
            let expression =
                FilterParser::new(parser.tokens, parser.input, parser.position).parse_filter_expression()?;
            parser.expect_token(Token::RightBracket)?;
            Ok(JsonSelector::Filter { expression })
        }
        Some(Token::Integer(index)) => {
            let index = *index;
            parser.consume_token();
            super::slice::parse_index_or_slice(parser, index)
        }
        Some(Token::Colon) => super::slice::parse_slice_from_colon(parser),
        Some(Token::Star | Token::String(_)) => {
            let first = parser
                .consume_token()
                .and_then(union_member)
                .ok_or_else(|| parser.error("expected a bracket member"))?;
            if matches!(parser.peek_token(), Some(Token::Comma)) {
                parse_union_selector(parser, first)
            } else {
                parser.expect_token(Token::RightBracket)?;
                Ok(first)
            }
        }
        Some(Token::RightBracket) => Err(parser.error("empty brackets '[]'")),
        Some(Token::EOF) | None => Err(parser.error("unterminated bracket '['")),
        Some(other) => {
            let reason = format!("unexpected {other} in brackets");
            Err(parser.error(reason))
        }
    }
}

/// Selector for one comma-separated member of a union
fn union_member(token: Token) -> Option<JsonSelector> {
    match token {
        Token::String(name) => Some(JsonSelector::Child { name }),
        Token::Integer(index) => Some(JsonSelector::Index { index }),
        Token::Star => Some(JsonSelector::Wildcard),
        _ => None,
    }
}

/// Parse the rest of a union (`[a,b,...]`) after its first member
pub(super) fn parse_union_selector(
    parser: &mut SelectorParser,
    first: JsonSelector,
) -> JsonPathResult<JsonSelector> {
    let mut selectors = vec![first];
    while matches!(parser.peek_token(), Some(Token::Comma)) {
        parser.consume_token();
        let member = parser
            .consume_token()
            .and_then(union_member)
            .ok_or_else(|| parser.error("union members are quoted names, integers or '*'"))?;
        selectors.push(member);
    }
    parser.expect_token(Token::RightBracket)?;
    Ok(JsonSelector::Union { selectors })
}
