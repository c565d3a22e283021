//! Operator tokenization for comparison and logical operators
//!
//! Handles parsing of multi-character operators like ==, !=, <=, >=, &&, ||.
//! The single-character forms `&` and `|` are accepted as logical aliases.

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse operator tokens (comparison and logical operators)
pub(crate) fn parse_operator(
    parser: &mut ExpressionParser,
    chars: &[char],
    i: usize,
) -> JsonPathResult<usize> {
    let next_is = |c: char| i + 1 < chars.len() && chars[i + 1] == c;

    match chars[i] {
        '=' if next_is('=') => {
            parser.tokens.push_back(Token::Equal);
            Ok(i + 1)
        }
        '=' => Err(invalid_expression_error(
            &parser.input,
            "single '=' not supported, use '==' for equality",
            Some(i),
        )),
        '!' if next_is('=') => {
            parser.tokens.push_back(Token::NotEqual);
            Ok(i + 1)
        }
        '!' => Err(invalid_expression_error(
            &parser.input,
            "single '!' not supported, use '!=' for inequality",
            Some(i),
        )),
        '<' if next_is('=') => {
            parser.tokens.push_back(Token::LessEq);
            Ok(i + 1)
        }
        '<' => {
            parser.tokens.push_back(Token::Less);
            Ok(i)
        }
        '>' if next_is('=') => {
            parser.tokens.push_back(Token::GreaterEq);
            Ok(i + 1)
        }
        '>' => {
            parser.tokens.push_back(Token::Greater);
            Ok(i)
        }
        '&' => {
            parser.tokens.push_back(Token::LogicalAnd);
            Ok(if next_is('&') { i + 1 } else { i })
        }
        '|' => {
            parser.tokens.push_back(Token::LogicalOr);
            Ok(if next_is('|') { i + 1 } else { i })
        }
        c => Err(invalid_expression_error(
            &parser.input,
            format!("unexpected operator character '{c}'"),
            Some(i),
        )),
    }
}
