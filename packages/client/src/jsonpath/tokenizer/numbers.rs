//! Number literal tokenization
//!
//! Handles parsing of integer and floating-point literals with
//! validation for leading zeros and negative zero restrictions.

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse number literal (integer or float)
pub(crate) fn parse_number_literal(
    parser: &mut ExpressionParser,
    chars: &[char],
    mut i: usize,
) -> JsonPathResult<usize> {
    let start = i;

    if chars[i] == '-' {
        i += 1;
    }

    let digit_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    if i == digit_start {
        return Err(invalid_expression_error(
            &parser.input,
            "expected digits after '-'",
            Some(start),
        ));
    }

    // Integers cannot have leading zeros (except for "0" itself)
    if i > digit_start + 1 && chars[digit_start] == '0' {
        return Err(invalid_expression_error(
            &parser.input,
            "integers cannot have leading zeros",
            Some(digit_start),
        ));
    }

    if start < digit_start && chars[digit_start] == '0' && i == digit_start + 1 {
        return Err(invalid_expression_error(
            &parser.input,
            "negative zero is not allowed",
            Some(start),
        ));
    }

    // A '.' only makes this a decimal when digits follow; "$[0].a" keeps the dot
    let mut is_float = false;
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        is_float = true;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    let number_str: String = chars[start..i].iter().collect();
    if is_float {
        match number_str.parse::<f64>() {
            Ok(value) => parser.tokens.push_back(Token::Number(value)),
            Err(_) => {
                return Err(invalid_expression_error(
                    &parser.input,
                    "invalid floating point number format",
                    Some(start),
                ));
            }
        }
    } else {
        match number_str.parse::<i64>() {
            Ok(value) => parser.tokens.push_back(Token::Integer(value)),
            Err(_) => {
                return Err(invalid_expression_error(
                    &parser.input,
                    "invalid integer format",
                    Some(start),
                ));
            }
        }
    }
    Ok(i.saturating_sub(1)) // Adjust for loop increment
}
