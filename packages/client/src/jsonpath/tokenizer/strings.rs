//! String literal tokenization with escape sequence handling
//!
//! Handles quoted string literals (single or double quotes) including JSON
//! escape sequences and UTF-16 surrogate pairs.

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse string literal with quote handling and escape sequences
pub(crate) fn parse_string_literal(
    parser: &mut ExpressionParser,
    chars: &[char],
    mut i: usize,
) -> JsonPathResult<usize> {
    let quote = chars[i];
    i += 1; // Skip opening quote
    let start = i;
    let mut string_value = String::new();

    while i < chars.len() && chars[i] != quote {
        if chars[i] == '\\' && i + 1 < chars.len() {
            i += 1;
            match chars[i] {
                '"' => string_value.push('"'),
                '\'' => string_value.push('\''),
                '\\' => string_value.push('\\'),
                '/' => string_value.push('/'),
                'b' => string_value.push('\u{0008}'),
                'f' => string_value.push('\u{000C}'),
                'n' => string_value.push('\n'),
                'r' => string_value.push('\r'),
                't' => string_value.push('\t'),
                'u' => {
                    i = parse_unicode_escape(parser, chars, i, &mut string_value)?;
                }
                _ => {
                    return Err(invalid_expression_error(
                        &parser.input,
                        "invalid escape sequence",
                        Some(i),
                    ));
                }
            }
        } else {
            string_value.push(chars[i]);
        }
        i += 1;
    }

    if i >= chars.len() {
        return Err(invalid_expression_error(
            &parser.input,
            "unterminated string literal",
            Some(start),
        ));
    }

    parser.tokens.push_back(Token::String(string_value));
    Ok(i)
}

/// Read four hex digits following position `i`
fn hex_quad(chars: &[char], i: usize) -> Option<u32> {
    let digits: String = chars.get(i + 1..i + 5)?.iter().collect();
    u32::from_str_radix(&digits, 16).ok()
}

/// Parse Unicode escape sequence \uXXXX with surrogate pair support
fn parse_unicode_escape(
    parser: &ExpressionParser,
    chars: &[char],
    i: usize,
    string_value: &mut String,
) -> JsonPathResult<usize> {
    let invalid = |reason: &str| invalid_expression_error(&parser.input, reason, Some(i));

    let code_point = hex_quad(chars, i).ok_or_else(|| invalid("invalid unicode escape sequence"))?;

    if (0xD800..=0xDBFF).contains(&code_point) {
        // High surrogate: a low surrogate escape must follow
        let low = (chars.get(i + 5) == Some(&'\\') && chars.get(i + 6) == Some(&'u'))
            .then(|| hex_quad(chars, i + 6))
            .flatten()
            .filter(|low| (0xDC00..=0xDFFF).contains(low))
            .ok_or_else(|| invalid("high surrogate not followed by valid low surrogate"))?;
        let scalar = 0x10000 + ((code_point - 0xD800) << 10) + (low - 0xDC00);
        let c = char::from_u32(scalar).ok_or_else(|| invalid("invalid surrogate pair result"))?;
        string_value.push(c);
        Ok(i + 10)
    } else if (0xDC00..=0xDFFF).contains(&code_point) {
        Err(invalid("low surrogate without preceding high surrogate"))
    } else {
        let c = char::from_u32(code_point).ok_or_else(|| invalid("invalid unicode code point"))?;
        string_value.push(c);
        Ok(i + 4)
    }
}
