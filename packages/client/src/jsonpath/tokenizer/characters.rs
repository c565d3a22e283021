//! Structural characters, dots and bare words

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Tokenize the character at `i`, returning the index of its last character
pub(crate) fn parse_character_token(
    parser: &mut ExpressionParser,
    chars: &[char],
    i: usize,
) -> JsonPathResult<usize> {
    let c = chars[i];
    if c == '.' {
        return parse_dots(parser, chars, i);
    }
    if let Some(token) = Token::punctuation(c) {
        parser.tokens.push_back(token);
        return Ok(i);
    }
    if c.is_alphabetic() || c == '_' {
        return parse_word(parser, chars, i);
    }
    Err(invalid_expression_error(
        &parser.input,
        format!("unexpected character '{c}'"),
        Some(i),
    ))
}

/// `.` or `..`; three dots in a row never form a valid path
fn parse_dots(parser: &mut ExpressionParser, chars: &[char], i: usize) -> JsonPathResult<usize> {
    let run = chars[i..].iter().take_while(|&&c| c == '.').count();
    match run {
        1 => {
            parser.tokens.push_back(Token::Dot);
            Ok(i)
        }
        2 => {
            parser.tokens.push_back(Token::DoubleDot);
            Ok(i + 1)
        }
        _ => Err(invalid_expression_error(
            &parser.input,
            "'...' is not a segment; use '..' for descendants",
            Some(i),
        )),
    }
}

/// Member names and keywords
///
/// `-` is accepted after the first character so that keys such as
/// `first-name` work in dot notation.
fn parse_word(parser: &mut ExpressionParser, chars: &[char], start: usize) -> JsonPathResult<usize> {
    let len = chars[start..]
        .iter()
        .take_while(|&&c| c.is_alphanumeric() || c == '_' || c == '-')
        .count();
    let word: String = chars[start..start + len].iter().collect();
    parser.tokens.push_back(Token::word(word));
    Ok(start + len - 1)
}
