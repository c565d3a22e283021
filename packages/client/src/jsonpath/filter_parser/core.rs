//! Core filter parser structure and initialization
//!
//! Contains the main `FilterParser` struct and token helpers shared by the
//! expression parsing routines.

use std::collections::VecDeque;

use crate::jsonpath::{
    ast::{ComparisonOp, FilterExpression},
    error::{JsonPathError, JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parser for `JSONPath` filter expressions
pub struct FilterParser<'a> {
    pub(super) tokens: &'a mut VecDeque<Token>,
    pub(super) input: &'a str,
    pub(super) position: usize,
}

impl<'a> FilterParser<'a> {
    /// Create new filter parser
    #[inline]
    pub fn new(tokens: &'a mut VecDeque<Token>, input: &'a str, position: usize) -> Self {
        Self {
            tokens,
            input,
            position,
        }
    }

    /// Parse complete filter expression
    #[inline]
    pub fn parse_filter_expression(&mut self) -> JsonPathResult<FilterExpression> {
        self.parse_logical_or()
    }

    /// Consume a comparison operator if one is next
    pub(super) fn take_comparison_operator(&mut self) -> Option<ComparisonOp> {
        let operator = self.peek_token()?.comparison()?;
        self.consume_token();
        Some(operator)
    }

    /// Expect a specific token and consume it
    pub(super) fn expect_token(&mut self, expected: Token) -> JsonPathResult<()> {
        match self.consume_token() {
            Some(token) if token.same_kind(&expected) => Ok(()),
            Some(Token::EOF) | None => Err(self.error(format!(
                "expected {expected} in filter, but reached end of input"
            ))),
            Some(token) => Err(self.error(format!("expected {expected}, found {token}"))),
        }
    }

    /// Consume the next token from the token stream
    #[inline]
    pub(super) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Peek at the next token without consuming it
    #[inline]
    pub(super) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub(super) fn error(&self, reason: impl Into<String>) -> JsonPathError {
        invalid_expression_error(self.input, reason, Some(self.position))
    }
}
