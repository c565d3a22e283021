//! Core selector parser structure and main parsing logic
//!
//! Contains the main `SelectorParser` struct and the primary `parse_selector` method
//! that dispatches to specialized parsing functions based on token type.

use std::collections::VecDeque;

use crate::jsonpath::{
    ast::JsonSelector,
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parser for individual `JSONPath` selectors
pub struct SelectorParser<'a> {
    pub(crate) tokens: &'a mut VecDeque<Token>,
    pub(crate) input: &'a str,
    pub(crate) position: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create new selector parser
    #[inline]
    pub fn new(tokens: &'a mut VecDeque<Token>, input: &'a str, position: usize) -> Self {
        Self {
            tokens,
            input,
            position,
        }
    }

    /// Parse a single `JSONPath` segment following the root
    pub fn parse_selector(&mut self) -> JsonPathResult<JsonSelector> {
        match self.peek_token() {
            Some(Token::Dot) => {
                self.consume_token();
                super::dot::parse_dot_selector(self)
            }
            Some(Token::DoubleDot) => {
                self.consume_token();
                Ok(JsonSelector::RecursiveDescent)
            }
            Some(Token::LeftBracket) => {
                self.consume_token();
                super::bracket::parse_bracket_selector(self)
            }
            Some(Token::RightBracket) => Err(self.error("unmatched closing bracket ']'")),
            Some(Token::At) => Err(self.error(
                "current node identifier '@' is only valid within filter expressions [?...]",
            )),
            Some(Token::Root) => Err(self.error("root identifier '$' may only appear once")),
            _ => Err(self.error("expected selector (.property, [index] or [expression])")),
        }
    }

    /// Parse the segment that follows a `..` descendant operator
    pub fn parse_descendant_target(&mut self) -> JsonPathResult<JsonSelector> {
        if let Some(name) = self.peek_name() {
            self.consume_token();
            return Ok(JsonSelector::Child { name });
        }
        match self.peek_token() {
            Some(Token::Star) => {
                self.consume_token();
                Ok(JsonSelector::Wildcard)
            }
            Some(Token::LeftBracket) => {
                self.consume_token();
                super::bracket::parse_bracket_selector(self)
            }
            _ => Err(self.error(
                "descendant segment '..' must be followed by a name, '*' or a bracket selector",
            )),
        }
    }

    /// Member name at the head of the queue, keywords included (`$.true`)
    pub(crate) fn peek_name(&self) -> Option<String> {
        self.peek_token()
            .and_then(Token::member_name)
            .map(str::to_string)
    }

    /// Peek at next token without consuming
    #[inline]
    pub(crate) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Consume and return next token
    #[inline]
    pub(crate) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Expect specific token and consume it
    pub(crate) fn expect_token(&mut self, expected: Token) -> JsonPathResult<()> {
        match self.consume_token() {
            Some(actual) if actual.same_kind(&expected) => Ok(()),
            Some(actual) => Err(self.error(format!("expected {expected}, found {actual}"))),
            None => Err(self.error(format!("expected {expected}, found end of input"))),
        }
    }

    pub(crate) fn error(&self, reason: impl Into<String>) -> crate::jsonpath::error::JsonPathError {
        invalid_expression_error(self.input, reason, Some(self.position))
    }
}
