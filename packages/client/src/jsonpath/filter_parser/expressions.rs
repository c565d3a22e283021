//! Expression parsing logic for filter expressions
//!
//! Parsing for logical operators, comparisons, and primary expressions
//! including literals, parenthesised groups and relative paths.

use super::core::FilterParser;
use crate::jsonpath::{
    ast::{FilterExpression, FilterValue, JsonSelector, LogicalOp},
    error::JsonPathResult,
    tokens::Token,
};

impl FilterParser<'_> {
    /// Parse logical OR expressions (lowest precedence)
    pub(super) fn parse_logical_or(&mut self) -> JsonPathResult<FilterExpression> {
        let mut left = self.parse_logical_and()?;

        while matches!(self.peek_token(), Some(Token::LogicalOr)) {
            self.consume_token();
            let right = self.parse_logical_and()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::Or,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse logical AND expressions
    pub(super) fn parse_logical_and(&mut self) -> JsonPathResult<FilterExpression> {
        let mut left = self.parse_comparison()?;

        while matches!(self.peek_token(), Some(Token::LogicalAnd)) {
            self.consume_token();
            let right = self.parse_comparison()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::And,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse comparison expressions
    pub(super) fn parse_comparison(&mut self) -> JsonPathResult<FilterExpression> {
        let left = self.parse_primary()?;

        match self.take_comparison_operator() {
            Some(operator) => {
                let right = self.parse_primary()?;
                Ok(FilterExpression::Comparison {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                })
            }
            None => Ok(left),
        }
    }

    /// Parse primary expressions (relative paths, literals, parentheses)
    pub(super) fn parse_primary(&mut self) -> JsonPathResult<FilterExpression> {
        let literal = |value| Ok(FilterExpression::Literal { value });

        match self.consume_token() {
            Some(Token::At) => self.parse_relative_path(),
            Some(Token::String(s)) => literal(FilterValue::String(s)),
            Some(Token::Integer(n)) => literal(FilterValue::Integer(n)),
            Some(Token::Number(n)) => literal(FilterValue::Number(n)),
            Some(Token::True) => literal(FilterValue::Boolean(true)),
            Some(Token::False) => literal(FilterValue::Boolean(false)),
            Some(Token::Null) => literal(FilterValue::Null),
            Some(Token::LeftParen) => {
                let expression = self.parse_logical_or()?;
                self.expect_token(Token::RightParen)?;
                Ok(expression)
            }
            Some(Token::Root) => {
                Err(self.error("absolute '$' references are not supported inside filters"))
            }
            Some(Token::EOF) | None => Err(self.error("unterminated filter expression")),
            Some(token) => Err(self.error(format!("unexpected {token} in filter expression"))),
        }
    }

    /// Parse the singular path following `@` (`.name`, `['name']`, `[0]`)
    fn parse_relative_path(&mut self) -> JsonPathResult<FilterExpression> {
        let mut path = Vec::new();

        loop {
            match (self.tokens.front(), self.tokens.get(1), self.tokens.get(2)) {
                (Some(Token::Dot), Some(Token::Identifier(name)), _) => {
                    path.push(JsonSelector::Child { name: name.clone() });
                }
                (Some(Token::LeftBracket), Some(Token::String(name)), Some(Token::RightBracket)) => {
                    path.push(JsonSelector::Child { name: name.clone() });
                    self.consume_token();
                }
                (Some(Token::LeftBracket), Some(Token::Integer(index)), Some(Token::RightBracket)) => {
                    path.push(JsonSelector::Index { index: *index });
                    self.consume_token();
                }
                (Some(Token::Dot), _, _) => {
                    return Err(self.error("expected property name after '@.'"));
                }
                _ => break,
            }
            self.consume_token();
            self.consume_token();
        }

        if path.is_empty() {
            Ok(FilterExpression::Current)
        } else {
            Ok(FilterExpression::Property { path })
        }
    }
}
