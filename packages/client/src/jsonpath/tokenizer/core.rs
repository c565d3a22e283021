//! Core tokenizer types and parser implementation
//!
//! Provides the main ExpressionParser struct and the top-level parse loop
//! that turns an expression into a selector chain and optional function.

use std::collections::VecDeque;

use crate::jsonpath::{
    ast::{JsonSelector, PathFunction},
    error::{JsonPathResult, invalid_expression_error},
    selector_parser::SelectorParser,
    tokens::Token,
};

/// Main expression parser that combines tokenization and parsing
pub struct ExpressionParser {
    pub(crate) input: String,
    pub(crate) tokens: VecDeque<Token>,
    pub(crate) position: usize,
}

impl ExpressionParser {
    /// Create new expression parser
    #[inline]
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            tokens: VecDeque::new(),
            position: 0,
        }
    }

    /// Parse complete JSONPath expression into a selector chain
    ///
    /// A trailing `.length()` is returned separately as a [`PathFunction`].
    pub fn parse(&mut self) -> JsonPathResult<(Vec<JsonSelector>, Option<PathFunction>)> {
        self.tokenize()?;

        if !matches!(self.tokens.pop_front(), Some(Token::Root)) {
            return Err(invalid_expression_error(
                &self.input,
                "JSONPath expressions must start with '$'",
                Some(0),
            ));
        }

        let mut selectors = vec![JsonSelector::Root];
        let mut function = None;

        while !matches!(self.peek_token(), Some(Token::EOF) | None) {
            if function.is_some() {
                return Err(invalid_expression_error(
                    &self.input,
                    "length() must be the final segment of the path",
                    Some(self.position),
                ));
            }
            if self.at_length_call() {
                self.tokens.drain(..4).for_each(drop);
                function = Some(PathFunction::Length);
                continue;
            }

            let mut selector_parser =
                SelectorParser::new(&mut self.tokens, &self.input, self.position);
            let selector = selector_parser.parse_selector()?;

            if matches!(selector, JsonSelector::RecursiveDescent) {
                // '..' has to be followed by a name, wildcard or bracket segment
                if matches!(self.peek_token(), Some(Token::EOF) | None) {
                    return Err(invalid_expression_error(
                        &self.input,
                        "descendant segment '..' must be followed by a selector",
                        Some(self.input.len()),
                    ));
                }
                selectors.push(selector);
                let mut selector_parser =
                    SelectorParser::new(&mut self.tokens, &self.input, self.position);
                selectors.push(selector_parser.parse_descendant_target()?);
                continue;
            }

            selectors.push(selector);
        }

        Ok((selectors, function))
    }

    /// Tokenize the input expression
    pub(crate) fn tokenize(&mut self) -> JsonPathResult<()> {
        use super::{characters, numbers, operators, strings};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ' ' | '\t' | '\n' | '\r' => {}
                '\'' | '"' => {
                    i = strings::parse_string_literal(self, &chars, i)?;
                }
                c if c.is_ascii_digit() || c == '-' => {
                    i = numbers::parse_number_literal(self, &chars, i)?;
                }
                '=' | '!' | '<' | '>' | '&' | '|' => {
                    i = operators::parse_operator(self, &chars, i)?;
                }
                _ => {
                    i = characters::parse_character_token(self, &chars, i)?;
                }
            }
            i += 1;
        }

        self.tokens.push_back(Token::EOF);
        Ok(())
    }

    /// Peek at next token without consuming
    #[inline]
    pub(crate) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// `.length()` at the head of the token queue
    fn at_length_call(&self) -> bool {
        matches!(
            (
                self.tokens.front(),
                self.tokens.get(1),
                self.tokens.get(2),
                self.tokens.get(3),
            ),
            (
                Some(Token::Dot),
                Some(Token::Identifier(name)),
                Some(Token::LeftParen),
                Some(Token::RightParen),
            ) if name == "length"
        )
    }
}
