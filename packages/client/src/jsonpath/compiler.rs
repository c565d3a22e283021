//! Entry point turning expression text into a [`JsonPathExpression`]

use std::str::FromStr;

use crate::jsonpath::{
    error::{JsonPathError, JsonPathResult, invalid_expression_error},
    expression::JsonPathExpression,
    tokenizer::ExpressionParser,
};

/// Stateless `JSONPath` compiler
pub struct JsonPathParser;

impl JsonPathParser {
    /// Compile an expression into a selector chain
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPath` error for anything the grammar rejects,
    /// including an empty expression or one not rooted at `$`.
    pub fn compile(expression: &str) -> JsonPathResult<JsonPathExpression> {
        let reject = |reason: &str| Err(invalid_expression_error(expression, reason, Some(0)));
        match expression.chars().next() {
            Some('$') => {}
            None => return reject("expression is empty"),
            Some('@') => return reject("'@' names the current node and is only valid inside a filter"),
            Some(_) => return reject("expression must start at the root '$'"),
        }

        let (selectors, function) = ExpressionParser::new(expression).parse()?;
        tracing::trace!(
            target: "docpath::jsonpath",
            expression = %expression,
            selectors = selectors.len(),
            function = ?function,
            "compiled JSONPath expression"
        );
        Ok(JsonPathExpression::new(selectors, function, expression.to_string()))
    }
}

impl FromStr for JsonPathExpression {
    type Err = JsonPathError;

    fn from_str(expression: &str) -> JsonPathResult<Self> {
        JsonPathParser::compile(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonpath::ast::{JsonSelector, PathFunction};

    #[test]
    fn test_compile_selector_chain() {
        let expression: JsonPathExpression = "$.a[0]".parse().expect("valid expression");
        assert_eq!(
            expression.selectors(),
            [
                JsonSelector::Root,
                JsonSelector::Child { name: "a".into() },
                JsonSelector::Index { index: 0 }
            ]
        );
        assert_eq!(expression.function(), None);
    }

    #[test]
    fn test_compile_trailing_length() {
        let expression = JsonPathParser::compile("$.a.length()").expect("valid expression");
        assert_eq!(expression.selectors().len(), 2);
        assert_eq!(expression.function(), Some(PathFunction::Length));
    }

    #[test]
    fn test_compile_rejects_unrooted() {
        for expression in ["", "@.a", "a", "$...a"] {
            let error = JsonPathParser::compile(expression).expect_err(expression);
            assert!(error.is_syntax(), "{expression}");
        }
    }
}
