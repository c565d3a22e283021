//! Evaluator entry point and [`PathEvaluator`] implementation

use serde_json::Value;

use crate::jsonpath::{
    ast::JsonSelector,
    compiler::JsonPathParser,
    error::{JsonPathError, JsonPathResult},
    evaluator::PathEvaluator,
    expression::JsonPathExpression,
    normalized_paths::NormalizedPath,
};

/// A node reached during evaluation together with its location
pub(super) type Located<'v> = (NormalizedPath, &'v Value);

/// Stateless JSONPath evaluator over `serde_json` documents
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreJsonPathEvaluator;

impl CoreJsonPathEvaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run the selector chain, returning every matched node with its location
    pub(super) fn select<'v>(
        &self,
        selectors: &[JsonSelector],
        document: &'v Value,
    ) -> Vec<Located<'v>> {
        let mut current: Vec<Located<'v>> = vec![(NormalizedPath::root(), document)];
        for selector in selectors {
            let mut next = Vec::new();
            for (path, value) in &current {
                self.apply_selector(path, value, selector, &mut next);
            }
            current = next;
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

impl PathEvaluator for CoreJsonPathEvaluator {
    type Compiled = JsonPathExpression;

    fn compile(&self, expression: &str) -> JsonPathResult<JsonPathExpression> {
        JsonPathParser::compile(expression)
    }

    fn find(&self, expression: &JsonPathExpression, document: &Value) -> Vec<Value> {
        let located = self.select(expression.selectors(), document);
        let values: Vec<Value> = match expression.function() {
            Some(function) => located
                .into_iter()
                .filter_map(|(_, value)| super::functions::apply(function, value))
                .collect(),
            None => located.into_iter().map(|(_, value)| value.clone()).collect(),
        };

        tracing::trace!(
            target: "docpath::jsonpath",
            expression = %expression,
            matches = values.len(),
            "evaluated JSONPath expression"
        );
        values
    }

    fn locate(
        &self,
        expression: &JsonPathExpression,
        document: &Value,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        if expression.function().is_some() {
            return Err(JsonPathError::unsupported(format!(
                "'{expression}' computes a value and does not address document nodes"
            )));
        }
        Ok(self
            .select(expression.selectors(), document)
            .into_iter()
            .map(|(path, _)| path)
            .collect())
    }
}
