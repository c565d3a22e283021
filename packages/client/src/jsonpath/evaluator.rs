//! Pluggable evaluator contract
//!
//! The document client only needs four capabilities from a JSONPath engine:
//! compile an expression, find the values it matches, locate the nodes it
//! matches, and mutate a document at those nodes. Any engine providing
//! [`PathEvaluator::compile`], [`PathEvaluator::find`] and
//! [`PathEvaluator::locate`] gets the mutating operations for free.

use std::fmt;

use serde_json::{Map, Value};

use super::{
    error::{JsonPathError, JsonPathResult},
    normalized_paths::NormalizedPath,
};

/// A JSONPath engine usable by the document client
pub trait PathEvaluator {
    /// Compiled form of an expression
    type Compiled: fmt::Debug;

    /// Parse an expression, rejecting syntax errors
    fn compile(&self, expression: &str) -> JsonPathResult<Self::Compiled>;

    /// Values matched by the expression; callers must not rely on their order
    fn find(&self, expression: &Self::Compiled, document: &Value) -> Vec<Value>;

    /// Locations of the nodes matched by the expression
    ///
    /// Fails for expressions that produce computed values rather than nodes
    /// (for example a trailing `length()`).
    fn locate(
        &self,
        expression: &Self::Compiled,
        document: &Value,
    ) -> JsonPathResult<Vec<NormalizedPath>>;

    /// Replace every match with `value`, returning the number of replacements
    fn update(
        &self,
        expression: &Self::Compiled,
        document: &mut Value,
        value: &Value,
    ) -> JsonPathResult<usize> {
        let mut locations = self.locate(expression, document)?;
        // Shallow first: a replaced ancestor invalidates its descendants' locations
        locations.sort();
        let mut updated = 0;
        for location in &locations {
            if let Some(node) = location.resolve_mut(document) {
                *node = value.clone();
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Delete every match, returning the number of removed nodes
    ///
    /// Removing the root leaves an empty object behind.
    fn remove_all(&self, expression: &Self::Compiled, document: &mut Value) -> JsonPathResult<usize> {
        let mut locations = self.locate(expression, document)?;
        // Deepest and highest index first so earlier removals never shift later ones
        locations.sort_by(|a, b| b.cmp(a));
        locations.dedup();
        let mut removed = 0;
        for location in &locations {
            if location.is_root() {
                *document = Value::Object(Map::new());
                removed += 1;
            } else if location.remove(document).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Run `apply` on every matched node, returning the number visited
    fn for_each_match_mut(
        &self,
        expression: &Self::Compiled,
        document: &mut Value,
        apply: &mut dyn FnMut(&mut Value) -> JsonPathResult<()>,
    ) -> JsonPathResult<usize> {
        let mut locations = self.locate(expression, document)?;
        locations.sort();
        locations.dedup();
        let mut visited = 0;
        for location in &locations {
            let node = location.resolve_mut(document).ok_or_else(|| {
                JsonPathError::processing_error(format!("location {location} vanished"))
            })?;
            apply(node)?;
            visited += 1;
        }
        Ok(visited)
    }
}
