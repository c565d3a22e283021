//! Filter predicate evaluation
//!
//! Comparisons distinguish a missing operand from JSON `null`: two missing
//! operands are equal, a missing operand equals nothing else, and ordering
//! comparisons involving a missing operand are false.

use std::{borrow::Cow, cmp::Ordering};

use serde_json::{Number, Value};

use super::{engine::CoreJsonPathEvaluator, selectors::normalize_index};
use crate::jsonpath::ast::{ComparisonOp, FilterExpression, FilterValue, JsonSelector, LogicalOp};

impl CoreJsonPathEvaluator {
    /// Evaluate a filter predicate against the current node
    pub(super) fn filter_matches(&self, expression: &FilterExpression, current: &Value) -> bool {
        match expression {
            FilterExpression::Current => true,
            FilterExpression::Property { path } => resolve_relative(path, current).is_some(),
            FilterExpression::Literal { value } => match value {
                FilterValue::Boolean(b) => *b,
                FilterValue::Null => false,
                _ => true,
            },
            FilterExpression::Comparison {
                left,
                operator,
                right,
            } => {
                let left = operand(left, current);
                let right = operand(right, current);
                compare(left.as_deref(), *operator, right.as_deref())
            }
            FilterExpression::Logical {
                left,
                operator,
                right,
            } => match operator {
                LogicalOp::And => {
                    self.filter_matches(left, current) && self.filter_matches(right, current)
                }
                LogicalOp::Or => {
                    self.filter_matches(left, current) || self.filter_matches(right, current)
                }
            },
        }
    }
}

/// Value of a comparison operand; `None` when the operand is missing
fn operand<'v>(expression: &FilterExpression, current: &'v Value) -> Option<Cow<'v, Value>> {
    match expression {
        FilterExpression::Current => Some(Cow::Borrowed(current)),
        FilterExpression::Property { path } => resolve_relative(path, current).map(Cow::Borrowed),
        FilterExpression::Literal { value } => Some(Cow::Owned(literal_value(value))),
        // Nested predicates used as operands evaluate to nothing comparable
        FilterExpression::Comparison { .. } | FilterExpression::Logical { .. } => None,
    }
}

fn resolve_relative<'v>(path: &[JsonSelector], current: &'v Value) -> Option<&'v Value> {
    path.iter().try_fold(current, |node, selector| match (selector, node) {
        (JsonSelector::Child { name }, Value::Object(map)) => map.get(name),
        (JsonSelector::Index { index }, Value::Array(items)) => {
            normalize_index(*index, items.len()).and_then(|i| items.get(i))
        }
        _ => None,
    })
}

fn literal_value(value: &FilterValue) -> Value {
    match value {
        FilterValue::String(s) => Value::String(s.clone()),
        FilterValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        FilterValue::Integer(i) => Value::Number((*i).into()),
        FilterValue::Boolean(b) => Value::Bool(*b),
        FilterValue::Null => Value::Null,
    }
}

fn compare(left: Option<&Value>, operator: ComparisonOp, right: Option<&Value>) -> bool {
    match operator {
        ComparisonOp::Equal => equals(left, right),
        ComparisonOp::NotEqual => !equals(left, right),
        ComparisonOp::Less => ordering(left, right) == Some(Ordering::Less),
        ComparisonOp::Greater => ordering(left, right) == Some(Ordering::Greater),
        ComparisonOp::LessEq => {
            equals(left, right) || ordering(left, right) == Some(Ordering::Less)
        }
        ComparisonOp::GreaterEq => {
            equals(left, right) || ordering(left, right) == Some(Ordering::Greater)
        }
    }
}

fn equals(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(Value::Number(a)), Some(Value::Number(b))) => numbers_cmp(a, b) == Some(Ordering::Equal),
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Ordering is only defined between two numbers or two strings
fn ordering(left: Option<&Value>, right: Option<&Value>) -> Option<Ordering> {
    match (left?, right?) {
        (Value::Number(a), Value::Number(b)) => numbers_cmp(a, b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn numbers_cmp(a: &Number, b: &Number) -> Option<Ordering> {
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => Some(a.cmp(&b)),
        _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_operands() {
        let one = json!(1);
        assert!(equals(None, None));
        assert!(!equals(None, Some(&Value::Null)));
        assert!(!compare(None, ComparisonOp::Less, Some(&one)));
        assert!(compare(None, ComparisonOp::NotEqual, Some(&one)));
    }

    #[test]
    fn test_mixed_numbers() {
        let int = json!(2);
        let float = json!(2.0);
        let bigger = json!(2.5);
        assert!(equals(Some(&int), Some(&float)));
        assert!(compare(Some(&int), ComparisonOp::Less, Some(&bigger)));
        assert!(compare(Some(&bigger), ComparisonOp::GreaterEq, Some(&int)));
    }

    #[test]
    fn test_mismatched_types_do_not_order() {
        let s = json!("2");
        let n = json!(2);
        assert!(!compare(Some(&s), ComparisonOp::Less, Some(&n)));
        assert!(!compare(Some(&s), ComparisonOp::GreaterEq, Some(&n)));
        assert!(compare(Some(&s), ComparisonOp::NotEqual, Some(&n)));
    }
}
