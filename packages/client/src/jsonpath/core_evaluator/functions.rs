//! Trailing path functions

use serde_json::Value;

use crate::jsonpath::ast::PathFunction;

/// Apply a trailing function to one selected node
///
/// Returns `None` for nodes the function is not defined on.
pub(super) fn apply(function: PathFunction, value: &Value) -> Option<Value> {
    match function {
        PathFunction::Length => length(value).map(Value::from),
    }
}

/// Element count, member count, or Unicode scalar count
fn length(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(apply(PathFunction::Length, &json!([1, 2, 3])), Some(json!(3)));
        assert_eq!(apply(PathFunction::Length, &json!({"a": 1})), Some(json!(1)));
        assert_eq!(apply(PathFunction::Length, &json!("héllo")), Some(json!(5)));
        assert_eq!(apply(PathFunction::Length, &json!(7)), None);
        assert_eq!(apply(PathFunction::Length, &Value::Null), None);
    }
}
