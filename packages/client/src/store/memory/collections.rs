//! Descent through nested collections

use serde_json::Value;

use crate::{
    operations::{CollectionContext, ContextChain},
    store::{StoreError, StoreResult},
};

/// Short name of a value's shape for error messages
pub(super) fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Resolve a possibly negative list index
pub(super) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

fn not_applicable(context: &CollectionContext) -> StoreError {
    StoreError::OperationNotApplicable(format!("no collection at {context}"))
}

/// Container addressed by `contexts` inside a field
///
/// Without contexts the field itself is the container, and may be absent.
/// With contexts, a missing field or any unresolvable descent is an error.
pub(super) fn container<'v>(
    field: Option<&'v Value>,
    contexts: Option<&ContextChain>,
) -> StoreResult<Option<&'v Value>> {
    let Some(contexts) = contexts else {
        return Ok(field);
    };
    let mut node = field
        .ok_or_else(|| StoreError::OperationNotApplicable("field is missing".to_string()))?;
    for context in contexts {
        node = match (context, node) {
            (CollectionContext::MapKey(key), Value::Object(map)) => map.get(key),
            (CollectionContext::ListIndex(index), Value::Array(items)) => {
                normalize_index(*index, items.len()).and_then(|i| items.get(i))
            }
            _ => None,
        }
        .ok_or_else(|| not_applicable(context))?;
    }
    Ok(Some(node))
}

/// Mutable container addressed by `contexts`; the field must exist
pub(super) fn container_mut<'v>(
    field: Option<&'v mut Value>,
    contexts: Option<&ContextChain>,
) -> StoreResult<&'v mut Value> {
    let mut node = field
        .ok_or_else(|| StoreError::OperationNotApplicable("field is missing".to_string()))?;
    for context in contexts.into_iter().flatten() {
        node = match (context, node) {
            (CollectionContext::MapKey(key), Value::Object(map)) => map.get_mut(key),
            (CollectionContext::ListIndex(index), Value::Array(items)) => {
                let len = items.len();
                normalize_index(*index, len).and_then(|i| items.get_mut(i))
            }
            _ => None,
        }
        .ok_or_else(|| not_applicable(context))?;
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn chain(contexts: Vec<CollectionContext>) -> Option<ContextChain> {
        ContextChain::new(contexts)
    }

    #[test]
    fn test_container_descends_maps_and_lists() {
        let doc = json!({"a": [{"b": 1}]});
        let contexts = chain(vec![
            CollectionContext::MapKey("a".into()),
            CollectionContext::ListIndex(-1),
        ]);
        let found = container(Some(&doc), contexts.as_ref()).expect("resolves");
        assert_eq!(found, Some(&json!({"b": 1})));
    }

    #[test]
    fn test_container_rejects_missing_descent() {
        let doc = json!({"a": 1});
        let contexts = chain(vec![CollectionContext::MapKey("missing".into())]);
        assert!(matches!(
            container(Some(&doc), contexts.as_ref()),
            Err(StoreError::OperationNotApplicable(_))
        ));
        assert!(matches!(
            container(None, contexts.as_ref()),
            Err(StoreError::OperationNotApplicable(_))
        ));
        assert_eq!(container(None, None), Ok(None));
    }

    #[test]
    fn test_container_mut_descends() {
        let mut doc = json!({"a": [[1, 2]]});
        let contexts = chain(vec![
            CollectionContext::MapKey("a".into()),
            CollectionContext::ListIndex(0),
        ]);
        let target = container_mut(Some(&mut doc), contexts.as_ref()).expect("resolves");
        *target = json!([]);
        assert_eq!(doc, json!({"a": [[]]}));
    }
}
