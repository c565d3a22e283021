//! Building contexts and terminal operations from path steps

use serde_json::{Map, Value};

use super::{CollectionContext, ContextChain, TerminalOperation};
use crate::path::Step;

/// Map every step to a descent context; the root contributes nothing
///
/// Returns `None` rather than an empty chain when no context remains.
#[must_use]
pub fn build_contexts(steps: &[Step]) -> Option<ContextChain> {
    ContextChain::new(
        steps
            .iter()
            .filter_map(|step| match step {
                Step::Root => None,
                Step::Key(key) => Some(CollectionContext::MapKey(key.clone())),
                Step::Index(index) => Some(CollectionContext::ListIndex(*index)),
            })
            .collect(),
    )
}

#[must_use]
pub fn build_get_operation(field: &str, contexts: Option<ContextChain>, last: &Step) -> TerminalOperation {
    let field = field.to_string();
    match last {
        Step::Root => TerminalOperation::ReadWholeField { field },
        Step::Key(key) => TerminalOperation::GetByKey {
            field,
            contexts,
            key: key.clone(),
        },
        Step::Index(index) => TerminalOperation::GetByIndex {
            field,
            contexts,
            index: *index,
        },
    }
}

#[must_use]
pub fn build_put_operation(
    field: &str,
    contexts: Option<ContextChain>,
    last: &Step,
    value: Value,
) -> TerminalOperation {
    let field = field.to_string();
    match last {
        Step::Root => TerminalOperation::WriteWholeField { field, value },
        Step::Key(key) => TerminalOperation::SetByKey {
            field,
            contexts,
            key: key.clone(),
            value,
        },
        Step::Index(index) => TerminalOperation::SetByIndex {
            field,
            contexts,
            index: *index,
            value,
        },
    }
}

/// Deleting the root resets the field to an empty map
#[must_use]
pub fn build_delete_operation(field: &str, contexts: Option<ContextChain>, last: &Step) -> TerminalOperation {
    let field = field.to_string();
    match last {
        Step::Root => TerminalOperation::WriteWholeField {
            field,
            value: Value::Object(Map::new()),
        },
        Step::Key(key) => TerminalOperation::RemoveByKey {
            field,
            contexts,
            key: key.clone(),
        },
        Step::Index(index) => TerminalOperation::PopByIndex {
            field,
            contexts,
            index: *index,
        },
    }
}
