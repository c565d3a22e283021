//! Translation of store and evaluator failures
//!
//! Reads and native deletes that fail on document shape become
//! `ObjectNotFound`; write-backs that fail on shape become
//! `WriteNotApplicable`.

use super::types::DocumentError;
use crate::{jsonpath::JsonPathError, store::StoreError};

/// Which half of an operation a store failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fetch,
    WriteBack,
    Delete,
}

impl DocumentError {
    /// Translate a store failure raised while executing `phase` for `path`
    #[must_use]
    pub fn from_store(path: &str, phase: Phase, error: &StoreError) -> Self {
        let path = path.to_string();
        let translated = match error {
            StoreError::GenerationMismatch { .. } => DocumentError::Conflict { path },
            StoreError::Unavailable(message) => DocumentError::Store {
                path,
                message: message.clone(),
            },
            StoreError::TypeMismatch(_)
            | StoreError::InvalidAccessShape(_)
            | StoreError::OperationNotApplicable(_)
            | StoreError::RecordNotFound => match phase {
                Phase::Fetch | Phase::Delete => DocumentError::ObjectNotFound { path },
                Phase::WriteBack => DocumentError::WriteNotApplicable { path },
            },
        };

        tracing::warn!(
            target: "docpath::client",
            phase = ?phase,
            store_error = %error,
            kind = %translated.kind(),
            path = %translated.path(),
            "translated store failure"
        );
        translated
    }

    /// Translate an evaluator failure while mutating a fetched sub-document
    #[must_use]
    pub fn from_evaluation(path: &str, error: &JsonPathError) -> Self {
        tracing::debug!(
            target: "docpath::client",
            path = %path,
            error = %error,
            "evaluator could not apply advanced path"
        );
        DocumentError::WriteNotApplicable {
            path: path.to_string(),
        }
    }
}
