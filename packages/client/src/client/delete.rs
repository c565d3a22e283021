//! Deletes

use super::core::DocumentClient;
use crate::{
    config::{Policy, policy::to_operate_policy},
    error::{DocumentError, DocumentResult, conversions::Phase},
    jsonpath::PathEvaluator,
    operations::{build_delete_operation, build_get_operation, build_put_operation},
    store::{RecordKey, RecordStore, WriteOptions},
};

impl<S: RecordStore, E: PathEvaluator> DocumentClient<S, E> {
    /// Delete every location a path addresses
    ///
    /// A simple path is a single native remove. Deleting a map key that is
    /// already absent succeeds; deleting the root leaves an empty map. An
    /// advanced path fetches the sub-document at its native prefix, removes
    /// every match in memory and writes the sub-document back.
    ///
    /// # Errors
    ///
    /// `ObjectNotFound` for a missing container, out-of-range index or
    /// mismatched shape; `WriteNotApplicable` when an advanced write-back
    /// fails; `Conflict` when generation checking detects a concurrent writer.
    pub fn delete(&self, key: &RecordKey, field: &str, path: &str, policy: Option<&Policy>) -> DocumentResult<()> {
        let result = self.delete_inner(key, field, path, policy);
        self.finish("delete", path, result)
    }

    fn delete_inner(&self, key: &RecordKey, field: &str, path: &str, policy: Option<&Policy>) -> DocumentResult<()> {
        let plan = self.plan(path)?;
        let policy = to_operate_policy(self.config.write_policy(policy));

        let Some(advanced) = &plan.advanced else {
            let operation = build_delete_operation(field, plan.contexts, &plan.last);
            return self.send_smallest_document(key, &operation, &WriteOptions::new(policy), path, Phase::Delete);
        };

        let operation = build_get_operation(field, plan.contexts.clone(), &plan.last);
        let mut document = self.get_smallest_document(key, &operation, policy.as_ref(), path)?;
        let compiled = self.compile_advanced(advanced, path)?;
        let removed = self
            .evaluator
            .remove_all(&compiled, &mut document.value)
            .map_err(|error| DocumentError::from_evaluation(path, &error))?;
        tracing::debug!(target: "docpath::client", path = %path, removed, "removed matches from sub-document");

        let options = self.write_back_options(policy, document.generation);
        let operation = build_put_operation(field, plan.contexts, &plan.last, document.value);
        self.send_smallest_document(key, &operation, &options, path, Phase::WriteBack)
    }
}
