//! Writes: put and append

use serde_json::Value;

use super::core::DocumentClient;
use crate::{
    config::{Policy, policy::to_operate_policy},
    error::{DocumentError, DocumentResult, conversions::Phase},
    jsonpath::{JsonPathError, PathEvaluator},
    operations::{build_get_operation, build_put_operation},
    store::{RecordKey, RecordStore, WriteOptions},
};

impl<S: RecordStore, E: PathEvaluator> DocumentClient<S, E> {
    /// Store `value` at every location a path addresses
    ///
    /// A simple path is a single native write. An advanced path fetches the
    /// sub-document at its native prefix, replaces every match in memory and
    /// writes the sub-document back.
    ///
    /// # Errors
    ///
    /// `ObjectNotFound` when the prefix cannot be fetched,
    /// `WriteNotApplicable` when the write-back target is missing or has the
    /// wrong shape, `Conflict` when generation checking detects a concurrent
    /// writer.
    pub fn put(
        &self,
        key: &RecordKey,
        field: &str,
        path: &str,
        value: Value,
        policy: Option<&Policy>,
    ) -> DocumentResult<()> {
        let result = self.put_inner(key, field, path, value, policy);
        self.finish("put", path, result)
    }

    fn put_inner(
        &self,
        key: &RecordKey,
        field: &str,
        path: &str,
        value: Value,
        policy: Option<&Policy>,
    ) -> DocumentResult<()> {
        let plan = self.plan(path)?;
        let policy = to_operate_policy(self.config.write_policy(policy));

        let (document, options) = match &plan.advanced {
            None => (value, WriteOptions::new(policy)),
            Some(advanced) => {
                let operation = build_get_operation(field, plan.contexts.clone(), &plan.last);
                let mut document = self.get_smallest_document(key, &operation, policy.as_ref(), path)?;
                let compiled = self.compile_advanced(advanced, path)?;
                let updated = self
                    .evaluator
                    .update(&compiled, &mut document.value, &value)
                    .map_err(|error| DocumentError::from_evaluation(path, &error))?;
                tracing::debug!(target: "docpath::client", path = %path, updated, "updated sub-document");
                let options = self.write_back_options(policy, document.generation);
                (document.value, options)
            }
        };

        let operation = build_put_operation(field, plan.contexts, &plan.last, document);
        self.send_smallest_document(key, &operation, &options, path, Phase::WriteBack)
    }

    /// Append `value` to the list(s) a path addresses
    ///
    /// Always a read-modify-write: the sub-document at the native prefix is
    /// fetched, extended in memory and written back.
    ///
    /// # Errors
    ///
    /// `ObjectNotFound` when the prefix cannot be fetched,
    /// `WriteNotApplicable` when a target is not a list or the write-back
    /// fails, `Conflict` when generation checking detects a concurrent writer.
    pub fn append(
        &self,
        key: &RecordKey,
        field: &str,
        path: &str,
        value: Value,
        policy: Option<&Policy>,
    ) -> DocumentResult<()> {
        let result = self.append_inner(key, field, path, value, policy);
        self.finish("append", path, result)
    }

    fn append_inner(
        &self,
        key: &RecordKey,
        field: &str,
        path: &str,
        value: Value,
        policy: Option<&Policy>,
    ) -> DocumentResult<()> {
        let plan = self.plan(path)?;
        let policy = to_operate_policy(self.config.write_policy(policy));

        let operation = build_get_operation(field, plan.contexts.clone(), &plan.last);
        let mut document = self.get_smallest_document(key, &operation, policy.as_ref(), path)?;

        match &plan.advanced {
            None => match &mut document.value {
                Value::Array(items) => items.push(value),
                _ => {
                    return Err(DocumentError::WriteNotApplicable {
                        path: path.to_string(),
                    });
                }
            },
            Some(advanced) => {
                let compiled = self.compile_advanced(advanced, path)?;
                let appended = self
                    .evaluator
                    .for_each_match_mut(&compiled, &mut document.value, &mut |node: &mut Value| match node {
                        Value::Array(items) => {
                            items.push(value.clone());
                            Ok(())
                        }
                        _ => Err(JsonPathError::unsupported("append target is not a list")),
                    })
                    .map_err(|error| DocumentError::from_evaluation(path, &error))?;
                tracing::debug!(target: "docpath::client", path = %path, appended, "appended to matched lists");
            }
        }

        let options = self.write_back_options(policy, document.generation);
        let operation = build_put_operation(field, plan.contexts, &plan.last, document.value);
        self.send_smallest_document(key, &operation, &options, path, Phase::WriteBack)
    }
}
