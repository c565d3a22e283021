//! Native round trips and evaluator calls shared by every operation

use serde_json::Value;

use super::core::DocumentClient;
use crate::{
    config::OperatePolicy,
    error::{DocumentError, DocumentResult, conversions::Phase},
    jsonpath::PathEvaluator,
    operations::TerminalOperation,
    store::{RecordKey, RecordStore, WriteOptions},
};

/// A fetched sub-document and the record generation it was read at
pub(super) struct SubDocument {
    pub value: Value,
    pub generation: u32,
}

impl<S: RecordStore, E: PathEvaluator> DocumentClient<S, E> {
    /// Fetch the value addressed by a native read
    ///
    /// An absent value (missing map key or field) is `ObjectNotFound`.
    pub(super) fn get_smallest_document(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        policy: Option<&OperatePolicy>,
        path: &str,
    ) -> DocumentResult<SubDocument> {
        self.stats.record_fetch();
        tracing::trace!(target: "docpath::client", key = %key, operation = %operation, "native fetch");

        let fetched = self
            .store
            .fetch(key, operation, policy)
            .map_err(|error| DocumentError::from_store(path, Phase::Fetch, &error))?;
        let value = fetched.value.ok_or_else(|| DocumentError::ObjectNotFound {
            path: path.to_string(),
        })?;
        Ok(SubDocument {
            value,
            generation: fetched.generation,
        })
    }

    /// Execute a native write
    pub(super) fn send_smallest_document(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        options: &WriteOptions,
        path: &str,
        phase: Phase,
    ) -> DocumentResult<()> {
        self.stats.record_write();
        tracing::trace!(
            target: "docpath::client",
            key = %key,
            operation = %operation,
            expected_generation = ?options.expected_generation,
            "native write"
        );

        self.store
            .apply(key, operation, options)
            .map(|_| ())
            .map_err(|error| DocumentError::from_store(path, phase, &error))
    }

    /// Compile an advanced suffix
    ///
    /// The full path already passed validation, so a failure here means the
    /// re-rooted suffix is not a path on its own.
    pub(super) fn compile_advanced(&self, advanced: &str, path: &str) -> DocumentResult<E::Compiled> {
        self.stats.record_evaluation();
        self.evaluator.compile(advanced).map_err(|error| {
            tracing::debug!(
                target: "docpath::client",
                advanced = %advanced,
                error = %error,
                "advanced suffix does not compile"
            );
            DocumentError::PathSyntax {
                path: path.to_string(),
            }
        })
    }

    /// Write options for a write-back of a sub-document read at `generation`
    pub(super) fn write_back_options(&self, policy: Option<OperatePolicy>, generation: u32) -> WriteOptions {
        let options = WriteOptions::new(policy);
        if self.config.generation_check {
            options.expect_generation(generation)
        } else {
            options
        }
    }
}
