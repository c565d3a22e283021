//! Core document client

use std::{sync::Arc, time::Instant};

use super::stats::{ClientStats, ClientStatsSnapshot};
use crate::{
    config::{ConfigResult, DocumentConfig, Validator},
    error::DocumentResult,
    jsonpath::{CoreJsonPathEvaluator, PathEvaluator},
    path::PathPlan,
    store::RecordStore,
};

/// JSONPath access to documents stored as record fields
#[derive(Debug)]
pub struct DocumentClient<S, E = CoreJsonPathEvaluator> {
    pub(super) store: S,
    pub(super) evaluator: E,
    pub(super) config: DocumentConfig,
    pub(super) stats: Arc<ClientStats>,
    created_at: Instant,
}

impl<S: RecordStore> DocumentClient<S> {
    /// Create a client with the default configuration and evaluator
    #[inline]
    pub fn new(store: S) -> Self {
        Self::from_parts(store, CoreJsonPathEvaluator::new(), DocumentConfig::default())
    }

    /// Create a client with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error.
    pub fn with_config(store: S, config: DocumentConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(store, CoreJsonPathEvaluator::new(), config))
    }
}

impl<S: RecordStore, E: PathEvaluator> DocumentClient<S, E> {
    fn from_parts(store: S, evaluator: E, config: DocumentConfig) -> Self {
        Self {
            store,
            evaluator,
            config,
            stats: Arc::new(ClientStats::default()),
            created_at: Instant::now(),
        }
    }

    /// Swap the path evaluator, keeping store, configuration and statistics
    pub fn with_evaluator<F: PathEvaluator>(self, evaluator: F) -> DocumentClient<S, F> {
        DocumentClient {
            store: self.store,
            evaluator,
            config: self.config,
            stats: self.stats,
            created_at: self.created_at,
        }
    }

    /// Compile `path` without touching the store
    ///
    /// # Errors
    ///
    /// `MissingRoot` or `PathSyntax` for malformed paths.
    pub fn plan(&self, path: &str) -> DocumentResult<PathPlan> {
        PathPlan::compile(&self.evaluator, path)
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    #[inline]
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Get client statistics for monitoring
    #[inline]
    pub fn stats(&self) -> ClientStatsSnapshot {
        self.stats.snapshot()
    }

    /// Get client uptime
    #[inline]
    pub fn uptime(&self) -> std::time::Duration {
        self.created_at.elapsed()
    }

    /// Count the operation and record its outcome
    pub(super) fn finish<T>(
        &self,
        operation: &'static str,
        path: &str,
        result: DocumentResult<T>,
    ) -> DocumentResult<T> {
        self.stats.record_operation();
        match &result {
            Ok(_) => tracing::debug!(target: "docpath::client", operation, path = %path, "operation complete"),
            Err(error) => {
                self.stats.record_failure();
                tracing::debug!(
                    target: "docpath::client",
                    operation,
                    path = %path,
                    kind = %error.kind(),
                    "operation failed"
                );
            }
        }
        result
    }
}
