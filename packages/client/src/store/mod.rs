//! Record store collaborator
//!
//! The document client talks to storage only through [`RecordStore`]: one
//! native read and one native write, each carrying a single
//! [`TerminalOperation`]. [`MemoryStore`] is an in-process implementation.

mod error;
mod key;
pub mod memory;

use serde_json::Value;

pub use self::{
    error::{StoreError, StoreResult},
    key::{RecordKey, UserKey},
    memory::MemoryStore,
};
use crate::{config::OperatePolicy, operations::TerminalOperation};

/// Result of a native read
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    /// Addressed value; `None` when the map key or field is absent
    pub value: Option<Value>,
    /// Record generation at the time of the read
    pub generation: u32,
}

/// Options for a native write
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteOptions {
    pub policy: Option<OperatePolicy>,
    /// Fail with `GenerationMismatch` unless the record is at this generation
    pub expected_generation: Option<u32>,
}

impl WriteOptions {
    #[must_use]
    pub fn new(policy: Option<OperatePolicy>) -> Self {
        Self {
            policy,
            expected_generation: None,
        }
    }

    #[must_use]
    pub fn expect_generation(mut self, generation: u32) -> Self {
        self.expected_generation = Some(generation);
        self
    }
}

/// A key-value record store with native nested-collection operations
pub trait RecordStore {
    /// Execute a read operation
    ///
    /// # Errors
    ///
    /// Fails with `TypeMismatch`, `InvalidAccessShape` or
    /// `OperationNotApplicable` when the addressed location has the wrong
    /// shape, and `RecordNotFound` when the record does not exist.
    fn fetch(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        policy: Option<&OperatePolicy>,
    ) -> StoreResult<Fetched>;

    /// Execute a write operation, returning the new record generation
    ///
    /// # Errors
    ///
    /// Fails with `OperationNotApplicable` or `InvalidAccessShape` when the
    /// target is missing or has the wrong shape, and `GenerationMismatch`
    /// when `options.expected_generation` is stale.
    fn apply(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        options: &WriteOptions,
    ) -> StoreResult<u32>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn fetch(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        policy: Option<&OperatePolicy>,
    ) -> StoreResult<Fetched> {
        (**self).fetch(key, operation, policy)
    }

    fn apply(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        options: &WriteOptions,
    ) -> StoreResult<u32> {
        (**self).apply(key, operation, options)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for std::sync::Arc<S> {
    fn fetch(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        policy: Option<&OperatePolicy>,
    ) -> StoreResult<Fetched> {
        (**self).fetch(key, operation, policy)
    }

    fn apply(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        options: &WriteOptions,
    ) -> StoreResult<u32> {
        (**self).apply(key, operation, options)
    }
}
