//! In-memory record store
//!
//! Records live in a [`DashMap`]; every write holds the record's shard lock
//! for its whole duration, so a single native call is atomic. Nothing spans
//! two calls.

mod collections;
mod stats;

use dashmap::DashMap;
use hashbrown::HashMap;
use serde_json::{Map, Value};

pub use self::stats::{StoreStats, StoreStatsSnapshot};
use self::collections::{container, container_mut, normalize_index, shape};
use super::{Fetched, RecordKey, RecordStore, StoreError, StoreResult, WriteOptions};
use crate::{config::OperatePolicy, operations::TerminalOperation};

#[derive(Debug, Default, Clone)]
struct StoredRecord {
    fields: HashMap<String, Value>,
    /// Zero only for a record that has never been written
    generation: u32,
}

/// Concurrent in-memory [`RecordStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<RecordKey, StoredRecord>,
    stats: StoreStats,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a whole field directly, returning the new generation
    pub fn insert(&self, key: RecordKey, field: impl Into<String>, value: Value) -> u32 {
        let mut record = self.records.entry(key).or_default();
        record.fields.insert(field.into(), value);
        bump(&mut record)
    }

    /// Copy of one field
    #[must_use]
    pub fn field(&self, key: &RecordKey, field: &str) -> Option<Value> {
        self.records
            .get(key)
            .and_then(|record| record.fields.get(field).cloned())
    }

    /// Copy of every field of a record
    #[must_use]
    pub fn record(&self, key: &RecordKey) -> Option<HashMap<String, Value>> {
        self.records.get(key).map(|record| record.fields.clone())
    }

    #[must_use]
    pub fn generation(&self, key: &RecordKey) -> Option<u32> {
        self.records.get(key).map(|record| record.generation)
    }

    /// Drop a record, returning whether it existed
    pub fn remove(&self, key: &RecordKey) -> bool {
        self.records.remove(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Native call counters
    #[must_use]
    pub fn stats(&self) -> StoreStatsSnapshot {
        self.stats.snapshot()
    }

    fn read(&self, key: &RecordKey, operation: &TerminalOperation) -> StoreResult<Fetched> {
        let record = self.records.get(key).ok_or(StoreError::RecordNotFound)?;
        let field = record.fields.get(operation.field());

        let value = match operation {
            TerminalOperation::ReadWholeField { .. } => field.cloned(),
            TerminalOperation::GetByKey { contexts, key, .. } => {
                match container(field, contexts.as_ref())? {
                    None => None,
                    Some(Value::Object(map)) => map.get(key).cloned(),
                    Some(other) => {
                        return Err(StoreError::TypeMismatch(format!(
                            "key {key:?} read from {}",
                            shape(other)
                        )));
                    }
                }
            }
            TerminalOperation::GetByIndex {
                contexts, index, ..
            } => match container(field, contexts.as_ref())? {
                None => {
                    return Err(StoreError::OperationNotApplicable(format!(
                        "field {:?} is missing",
                        operation.field()
                    )));
                }
                Some(Value::Array(items)) => {
                    let i = normalize_index(*index, items.len()).ok_or_else(|| {
                        StoreError::OperationNotApplicable(format!(
                            "index {index} out of bounds for list of {}",
                            items.len()
                        ))
                    })?;
                    items.get(i).cloned()
                }
                Some(other) => {
                    return Err(StoreError::InvalidAccessShape(format!(
                        "index {index} read from {}",
                        shape(other)
                    )));
                }
            },
            _ => {
                return Err(StoreError::OperationNotApplicable(format!(
                    "{} is not a read",
                    operation.name()
                )));
            }
        };

        Ok(Fetched {
            value,
            generation: record.generation,
        })
    }

    fn write(&self, key: &RecordKey, operation: &TerminalOperation, options: &WriteOptions) -> StoreResult<u32> {
        let creates = matches!(
            operation,
            TerminalOperation::WriteWholeField { .. } | TerminalOperation::SetByKey { contexts: None, .. }
        );
        let mut record = if creates {
            self.records.entry(key.clone()).or_default()
        } else {
            self.records.get_mut(key).ok_or(StoreError::RecordNotFound)?
        };

        if let Some(expected) = options.expected_generation
            && record.generation != expected
        {
            let actual = record.generation;
            drop(record);
            // Undo the placeholder created by `entry` above
            self.records.remove_if(key, |_, record| record.generation == 0);
            return Err(StoreError::GenerationMismatch { expected, actual });
        }

        apply_operation(&mut record.fields, operation)?;
        Ok(bump(&mut record))
    }
}

fn bump(record: &mut StoredRecord) -> u32 {
    record.generation = record.generation.wrapping_add(1).max(1);
    record.generation
}

fn apply_operation(fields: &mut HashMap<String, Value>, operation: &TerminalOperation) -> StoreResult<()> {
    match operation {
        TerminalOperation::WriteWholeField { field, value } => {
            fields.insert(field.clone(), value.clone());
        }
        TerminalOperation::SetByKey {
            field,
            contexts,
            key,
            value,
        } => {
            let target = match contexts {
                None => fields
                    .entry(field.clone())
                    .or_insert_with(|| Value::Object(Map::new())),
                Some(_) => container_mut(fields.get_mut(field), contexts.as_ref())?,
            };
            let Value::Object(map) = target else {
                return Err(StoreError::OperationNotApplicable(format!(
                    "cannot put key {key:?} into {}",
                    shape(target)
                )));
            };
            map.insert(key.clone(), value.clone());
        }
        TerminalOperation::SetByIndex {
            field,
            contexts,
            index,
            value,
        } => {
            let target = container_mut(fields.get_mut(field), contexts.as_ref())?;
            let Value::Array(items) = target else {
                return Err(StoreError::OperationNotApplicable(format!(
                    "cannot set index {index} in {}",
                    shape(target)
                )));
            };
            if usize::try_from(*index).is_ok_and(|i| i == items.len()) {
                items.push(value.clone());
            } else {
                let i = normalize_index(*index, items.len()).ok_or_else(|| {
                    StoreError::OperationNotApplicable(format!(
                        "index {index} out of bounds for list of {}",
                        items.len()
                    ))
                })?;
                items[i] = value.clone();
            }
        }
        TerminalOperation::RemoveByKey {
            field,
            contexts,
            key,
        } => {
            let target = container_mut(fields.get_mut(field), contexts.as_ref())?;
            let Value::Object(map) = target else {
                return Err(StoreError::InvalidAccessShape(format!(
                    "cannot remove key {key:?} from {}",
                    shape(target)
                )));
            };
            map.remove(key);
        }
        TerminalOperation::PopByIndex {
            field,
            contexts,
            index,
        } => {
            let target = container_mut(fields.get_mut(field), contexts.as_ref())?;
            let Value::Array(items) = target else {
                return Err(StoreError::InvalidAccessShape(format!(
                    "cannot pop index {index} from {}",
                    shape(target)
                )));
            };
            let i = normalize_index(*index, items.len()).ok_or_else(|| {
                StoreError::OperationNotApplicable(format!(
                    "index {index} out of bounds for list of {}",
                    items.len()
                ))
            })?;
            items.remove(i);
        }
        TerminalOperation::ReadWholeField { .. }
        | TerminalOperation::GetByKey { .. }
        | TerminalOperation::GetByIndex { .. } => {
            return Err(StoreError::OperationNotApplicable(format!(
                "{} is not a write",
                operation.name()
            )));
        }
    }
    Ok(())
}

impl RecordStore for MemoryStore {
    fn fetch(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        policy: Option<&OperatePolicy>,
    ) -> StoreResult<Fetched> {
        self.stats.record_fetch();
        let result = self.read(key, operation);
        match &result {
            Ok(fetched) => log::trace!(
                target: "docpath::store",
                "fetch {operation} on {key} (policy options: {}): found={} generation={}",
                policy.map_or(0, OperatePolicy::len),
                fetched.value.is_some(),
                fetched.generation
            ),
            Err(error) => {
                self.stats.record_failure();
                log::trace!(target: "docpath::store", "fetch {operation} on {key} failed: {error}");
            }
        }
        result
    }

    fn apply(
        &self,
        key: &RecordKey,
        operation: &TerminalOperation,
        options: &WriteOptions,
    ) -> StoreResult<u32> {
        self.stats.record_apply();
        let result = self.write(key, operation, options);
        match &result {
            Ok(generation) => log::trace!(
                target: "docpath::store",
                "apply {operation} on {key}: generation={generation}"
            ),
            Err(error) => {
                self.stats.record_failure();
                log::trace!(target: "docpath::store", "apply {operation} on {key} failed: {error}");
            }
        }
        result
    }
}
