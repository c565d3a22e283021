//! Per-test fixtures: a fresh in-memory store holding one document

#![allow(dead_code)]

use docpath_client::prelude::*;
use serde_json::Value;

pub const FIELD: &str = "doc";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn record_key() -> RecordKey {
    RecordKey::new("test", "documents", "doc-key")
}

/// Client over a store that holds `document` in [`FIELD`] of [`record_key`]
pub fn client_with(document: Value) -> (DocumentClient<MemoryStore>, RecordKey) {
    init_logging();
    let store = MemoryStore::new();
    let key = record_key();
    store.insert(key.clone(), FIELD, document);
    (DocumentClient::new(store), key)
}

/// Current content of the fixture field
pub fn stored(client: &DocumentClient<MemoryStore>, key: &RecordKey) -> Option<Value> {
    client.store().field(key, FIELD)
}

/// Sort values by their JSON text so match sets compare without order
pub fn sorted(mut values: Vec<Value>) -> Vec<Value> {
    values.sort_by_key(|value| value.to_string());
    values
}

/// Elements of an array result, sorted
pub fn sorted_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => sorted(items),
        other => panic!("expected an array, got {other}"),
    }
}
