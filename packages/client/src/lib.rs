//! # Docpath Client
//!
//! JSONPath access to JSON documents stored as fields of key-value records,
//! with as much of each path as possible resolved by the store's native
//! nested-collection operations.
//!
//! ## How a path is executed
//!
//! - The path is validated (`$` root, grammar accepted by the evaluator).
//! - It is divided at the first advanced operator (`[*]`, `..`, `[?`,
//!   slices, index unions, `length()`) into a simple prefix and an advanced
//!   suffix re-rooted at `$`.
//! - The prefix becomes a chain of descent contexts plus one terminal native
//!   operation, so the store returns only the smallest sub-document needed.
//! - The suffix, if any, runs in memory against that sub-document, which is
//!   written back for mutations.
//!
//! ## Usage
//!
//! ```rust
//! use docpath_client::prelude::*;
//! use serde_json::json;
//!
//! let store = MemoryStore::new();
//! let key = RecordKey::new("test", "docs", "k1");
//! store.insert(key.clone(), "doc", json!({"a": [1, 2, 3]}));
//!
//! let client = DocumentClient::new(store);
//! client.put(&key, "doc", "$.a[1]", json!(9), None).unwrap();
//! client.append(&key, "doc", "$.a", json!(7), None).unwrap();
//! client.delete(&key, "doc", "$.a[0]", None).unwrap();
//! assert_eq!(client.get(&key, "doc", "$.a", None).unwrap(), json!([9, 3, 7]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod jsonpath;
pub mod operations;
pub mod path;
pub mod prelude;
pub mod store;

pub use client::{ClientStats, ClientStatsSnapshot, DocumentClient};
pub use config::{DocumentConfig, OperatePolicy, Policy};
pub use error::{DocumentError, DocumentResult, ErrorKind};
pub use path::{PathPlan, Step};
pub use store::{MemoryStore, RecordKey, RecordStore, StoreError, UserKey};
