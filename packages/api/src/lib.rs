//! Docpath Public API
//!
//! JSONPath reads and writes on JSON documents stored in key-value record
//! fields. Simple key/index chains are pushed down to the store's native
//! nested-collection operations; wildcards, descendants, filters, slices,
//! unions and `length()` are evaluated in memory on the smallest fetched
//! sub-document.
//!
//! ```rust
//! use docpath::{Docpath, Documents, RecordKey};
//! use serde_json::json;
//!
//! let client = Docpath::in_memory();
//! let doc = client.document(RecordKey::new("test", "docs", "k1"), "doc");
//!
//! doc.put("$", json!({"a": [1, 2, 3]})).unwrap();
//! doc.put("$.a[1]", 9).unwrap();
//! doc.append("$.a", 7).unwrap();
//! doc.delete("$.a[0]").unwrap();
//!
//! assert_eq!(doc.get("$.a").unwrap(), json!([9, 3, 7]));
//! assert_eq!(doc.get("$.a.length()").unwrap(), json!(3));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from client package
pub use docpath_client::prelude::*;
pub use docpath_client::{OperatePolicy, PathPlan, StoreError};

/// Main entry point providing client constructors
pub struct Docpath;

impl Docpath {
    /// Create a client over a fresh in-memory store
    #[must_use]
    pub fn in_memory() -> DocumentClient<MemoryStore> {
        DocumentClient::new(MemoryStore::new())
    }

    /// Create a client over an existing store
    pub fn with_store<S: RecordStore>(store: S) -> DocumentClient<S> {
        DocumentClient::new(store)
    }

    /// Create a client over an existing store with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error.
    pub fn with_config<S: RecordStore>(
        store: S,
        config: DocumentConfig,
    ) -> docpath_client::config::ConfigResult<DocumentClient<S>> {
        DocumentClient::with_config(store, config)
    }
}
