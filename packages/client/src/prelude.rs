//! Docpath Prelude
//!
//! The types end users need to read and write documents.
//! Only canonical types that are part of the public API belong here.

// Core client
pub use crate::client::{ClientStatsSnapshot, DocumentClient};
pub use crate::config::{DocumentConfig, Policy};

// Error types
pub use crate::error::{DocumentError, DocumentResult, ErrorKind};

// Stores
pub use crate::store::{MemoryStore, RecordKey, RecordStore, UserKey};

// Path evaluation
pub use crate::jsonpath::{CoreJsonPathEvaluator, PathEvaluator};
