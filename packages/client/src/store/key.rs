use std::fmt;

use serde::{Deserialize, Serialize};

/// User-supplied part of a record key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserKey {
    String(String),
    Integer(i64),
    Bytes(Vec<u8>),
}

impl From<&str> for UserKey {
    fn from(key: &str) -> Self {
        UserKey::String(key.to_string())
    }
}

impl From<String> for UserKey {
    fn from(key: String) -> Self {
        UserKey::String(key)
    }
}

impl From<i64> for UserKey {
    fn from(key: i64) -> Self {
        UserKey::Integer(key)
    }
}

impl From<Vec<u8>> for UserKey {
    fn from(key: Vec<u8>) -> Self {
        UserKey::Bytes(key)
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::String(key) => f.write_str(key),
            UserKey::Integer(key) => write!(f, "{key}"),
            UserKey::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

/// Address of one record: namespace, set and user key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub namespace: String,
    pub set: String,
    pub user_key: UserKey,
}

impl RecordKey {
    #[must_use]
    pub fn new(namespace: impl Into<String>, set: impl Into<String>, user_key: impl Into<UserKey>) -> Self {
        Self {
            namespace: namespace.into(),
            set: set.into(),
            user_key: user_key.into(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.namespace, self.set, self.user_key)
    }
}
