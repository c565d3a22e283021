//! Core `DocumentRef` structure and construction

use std::fmt;

use docpath_client::{DocumentClient, Policy, RecordKey, jsonpath::PathEvaluator, store::RecordStore};

/// One document: a client, a record key and a field name
pub struct DocumentRef<'c, S, E> {
    pub(crate) client: &'c DocumentClient<S, E>,
    pub(crate) key: RecordKey,
    pub(crate) field: String,
    pub(crate) policy: Option<Policy>,
    pub(crate) debug_enabled: bool,
}

impl<S, E> fmt::Debug for DocumentRef<'_, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRef")
            .field("key", &self.key)
            .field("field", &self.field)
            .field("policy", &self.policy)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}

impl<'c, S: RecordStore, E: PathEvaluator> DocumentRef<'c, S, E> {
    #[must_use]
    pub fn new(client: &'c DocumentClient<S, E>, key: RecordKey, field: impl Into<String>) -> Self {
        Self {
            client,
            key,
            field: field.into(),
            policy: None,
            debug_enabled: false,
        }
    }

    /// Use `policy` for every following call instead of the client defaults
    ///
    /// # Examples
    /// ```
    /// use docpath::{Docpath, Documents, Policy, RecordKey};
    ///
    /// let client = Docpath::in_memory();
    /// let doc = client
    ///     .document(RecordKey::new("test", "docs", 1_i64), "doc")
    ///     .with_policy(Policy::new().with("total_timeout", 500));
    /// assert_eq!(doc.field(), "doc");
    /// ```
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Log every operation issued through this reference
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Entry point to the fluent API on any [`DocumentClient`]
pub trait Documents<S, E> {
    /// Bind the client to one record field
    fn document(&self, key: RecordKey, field: impl Into<String>) -> DocumentRef<'_, S, E>;
}

impl<S: RecordStore, E: PathEvaluator> Documents<S, E> for DocumentClient<S, E> {
    fn document(&self, key: RecordKey, field: impl Into<String>) -> DocumentRef<'_, S, E> {
        DocumentRef::new(self, key, field)
    }
}
