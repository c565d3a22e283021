//! Reads

use serde_json::Value;

use super::core::DocumentClient;
use crate::{
    config::{Policy, policy::to_operate_policy},
    error::{DocumentError, DocumentResult},
    jsonpath::PathEvaluator,
    operations::build_get_operation,
    path::PathPlan,
    store::{RecordKey, RecordStore},
};

/// What a read produced before shaping the result
enum Selection {
    /// The native read alone answered the path
    Document(Value),
    /// Matches of the advanced suffix
    Matches(Vec<Value>),
}

impl<S: RecordStore, E: PathEvaluator> DocumentClient<S, E> {
    /// Read the value(s) a path addresses
    ///
    /// A simple path returns the addressed value. An advanced path returns
    /// its single match as is and several matches as an array whose order is
    /// unspecified. A path whose only advanced part is a trailing `length()`
    /// returns the integer.
    ///
    /// One native read; no writes.
    ///
    /// # Errors
    ///
    /// `MissingRoot` / `PathSyntax` for malformed paths, `ObjectNotFound`
    /// when the native prefix does not resolve.
    ///
    /// # Examples
    /// ```
    /// use docpath_client::prelude::*;
    /// use serde_json::json;
    ///
    /// let store = MemoryStore::new();
    /// let key = RecordKey::new("test", "docs", "k1");
    /// store.insert(key.clone(), "doc", json!({"a": [1, 2, 3]}));
    ///
    /// let client = DocumentClient::new(store);
    /// assert_eq!(client.get(&key, "doc", "$.a[1]", None).unwrap(), json!(2));
    /// assert_eq!(client.get(&key, "doc", "$.a.length()", None).unwrap(), json!(3));
    /// ```
    pub fn get(&self, key: &RecordKey, field: &str, path: &str, policy: Option<&Policy>) -> DocumentResult<Value> {
        let result = self.select(key, field, path, policy).and_then(|(plan, selection)| {
            match selection {
                Selection::Document(value) => Ok(value),
                Selection::Matches(matches) if plan.is_length_only() => {
                    matches.into_iter().next().ok_or_else(|| DocumentError::ObjectNotFound {
                        path: path.to_string(),
                    })
                }
                Selection::Matches(mut matches) => Ok(if matches.len() == 1 {
                    matches.swap_remove(0)
                } else {
                    Value::Array(matches)
                }),
            }
        });
        self.finish("get", path, result)
    }

    /// Read every value a path addresses, without collapsing
    ///
    /// A simple path yields a one-element vector.
    ///
    /// # Errors
    ///
    /// Same as [`DocumentClient::get`].
    pub fn get_all(
        &self,
        key: &RecordKey,
        field: &str,
        path: &str,
        policy: Option<&Policy>,
    ) -> DocumentResult<Vec<Value>> {
        let result = self
            .select(key, field, path, policy)
            .map(|(_, selection)| match selection {
                Selection::Document(value) => vec![value],
                Selection::Matches(matches) => matches,
            });
        self.finish("get_all", path, result)
    }

    fn select(
        &self,
        key: &RecordKey,
        field: &str,
        path: &str,
        policy: Option<&Policy>,
    ) -> DocumentResult<(PathPlan, Selection)> {
        let plan = self.plan(path)?;
        let policy = to_operate_policy(self.config.read_policy(policy));

        let operation = build_get_operation(field, plan.contexts.clone(), &plan.last);
        let document = self.get_smallest_document(key, &operation, policy.as_ref(), path)?;

        let selection = match &plan.advanced {
            None => Selection::Document(document.value),
            Some(advanced) => {
                let compiled = self.compile_advanced(advanced, path)?;
                Selection::Matches(self.evaluator.find(&compiled, &document.value))
            }
        };
        Ok((plan, selection))
    }
}
