//! Caller policies and their operate-call subset

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options the store's multi-operation call recognises
pub const OPERATE_POLICY_KEYS: [&str; 14] = [
    "max_retries",
    "sleep_between_retries",
    "socket_timeout",
    "total_timeout",
    "compress",
    "key",
    "gen",
    "replica",
    "commit_level",
    "read_mode_ap",
    "read_mode_sc",
    "exists",
    "durable_delete",
    "expressions",
];

/// Opaque caller policy: option name to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Policy(HashMap<String, Value>);

impl Policy {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value
    ///
    /// # Examples
    /// ```
    /// use docpath_client::config::Policy;
    ///
    /// let policy = Policy::new().with("total_timeout", 1000).with("priority", "low");
    /// assert_eq!(policy.len(), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only the options on the operate allow-list
    #[must_use]
    pub fn to_operate_policy(&self) -> OperatePolicy {
        OperatePolicy(
            self.0
                .iter()
                .filter(|(name, _)| OPERATE_POLICY_KEYS.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }

    /// Names of options that [`Policy::to_operate_policy`] would drop
    #[must_use]
    pub fn dropped_options(&self) -> Vec<&str> {
        let mut dropped: Vec<&str> = self
            .0
            .keys()
            .map(String::as_str)
            .filter(|name| !OPERATE_POLICY_KEYS.contains(name))
            .collect();
        dropped.sort_unstable();
        dropped
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Policy {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Policy filtered down to the operate allow-list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OperatePolicy(HashMap<String, Value>);

impl OperatePolicy {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Convert an optional caller policy; `None` stays `None`
#[must_use]
pub fn to_operate_policy(policy: Option<&Policy>) -> Option<OperatePolicy> {
    policy.map(Policy::to_operate_policy)
}
