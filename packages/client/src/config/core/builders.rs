//! Builder methods for document configuration

use super::types::DocumentConfig;
use crate::config::policy::Policy;

impl DocumentConfig {
    /// Enable or disable generation-guarded write-backs
    ///
    /// When enabled, a record modified between the fetch and the write-back of
    /// a read-modify-write operation fails with a conflict instead of being
    /// overwritten.
    ///
    /// # Examples
    /// ```
    /// use docpath_client::config::DocumentConfig;
    ///
    /// let config = DocumentConfig::default().with_generation_check(true);
    /// assert!(config.generation_check);
    /// ```
    #[must_use]
    pub fn with_generation_check(mut self, enabled: bool) -> Self {
        self.generation_check = enabled;
        self
    }

    #[must_use]
    pub fn with_read_policy(mut self, policy: Policy) -> Self {
        self.default_read_policy = Some(policy);
        self
    }

    #[must_use]
    pub fn with_write_policy(mut self, policy: Policy) -> Self {
        self.default_write_policy = Some(policy);
        self
    }
}
