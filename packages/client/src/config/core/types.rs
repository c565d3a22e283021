use serde::Deserialize;

use crate::config::{
    policy::Policy,
    validation::{ConfigResult, ConfigurationError, Validator},
};

/// Settings shared by every operation of a document client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Guard read-modify-write sequences with the fetched record generation
    pub generation_check: bool,
    /// Policy used by reads when the caller passes none
    pub default_read_policy: Option<Policy>,
    /// Policy used by writes when the caller passes none
    pub default_write_policy: Option<Policy>,
}

impl DocumentConfig {
    /// Parse a JSON configuration document and validate it
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Parse` for malformed JSON and
    /// `ConfigurationError::InvalidPolicy` if validation fails.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The caller's read policy, or the default
    #[must_use]
    pub fn read_policy<'a>(&'a self, policy: Option<&'a Policy>) -> Option<&'a Policy> {
        policy.or(self.default_read_policy.as_ref())
    }

    /// The caller's write policy, or the default
    #[must_use]
    pub fn write_policy<'a>(&'a self, policy: Option<&'a Policy>) -> Option<&'a Policy> {
        policy.or(self.default_write_policy.as_ref())
    }
}

impl Validator for DocumentConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (name, policy) in [
            ("default_read_policy", &self.default_read_policy),
            ("default_write_policy", &self.default_write_policy),
        ] {
            if let Some(policy) = policy
                && !policy.is_empty()
                && policy.to_operate_policy().is_empty()
            {
                return Err(ConfigurationError::InvalidPolicy(format!(
                    "{name} has no recognised options (got {})",
                    policy.dropped_options().join(", ")
                )));
            }
        }
        Ok(())
    }
}
