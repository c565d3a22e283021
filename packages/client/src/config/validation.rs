//! Configuration validation

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidPolicy` if a default policy
    /// carries options but none of them would reach the store.
    fn validate(&self) -> ConfigResult<()>;
}
