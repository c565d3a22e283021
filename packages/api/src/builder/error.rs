//! Facade error type

use docpath_client::DocumentError;

/// A Result alias where the Err case is [`DocpathError`].
pub type DocpathResult<T> = Result<T, DocpathError>;

/// Errors raised by typed document access
#[derive(Debug, thiserror::Error)]
pub enum DocpathError {
    /// The document operation failed
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A value could not be converted to or from JSON
    #[error("value conversion failed at {path}: {source}")]
    Conversion {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DocpathError {
    /// The underlying document error, if the failure came from the store side
    #[must_use]
    pub fn as_document_error(&self) -> Option<&DocumentError> {
        match self {
            DocpathError::Document(error) => Some(error),
            DocpathError::Conversion { .. } => None,
        }
    }
}
