//! Evaluator error type

/// What went wrong while compiling or applying an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The expression text is not valid `JSONPath`
    InvalidPath,
    /// Valid expression, but not usable for the requested operation
    Unsupported,
    /// The document changed shape while it was being processed
    ProcessingError,
}

/// Error raised by the `JSONPath` compiler or evaluator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JSONPath error: {message}")]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Result type for `JSONPath` operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPath, message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message.into())
    }

    pub fn processing_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProcessingError, message.into())
    }

    /// Whether this error was raised while compiling the expression
    #[inline]
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::InvalidPath
    }
}
