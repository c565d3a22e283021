/// Result type for native store calls
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a record store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Key access on something that is not a map
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Index access on something that is not a list, or key removal from a list
    #[error("invalid access shape: {0}")]
    InvalidAccessShape(String),

    /// Missing container, out-of-range index, or incompatible write
    #[error("operation not applicable: {0}")]
    OperationNotApplicable(String),

    #[error("record not found")]
    RecordNotFound,

    #[error("generation mismatch: expected {expected}, found {actual}")]
    GenerationMismatch { expected: u32, actual: u32 },

    /// Transport or availability failure
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
