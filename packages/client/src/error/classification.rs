use super::types::{DocumentError, ErrorKind};

impl DocumentError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocumentError::MissingRoot { .. } => ErrorKind::MissingRoot,
            DocumentError::PathSyntax { .. } => ErrorKind::PathSyntax,
            DocumentError::ObjectNotFound { .. } => ErrorKind::ObjectNotFound,
            DocumentError::WriteNotApplicable { .. } => ErrorKind::WriteNotApplicable,
            DocumentError::Conflict { .. } => ErrorKind::Conflict,
            DocumentError::Store { .. } => ErrorKind::Store,
        }
    }

    /// The path supplied by the caller
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            DocumentError::MissingRoot { path }
            | DocumentError::PathSyntax { path }
            | DocumentError::ObjectNotFound { path }
            | DocumentError::WriteNotApplicable { path }
            | DocumentError::Conflict { path }
            | DocumentError::Store { path, .. } => path,
        }
    }

    /// Returns true if the error was raised before any store call.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            DocumentError::MissingRoot { .. } | DocumentError::PathSyntax { .. }
        )
    }

    /// Returns true if the path did not resolve against the document.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::ObjectNotFound { .. })
    }

    /// Returns true if an optimistic write-back lost a race.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, DocumentError::Conflict { .. })
    }
}
