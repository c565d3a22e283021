use std::fmt;

/// A Result alias where the Err case is [`DocumentError`].
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Errors raised by document operations
///
/// Every variant carries the path the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Path is empty or does not start with `$`
    #[error("JSON path must start at the document root ($): {path:?}")]
    MissingRoot { path: String },

    /// Path is rejected by the path grammar
    #[error("invalid JSON path syntax: {path}")]
    PathSyntax { path: String },

    /// Path is well formed but does not resolve against the stored document
    #[error("JSON object not found at {path}")]
    ObjectNotFound { path: String },

    /// Write-back target is missing or has the wrong shape
    #[error("cannot write to {path}: target is missing or has the wrong shape")]
    WriteNotApplicable { path: String },

    /// The record changed between fetch and write-back
    #[error("record changed concurrently while updating {path}")]
    Conflict { path: String },

    /// Any other store failure
    #[error("store failure at {path}: {message}")]
    Store { path: String, message: String },
}

/// Copyable discriminant of [`DocumentError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRoot,
    PathSyntax,
    ObjectNotFound,
    WriteNotApplicable,
    Conflict,
    Store,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::MissingRoot => "missing_root",
            ErrorKind::PathSyntax => "path_syntax",
            ErrorKind::ObjectNotFound => "object_not_found",
            ErrorKind::WriteNotApplicable => "write_not_applicable",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Store => "store",
        })
    }
}
