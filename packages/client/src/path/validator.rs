//! Syntax gate in front of the split and tokenize stages

use crate::{
    error::{DocumentError, DocumentResult},
    jsonpath::PathEvaluator,
};

/// Check that `path` starts at the root and parses
///
/// # Errors
///
/// `MissingRoot` when the path is empty or does not start with `$`;
/// `PathSyntax` when the evaluator rejects it.
pub fn validate<'p, E: PathEvaluator + ?Sized>(
    evaluator: &E,
    path: &'p str,
) -> DocumentResult<&'p str> {
    if !path.starts_with('$') {
        return Err(DocumentError::MissingRoot {
            path: path.to_string(),
        });
    }

    evaluator.compile(path).map_err(|error| {
        tracing::debug!(
            target: "docpath::path",
            path = %path,
            error = %error,
            "path rejected by evaluator"
        );
        DocumentError::PathSyntax {
            path: path.to_string(),
        }
    })?;
    Ok(path)
}
