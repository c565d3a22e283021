//! Error constructor functions
//!
//! Factory functions for creating `JSONPath` errors with expression context.

use super::types::JsonPathError;

/// Creates an invalid JSONPath expression error
///
/// # Examples
/// ```
/// use docpath_client::jsonpath::error::invalid_expression_error;
///
/// let error = invalid_expression_error("$.users[", "unterminated bracket", Some(8));
/// assert!(error.is_syntax());
/// ```
pub fn invalid_expression_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: Option<usize>,
) -> JsonPathError {
    let expression = expression.into();
    let reason = reason.into();
    let message = match position {
        Some(pos) => format!("Invalid expression '{expression}': {reason} at position {pos}"),
        None => format!("Invalid expression '{expression}': {reason}"),
    };
    JsonPathError::invalid_path(message)
}
