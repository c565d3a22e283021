//! Splitting a path into its native and advanced parts
//!
//! The native store resolves plain key/index chains. Everything from the
//! first advanced operator onwards is re-rooted at `$` and handed to the
//! path evaluator, which runs against the sub-document the prefix fetches.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use super::quoting::quoted_ranges;
use crate::jsonpath::JsonPathExpression;

/// Non-bracket patterns that start an advanced suffix
static ADVANCED_OPERATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // ..
        r"\.\.",
        // .* followed by further steps; a trailing .* is the identity
        r"\.\*[.\[]",
        // .length()
        r"\.length\(\)",
    ]
    .into_iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// A path divided at its first advanced operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    /// Prefix made only of key and index steps
    pub simple: String,
    /// Everything from the first advanced operator, re-rooted at `$`
    pub advanced: Option<String>,
}

impl SplitPath {
    /// True when the advanced part is nothing but a trailing `length()`
    #[must_use]
    pub fn is_length_only(&self) -> bool {
        self.advanced
            .as_deref()
            .and_then(|advanced| advanced.parse::<JsonPathExpression>().ok())
            .is_some_and(|expression| expression.is_plain_length())
    }
}

/// Divide `path` at the earliest advanced operator
///
/// Operators at position 0 and operators inside quoted keys are ignored. Any
/// bracket holding something other than one integer or one quoted key
/// (wildcards, slices, unions, filters) is advanced.
#[must_use]
pub fn divide(path: &str) -> SplitPath {
    let quoted = quoted_ranges(path);
    let in_quotes = |position: usize| quoted.iter().any(|range| range.contains(&position));

    let operator = ADVANCED_OPERATORS
        .iter()
        .filter_map(|operator| {
            operator
                .find_iter(path)
                .map(|found| found.start())
                .find(|&start| start > 0 && !in_quotes(start))
        })
        .min();
    let start = operator.into_iter().chain(first_advanced_bracket(path, &quoted)).min();

    let split = match start {
        Some(start) => SplitPath {
            simple: path[..start].to_string(),
            advanced: Some(format!("${}", &path[start..])),
        },
        None => SplitPath {
            simple: path.to_string(),
            advanced: None,
        },
    };

    tracing::trace!(
        target: "docpath::path",
        path = %path,
        simple = %split.simple,
        advanced = ?split.advanced,
        "divided path"
    );
    split
}

/// Offset of the first bracket whose content is not a single index or key
fn first_advanced_bracket(path: &str, quoted: &[Range<usize>]) -> Option<usize> {
    let in_quotes = |position: usize| quoted.iter().any(|range| range.contains(&position));
    let mut open = None;
    for (i, c) in path.char_indices() {
        if in_quotes(i) {
            continue;
        }
        match (c, open) {
            ('[', None) if i > 0 => open = Some(i),
            (']', Some(start)) => {
                if !is_plain_bracket(&path[start + 1..i], start + 1, quoted) {
                    return Some(start);
                }
                open = None;
            }
            _ => {}
        }
    }
    None
}

/// `content` (found at `offset`) is one integer or exactly one quoted key
fn is_plain_bracket(content: &str, offset: usize, quoted: &[Range<usize>]) -> bool {
    if content.trim().parse::<i64>().is_ok() {
        return true;
    }
    let trimmed = content.trim_start();
    let start = offset + content.len() - trimmed.len();
    let end = offset + content.trim_end().len();
    start < end && quoted.iter().any(|range| *range == (start..end))
}
