//! Tokenizer for simple paths
//!
//! Splits on `.`, `[` and `]` outside quotes. Bracketed tokens are either a
//! quoted key or an integer index; bare tokens are keys.

use super::{quoting::quoted_ranges, step::Step};
use crate::error::{DocumentError, DocumentResult};

/// Break a simple path into its access steps
///
/// The first step is always [`Step::Root`]. A trailing `*` step is dropped:
/// `$.a.*` addresses the same node as `$.a`.
///
/// # Errors
///
/// Returns `PathSyntax` for unbalanced brackets, bracketed tokens that are
/// neither quoted nor integers, or a path not starting at `$`.
pub fn tokenize(path: &str) -> DocumentResult<Vec<Step>> {
    let syntax = |reason: &str| {
        tracing::debug!(target: "docpath::path", path = %path, reason, "tokenize failed");
        DocumentError::PathSyntax {
            path: path.to_string(),
        }
    };

    let quoted = quoted_ranges(path);
    let in_quotes = |position: usize| quoted.iter().any(|range| range.contains(&position));

    let mut raw: Vec<(String, bool)> = Vec::new();
    let mut token = String::new();
    let mut in_bracket = false;

    for (i, c) in path.char_indices() {
        if in_quotes(i) || !matches!(c, '.' | '[' | ']') {
            token.push(c);
            continue;
        }
        match c {
            '[' => {
                if in_bracket {
                    return Err(syntax("nested bracket"));
                }
                flush(&mut token, false, &mut raw);
                in_bracket = true;
            }
            ']' => {
                if !in_bracket || token.is_empty() {
                    return Err(syntax("unbalanced or empty bracket"));
                }
                flush(&mut token, true, &mut raw);
                in_bracket = false;
            }
            _ => {
                if in_bracket {
                    return Err(syntax("'.' inside brackets"));
                }
                flush(&mut token, false, &mut raw);
            }
        }
    }
    if in_bracket {
        return Err(syntax("unterminated bracket"));
    }
    flush(&mut token, false, &mut raw);
    if raw.len() > 1 && raw.last().is_some_and(|(token, bracketed)| token == "*" && !bracketed) {
        raw.pop();
    }

    let mut tokens = raw.into_iter();
    match tokens.next() {
        Some((root, false)) if root == "$" => {}
        _ => return Err(syntax("missing root")),
    }

    let mut steps = vec![Step::Root];
    for (token, bracketed) in tokens {
        let step = if bracketed {
            bracket_step(&token).ok_or_else(|| syntax("invalid bracket token"))?
        } else {
            Step::Key(token)
        };
        steps.push(step);
    }
    Ok(steps)
}

fn flush(token: &mut String, bracketed: bool, raw: &mut Vec<(String, bool)>) {
    if !token.is_empty() {
        raw.push((std::mem::take(token), bracketed));
    }
}

fn bracket_step(token: &str) -> Option<Step> {
    let token = token.trim();
    for quote in ['\'', '"'] {
        if let Some(inner) = token
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return Some(Step::Key(unescape(inner)));
        }
    }
    token.parse::<i64>().ok().map(Step::Index)
}

fn unescape(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.extend(chars.next());
        } else {
            out.push(c);
        }
    }
    out
}
