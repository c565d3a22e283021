//! Selector application logic
//!
//! Applies a single selector to one located node, appending the located
//! results to an output buffer.

use serde_json::Value;

use super::engine::{CoreJsonPathEvaluator, Located};
use crate::jsonpath::{
    ast::JsonSelector,
    normalized_paths::{NormalizedPath, PathSegment},
};

impl CoreJsonPathEvaluator {
    /// Apply a single selector to a located JSON value
    pub(super) fn apply_selector<'v>(
        &self,
        path: &NormalizedPath,
        value: &'v Value,
        selector: &JsonSelector,
        out: &mut Vec<Located<'v>>,
    ) {
        match selector {
            JsonSelector::Root => out.push((path.clone(), value)),
            JsonSelector::Child { name } => {
                if let Value::Object(map) = value
                    && let Some(child) = map.get(name)
                {
                    out.push((path.child(PathSegment::Member(name.clone())), child));
                }
            }
            JsonSelector::Index { index } => {
                if let Value::Array(items) = value
                    && let Some(i) = normalize_index(*index, items.len())
                {
                    out.push((path.child(PathSegment::Index(i)), &items[i]));
                }
            }
            JsonSelector::Slice { start, end, step } => {
                if let Value::Array(items) = value {
                    for i in slice_indices(*start, *end, *step, items.len()) {
                        out.push((path.child(PathSegment::Index(i)), &items[i]));
                    }
                }
            }
            JsonSelector::Wildcard => push_children(path, value, out),
            JsonSelector::RecursiveDescent => push_descendants(path, value, out),
            JsonSelector::Filter { expression } => match value {
                Value::Object(map) => {
                    for (name, child) in map {
                        if self.filter_matches(expression, child) {
                            out.push((path.child(PathSegment::Member(name.clone())), child));
                        }
                    }
                }
                Value::Array(items) => {
                    for (i, child) in items.iter().enumerate() {
                        if self.filter_matches(expression, child) {
                            out.push((path.child(PathSegment::Index(i)), child));
                        }
                    }
                }
                _ => {}
            },
            JsonSelector::Union { selectors } => {
                for selector in selectors {
                    self.apply_selector(path, value, selector, out);
                }
            }
        }
    }
}

/// Resolve a possibly negative index against a length
pub(super) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Indices selected by `[start:end:step]` over an array of `len` elements
///
/// Bounds follow the usual slice normalisation: negative values count from
/// the end, out-of-range values clamp, and a negative step walks backwards.
fn slice_indices(start: Option<i64>, end: Option<i64>, step: Option<i64>, len: usize) -> Vec<usize> {
    let Ok(len) = i64::try_from(len) else {
        return Vec::new();
    };
    let step = step.unwrap_or(1);
    if step == 0 || len == 0 {
        return Vec::new();
    }
    let normalize = |bound: i64| if bound < 0 { len + bound } else { bound };

    let mut indices = Vec::new();
    if step > 0 {
        let lower = normalize(start.unwrap_or(0)).clamp(0, len);
        let upper = normalize(end.unwrap_or(len)).clamp(0, len);
        let mut i = lower;
        while i < upper {
            indices.extend(usize::try_from(i).ok());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    } else {
        let upper = start.map_or(len - 1, normalize).clamp(-1, len - 1);
        let lower = end.map_or(-1, normalize).clamp(-1, len - 1);
        let mut i = upper;
        while lower < i {
            indices.extend(usize::try_from(i).ok());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    }
    indices
}

fn push_children<'v>(path: &NormalizedPath, value: &'v Value, out: &mut Vec<Located<'v>>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                out.push((path.child(PathSegment::Member(name.clone())), child));
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                out.push((path.child(PathSegment::Index(i)), child));
            }
        }
        _ => {}
    }
}

/// The node itself followed by all of its descendants, depth first
fn push_descendants<'v>(path: &NormalizedPath, value: &'v Value, out: &mut Vec<Located<'v>>) {
    out.push((path.clone(), value));
    let mut children = Vec::new();
    push_children(path, value, &mut children);
    for (child_path, child) in children {
        push_descendants(&child_path, child, out);
    }
}
