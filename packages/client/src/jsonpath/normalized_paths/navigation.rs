//! Resolving normalized paths against documents

use serde_json::Value;

use super::types::{NormalizedPath, PathSegment};

impl PathSegment {
    fn step<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match (self, value) {
            (PathSegment::Member(name), Value::Object(map)) => map.get(name),
            (PathSegment::Index(index), Value::Array(items)) => items.get(*index),
            _ => None,
        }
    }

    fn step_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        match (self, value) {
            (PathSegment::Member(name), Value::Object(map)) => map.get_mut(name),
            (PathSegment::Index(index), Value::Array(items)) => items.get_mut(*index),
            _ => None,
        }
    }
}

impl NormalizedPath {
    /// Borrow the node this path identifies
    #[must_use]
    pub fn resolve<'v>(&self, document: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(document, |node, segment| segment.step(node))
    }

    /// Mutably borrow the node this path identifies
    pub fn resolve_mut<'v>(&self, document: &'v mut Value) -> Option<&'v mut Value> {
        self.segments
            .iter()
            .try_fold(document, |node, segment| segment.step_mut(node))
    }

    /// Detach the node from its parent, returning it
    ///
    /// The root cannot be detached; removing it yields `None`.
    pub fn remove(&self, document: &mut Value) -> Option<Value> {
        let (last, parents) = self.segments.split_last()?;
        let parent = parents
            .iter()
            .try_fold(document, |node, segment| segment.step_mut(node))?;
        match (last, parent) {
            (PathSegment::Member(name), Value::Object(map)) => map.remove(name),
            (PathSegment::Index(index), Value::Array(items)) if *index < items.len() => {
                Some(items.remove(*index))
            }
            _ => None,
        }
    }
}
