//! Compiled access plan for one path

use std::fmt;

use super::{Step, divide, tokenize, validate};
use crate::{
    error::DocumentResult,
    jsonpath::PathEvaluator,
    operations::{ContextChain, build_contexts},
};

/// Everything the orchestrator needs to know about a path before touching the store
#[derive(Debug, Clone, PartialEq)]
pub struct PathPlan {
    /// The path as supplied by the caller
    pub original: String,
    /// Native-resolvable prefix
    pub simple: String,
    /// Advanced suffix re-rooted at `$`
    pub advanced: Option<String>,
    /// Descent contexts for every step of the prefix except the last
    pub contexts: Option<ContextChain>,
    /// Step the terminal native operation is built from
    pub last: Step,
    length_only: bool,
}

impl PathPlan {
    /// Validate, divide and tokenize `path`
    ///
    /// # Errors
    ///
    /// `MissingRoot` or `PathSyntax` for malformed paths; nothing touches the
    /// store before this succeeds.
    pub fn compile<E: PathEvaluator + ?Sized>(evaluator: &E, path: &str) -> DocumentResult<Self> {
        let path = validate(evaluator, path)?;
        let split = divide(path);
        let mut steps = tokenize(&split.simple)?;
        // tokenize always yields at least the root step
        let last = steps.pop().unwrap_or(Step::Root);
        let contexts = build_contexts(&steps);

        let plan = Self {
            original: path.to_string(),
            length_only: split.is_length_only(),
            simple: split.simple,
            advanced: split.advanced,
            contexts,
            last,
        };
        tracing::debug!(target: "docpath::path", plan = %plan, "compiled path plan");
        Ok(plan)
    }

    /// True when a trailing `length()` is the only advanced operation
    #[inline]
    #[must_use]
    pub fn is_length_only(&self) -> bool {
        self.length_only
    }

    #[inline]
    #[must_use]
    pub fn is_advanced(&self) -> bool {
        self.advanced.is_some()
    }
}

impl fmt::Display for PathPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => ", self.original)?;
        match &self.contexts {
            Some(contexts) => write!(f, "{contexts}")?,
            None => f.write_str("-")?,
        }
        write!(f, " / {}", self.last)?;
        if let Some(advanced) = &self.advanced {
            write!(f, " | {advanced}")?;
        }
        Ok(())
    }
}
