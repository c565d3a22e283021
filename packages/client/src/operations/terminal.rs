//! Terminal native operations

use std::fmt;

use serde_json::Value;

use super::ContextChain;

/// The single native operation executed at the last step of a simple path
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalOperation {
    /// Read the whole field value
    ReadWholeField {
        field: String,
    },
    /// Replace the whole field value, creating the record if needed
    WriteWholeField {
        field: String,
        value: Value,
    },
    /// Read a map entry
    GetByKey {
        field: String,
        contexts: Option<ContextChain>,
        key: String,
    },
    /// Read a list element
    GetByIndex {
        field: String,
        contexts: Option<ContextChain>,
        index: i64,
    },
    /// Insert or replace a map entry
    SetByKey {
        field: String,
        contexts: Option<ContextChain>,
        key: String,
        value: Value,
    },
    /// Replace a list element
    SetByIndex {
        field: String,
        contexts: Option<ContextChain>,
        index: i64,
        value: Value,
    },
    /// Remove a map entry; absent keys are not an error
    RemoveByKey {
        field: String,
        contexts: Option<ContextChain>,
        key: String,
    },
    /// Remove a list element
    PopByIndex {
        field: String,
        contexts: Option<ContextChain>,
        index: i64,
    },
}

impl TerminalOperation {
    /// Name of the field the operation targets
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::ReadWholeField { field }
            | Self::WriteWholeField { field, .. }
            | Self::GetByKey { field, .. }
            | Self::GetByIndex { field, .. }
            | Self::SetByKey { field, .. }
            | Self::SetByIndex { field, .. }
            | Self::RemoveByKey { field, .. }
            | Self::PopByIndex { field, .. } => field,
        }
    }

    /// Descent contexts, `None` for whole-field operations
    #[must_use]
    pub fn contexts(&self) -> Option<&ContextChain> {
        match self {
            Self::ReadWholeField { .. } | Self::WriteWholeField { .. } => None,
            Self::GetByKey { contexts, .. }
            | Self::GetByIndex { contexts, .. }
            | Self::SetByKey { contexts, .. }
            | Self::SetByIndex { contexts, .. }
            | Self::RemoveByKey { contexts, .. }
            | Self::PopByIndex { contexts, .. } => contexts.as_ref(),
        }
    }

    /// True for operations that only read
    #[must_use]
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Self::ReadWholeField { .. } | Self::GetByKey { .. } | Self::GetByIndex { .. }
        )
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReadWholeField { .. } => "read_whole_field",
            Self::WriteWholeField { .. } => "write_whole_field",
            Self::GetByKey { .. } => "get_by_key",
            Self::GetByIndex { .. } => "get_by_index",
            Self::SetByKey { .. } => "set_by_key",
            Self::SetByIndex { .. } => "set_by_index",
            Self::RemoveByKey { .. } => "remove_by_key",
            Self::PopByIndex { .. } => "pop_by_index",
        }
    }
}

impl fmt::Display for TerminalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.name(), self.field())?;
        if let Some(contexts) = self.contexts() {
            write!(f, ", ctx={contexts}")?;
        }
        match self {
            Self::GetByKey { key, .. } | Self::SetByKey { key, .. } | Self::RemoveByKey { key, .. } => {
                write!(f, ", key={key:?}")?;
            }
            Self::GetByIndex { index, .. }
            | Self::SetByIndex { index, .. }
            | Self::PopByIndex { index, .. } => write!(f, ", index={index}")?,
            Self::ReadWholeField { .. } | Self::WriteWholeField { .. } => {}
        }
        f.write_str(")")
    }
}
