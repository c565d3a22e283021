//! Native store operations
//!
//! A simple path compiles to a [`ContextChain`] (where to descend) and one
//! [`TerminalOperation`] (what to do at the last step). These are the only
//! operations the record store has to understand.

mod builders;
mod context;
mod terminal;

pub use builders::{build_contexts, build_delete_operation, build_get_operation, build_put_operation};
pub use context::{CollectionContext, ContextChain};
pub use terminal::TerminalOperation;
