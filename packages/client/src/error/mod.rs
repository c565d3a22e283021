//! Stable error taxonomy of the document API
//!
//! Store-native failures and evaluator failures are translated here; callers
//! only ever see [`DocumentError`].

pub mod classification;
pub mod conversions;
pub mod types;

pub use types::{DocumentError, DocumentResult, ErrorKind};
