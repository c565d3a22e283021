//! Fluent document builder
//!
//! A [`DocumentRef`] binds a client to one record field so that paths can be
//! read and written without repeating the key, field and policy.

mod core;
mod error;
mod methods;

pub use self::core::{DocumentRef, Documents};
pub use self::error::{DocpathError, DocpathResult};
