//! Document client configuration type and builders

mod builders;
mod types;

pub use types::DocumentConfig;
