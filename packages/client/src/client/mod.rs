//! Split-evaluation document client
//!
//! Every operation compiles its path into a [`PathPlan`](crate::path::PathPlan),
//! resolves the native prefix with one store call, and runs the advanced
//! suffix (if any) in memory against the smallest fetched sub-document.
//!
//! Read-modify-write sequences (advanced put, append, advanced delete) are
//! two separate store calls. A concurrent writer between them can be lost
//! unless [`DocumentConfig::generation_check`](crate::config::DocumentConfig)
//! is enabled, in which case the race surfaces as `Conflict`. Nothing is
//! retried.

pub mod core;
mod delete;
mod get;
mod mutate;
pub mod stats;
mod transfer;

pub use self::core::DocumentClient;
pub use self::stats::{ClientStats, ClientStatsSnapshot};
