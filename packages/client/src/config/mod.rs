//! Document client configuration
//!
//! Caller policies are opaque option maps. Only the options the store's
//! multi-operation call understands are forwarded; see [`OPERATE_POLICY_KEYS`].

pub mod core;
pub mod policy;
pub mod validation;

pub use self::{
    core::DocumentConfig,
    policy::{OPERATE_POLICY_KEYS, OperatePolicy, Policy},
    validation::{ConfigResult, ConfigurationError, Validator},
};
