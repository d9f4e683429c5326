//! Security namespace client and data models for the configuration API.
//!
//! Provides typed security policy rules and an asynchronous client for the
//! pre and post rulebases.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{default_host_map, SecurityClient, SecurityClientBuilder};
pub use models::{ProfileSetting, SecurityAction, SecurityRule, SecurityRuleId};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = scm_core::Result<T>;
