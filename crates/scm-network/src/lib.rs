//! Network namespace client and data models for the configuration API.
//!
//! Covers security zones and QoS policy rules.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{default_host_map, NetworkClient, NetworkClientBuilder};
pub use models::{DscpTos, QosPolicyRule, QosPolicyRuleId, Zone, ZoneId, ZoneNetwork, ZoneNetworkKind};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = scm_core::Result<T>;
