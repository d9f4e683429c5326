//! Objects namespace client and data models for the configuration API.
//!
//! Covers addresses and quarantined devices. All requests go through the
//! shared [`scm_core::ServiceClient`] pipeline.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{default_host_map, ObjectsClient, ObjectsClientBuilder};
pub use models::{Address, AddressId, AddressValue, QuarantinedDevice, QuarantinedDeviceListParams};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = scm_core::Result<T>;
