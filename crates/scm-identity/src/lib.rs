//! Identity namespace client and data models for the configuration API.
//!
//! Provides typed structures and asynchronous client utilities for
//! authentication profiles and certificate profiles.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{default_host_map, IdentityClient, IdentityClientBuilder};
pub use models::{
    AuthenticationMethod, AuthenticationProfile, AuthenticationProfileId, CertificateProfile,
    CertificateProfileId, UsernameField,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = scm_core::Result<T>;
