//! # scm-core
//!
//! Core request pipeline and shared types for the Strata Cloud Manager
//! configuration API.
//!
//! Every namespace crate (`scm-objects`, `scm-setup`, ...) delegates to the
//! pieces defined here instead of carrying its own HTTP plumbing.
//!
//! ## Modules
//!
//! - [`error`] - Error types and the error classifier
//! - [`host`] - Logical hostname to path prefix resolution
//! - [`path`] - Path template expansion
//! - [`query`] - Query parameter assembly
//! - [`request`] - Request building
//! - [`transport`] - The transport seam and its `reqwest` implementation
//! - [`operation`] - Typed endpoint descriptions
//! - [`client`] - Shared service client and HTTP configuration
//! - [`pagination`] - List envelopes and common list filters
//! - [`choice`] - Closed one-of groups for polymorphic schema members
//! - [`collection`] - Generated endpoint descriptions for collection resources
//! - [`ids`] - Strongly-typed resource identifiers
//! - [`config`] - Client configuration
//! - [`auth`] - OAuth2 client-credentials token acquisition

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod choice;
pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod host;
pub mod ids;
pub mod operation;
pub mod pagination;
pub mod path;
pub mod query;
pub mod request;
pub mod transport;

// Re-export commonly used types
pub use client::{ServiceClient, ServiceClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use host::HostMap;
pub use operation::Operation;
pub use pagination::{ListQuery, ListResponse, Position, RuleListQuery};
pub use request::{HttpMethod, HttpRequest};
pub use transport::{HttpTransport, HttpTransportBuilder, RawResponse, Transport};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
