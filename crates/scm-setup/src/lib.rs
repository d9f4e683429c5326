//! Setup namespace client and data models for the configuration API.
//!
//! Folders organize every other configuration object into a hierarchy.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{default_host_map, SetupClient, SetupClientBuilder};
pub use models::{Folder, FolderId, FolderMove};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = scm_core::Result<T>;
