//! Logical hostname to URL path prefix resolution.
//!
//! The same logical resource is exposed under different path prefixes
//! depending on which deployment the transport talks to. Each namespace crate
//! ships a default [`HostMap`] and lets callers inject their own.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Prisma Access configuration API host.
pub const SASE_HOST: &str = "api.sase.paloaltonetworks.com";

/// Strata Cloud Manager configuration API host.
pub const STRATA_HOST: &str = "api.strata.paloaltonetworks.com";

/// Prefix used by every namespace on [`SASE_HOST`].
pub const SSE_CONFIG_PREFIX: &str = "/sse/config/v1";

/// Deployment namespace prefix on [`STRATA_HOST`].
pub const DEPLOYMENT_PREFIX: &str = "/config/deployment/v1";

/// Identity namespace prefix on [`STRATA_HOST`].
pub const IDENTITY_PREFIX: &str = "/config/identity/v1";

/// Network namespace prefix on [`STRATA_HOST`].
pub const NETWORK_PREFIX: &str = "/config/network/v1";

/// Objects namespace prefix on [`STRATA_HOST`].
pub const OBJECTS_PREFIX: &str = "/config/objects/v1";

/// Security namespace prefix on [`STRATA_HOST`].
pub const SECURITY_PREFIX: &str = "/config/security/v1";

/// Setup namespace prefix on [`STRATA_HOST`].
pub const SETUP_PREFIX: &str = "/config/setup/v1";

/// Immutable map from logical hostname to URL path prefix.
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostMap {
    entries: Arc<HashMap<String, String>>,
}

impl HostMap {
    /// Build a map from `(host, prefix)` pairs. Later duplicates win.
    pub fn new<I, H, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (H, P)>,
        H: Into<String>,
        P: Into<String>,
    {
        Self {
            entries: Arc::new(
                entries
                    .into_iter()
                    .map(|(host, prefix)| (host.into(), prefix.into()))
                    .collect(),
            ),
        }
    }

    /// The standard two-host table: [`SASE_HOST`] maps to
    /// [`SSE_CONFIG_PREFIX`] and [`STRATA_HOST`] to `strata_prefix`.
    #[must_use]
    pub fn standard(strata_prefix: &str) -> Self {
        Self::new([(SASE_HOST, SSE_CONFIG_PREFIX), (STRATA_HOST, strata_prefix)])
    }

    /// Resolve a hostname to its path prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHost`] if the host has no entry.
    pub fn resolve(&self, host: &str) -> Result<&str> {
        self.entries
            .get(host)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownHost(host.to_string()))
    }

    /// Returns true if the host has an entry.
    #[must_use]
    pub fn contains(&self, host: &str) -> bool {
        self.entries.contains_key(host)
    }

    /// Iterate over the configured hosts.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
