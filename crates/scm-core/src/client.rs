//! Shared service client and HTTP configuration.
//!
//! [`ServiceClient`] is the single pipeline every namespace client delegates
//! to: resolve the transport host through the namespace [`HostMap`], build the
//! request from a typed [`Operation`], send it once, decode the reply.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;
use crate::host::HostMap;
use crate::operation::{decode_body, Operation};
use crate::request::{HttpRequest, RequestBuilder};
use crate::transport::Transport;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client configuration.
///
/// Configures transport behavior including timeouts and connection pooling.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable request logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`ServiceClient`].
#[derive(Clone)]
pub struct ServiceClientBuilder {
    namespace: &'static str,
    transport: Arc<dyn Transport>,
    hosts: HostMap,
}

impl ServiceClientBuilder {
    /// Create a builder for `namespace` with its default host table.
    #[must_use]
    pub fn new(namespace: &'static str, transport: Arc<dyn Transport>, hosts: HostMap) -> Self {
        Self {
            namespace,
            transport,
            hosts,
        }
    }

    /// Replace the host table.
    #[must_use]
    pub fn with_host_map(mut self, hosts: HostMap) -> Self {
        self.hosts = hosts;
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> ServiceClient {
        ServiceClient {
            namespace: self.namespace,
            transport: self.transport,
            hosts: self.hosts,
        }
    }
}

/// Immutable handle pairing a shared transport with a namespace host table.
///
/// Holds no mutable state; clones share the transport and may be used
/// concurrently.
#[derive(Clone)]
pub struct ServiceClient {
    namespace: &'static str,
    transport: Arc<dyn Transport>,
    hosts: HostMap,
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("namespace", &self.namespace)
            .field("host", &self.transport.host())
            .field("hosts", &self.hosts)
            .finish()
    }
}

impl ServiceClient {
    /// Namespace name used in logs.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// The host table this client routes with.
    #[must_use]
    pub const fn host_map(&self) -> &HostMap {
        &self.hosts
    }

    /// Path prefix for the transport's configured host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHost`](crate::Error::UnknownHost) if the host has no entry.
    pub fn prefix(&self) -> Result<String> {
        let host = self.transport.host();
        self.hosts.resolve(&host).map(str::to_string)
    }

    /// Build the request for `op` without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is unknown, a path parameter is missing,
    /// or the body cannot be encoded.
    pub fn build_request<O>(&self, op: &O) -> Result<HttpRequest>
    where
        O: Operation,
    {
        let prefix = self.prefix()?;
        RequestBuilder::new(O::METHOD, &prefix, O::PATH)
            .path_params(op.path_params())
            .query(op.query())
            .json_body(op.body())?
            .build()
    }

    /// Run `op`: build the request, send it once, decode the reply.
    ///
    /// # Errors
    ///
    /// Returns the unknown-host, request, transport or decode error that
    /// stopped the pipeline.
    pub async fn execute<O>(&self, op: &O) -> Result<O::Output>
    where
        O: Operation + Sync,
    {
        let request = self.build_request(op)?;
        debug!(
            namespace = self.namespace,
            method = %request.method,
            path = %request.path,
            "executing operation"
        );
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        decode_body(&response.body, &path)
    }
}
