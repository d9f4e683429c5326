//! The transport seam and its `reqwest` implementation.
//!
//! A [`Transport`] knows which logical host it is configured against and can
//! perform exactly one HTTP exchange per call. Namespace clients never build
//! connections themselves; they share one transport.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::auth::{self, ClientCredentials};
use crate::client::ClientConfig;
use crate::config::ScmClientConfig;
use crate::error::{ApiErrorBody, Error, Result};
use crate::request::HttpRequest;

const USER_AGENT: &str = concat!("scm-rust/", env!("CARGO_PKG_VERSION"));

/// Successful response as returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// Response body, possibly empty.
    pub body: String,
}

impl RawResponse {
    /// Create a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Shared HTTP execution capability.
///
/// Implementations must return `Ok` only for successful (2xx) exchanges and
/// report everything else as a transport-class [`Error`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Logical hostname this transport is configured against.
    fn host(&self) -> String;

    /// Perform a single HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails or the status is not a success.
    async fn send(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: Url,
    host: Option<String>,
    http_config: ClientConfig,
    tls_verify: bool,
    token: Option<SecretString>,
}

impl HttpTransportBuilder {
    /// Create a builder for the given API base URL, e.g. `https://api.strata.paloaltonetworks.com`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(base_url.as_ref()).map_err(|err| {
            Error::ConfigError(format!("Invalid API base URL `{}`: {err}", base_url.as_ref()))
        })?;

        Ok(Self {
            base_url: url,
            host: None,
            http_config: ClientConfig::new(),
            tls_verify: true,
            token: None,
        })
    }

    /// Create a builder from a validated [`ScmClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API URL is invalid.
    pub fn from_config(config: &ScmClientConfig) -> Result<Self> {
        let mut builder = Self::new(&config.api_url)?
            .with_http_config(ClientConfig::new().with_timeout(config.timeout()))
            .with_tls_verify(config.tls_verify);
        if let Some(host) = &config.host {
            builder = builder.with_host(host.clone());
        }
        Ok(builder)
    }

    /// Override the logical host reported to host routers.
    ///
    /// Defaults to the host of the base URL.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Configure a bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if no host can be determined or the HTTP client fails to build.
    pub fn build(self) -> Result<HttpTransport> {
        let http = self.http_client()?;
        self.finish(http)
    }

    /// Obtain a token with OAuth2 client credentials, then build the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the token request fails or the transport cannot be built.
    pub async fn build_with_credentials(
        mut self,
        auth_url: &str,
        credentials: &ClientCredentials,
    ) -> Result<HttpTransport> {
        let http = self.http_client()?;
        let token = auth::request_token(&http, auth_url, credentials).await?;
        self.token = Some(token.into_secret());
        self.finish(http)
    }

    fn http_client(&self) -> Result<Client> {
        let mut builder = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
            .connect_timeout(Duration::from_secs(10))
            .danger_accept_invalid_certs(!self.tls_verify);

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }

        builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))
    }

    fn finish(self, http: Client) -> Result<HttpTransport> {
        let host = match self.host {
            Some(host) => host,
            None => self
                .base_url
                .host_str()
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::ConfigError(format!("API base URL `{}` has no host", self.base_url))
                })?,
        };

        Ok(HttpTransport {
            http,
            base_url: self.base_url,
            host,
            token: self.token,
            log_requests: self.http_config.enable_logging,
        })
    }
}

/// `reqwest`-backed [`Transport`].
///
/// Performs one round trip per call; no retries and no caching.
#[derive(Debug)]
pub struct HttpTransport {
    http: Client,
    base_url: Url,
    host: String,
    token: Option<SecretString>,
    log_requests: bool,
}

impl HttpTransport {
    /// Construct a transport directly from the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the client cannot be built.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        HttpTransportBuilder::new(base_url)?.build()
    }

    /// Create a builder for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn builder(base_url: impl AsRef<str>) -> Result<HttpTransportBuilder> {
        HttpTransportBuilder::new(base_url)
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid request path `{path}`: {err}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn host(&self) -> String {
        self.host.clone()
    }

    async fn send(&self, request: HttpRequest) -> Result<RawResponse> {
        let url = self.build_url(&request.path)?;
        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .json(body);
        }

        if self.log_requests {
            debug!(method = %request.method, path = %request.path, "SCM request");
        }

        execute(builder).await
    }
}

async fn execute(builder: reqwest::RequestBuilder) -> Result<RawResponse> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(RawResponse::new(status.as_u16(), body))
    } else {
        Err(map_status_to_error(status, &body))
    }
}

fn map_status_to_error(status: StatusCode, body: &str) -> Error {
    let text = ApiErrorBody::parse(body).map_or_else(|| body.to_string(), |parsed| parsed.summary());

    match status {
        StatusCode::NOT_FOUND => Error::NotFound(text),
        StatusCode::BAD_REQUEST => Error::BadRequest(text),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Unauthorized(format!("{status}: {text}"))
        }
        StatusCode::CONFLICT => Error::Conflict(text),
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            Error::ServiceUnavailable(format!("API temporarily unavailable: {text}"))
        }
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("API server error {status}: {text}"))
        }
        _ => Error::HttpError(format!("API error {status}: {text}")),
    }
}
