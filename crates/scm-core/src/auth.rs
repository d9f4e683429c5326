//! OAuth2 client-credentials token acquisition.
//!
//! The configuration API accepts bearer tokens issued by the identity
//! service for a tenant service group (TSG). A token is requested once when
//! a transport is built; refreshing it is the caller's concern.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiErrorBody, Error, Result};

/// OAuth2 client credentials scoped to one tenant service group.
#[derive(Debug)]
pub struct ClientCredentials {
    /// Service account client id
    pub client_id: String,
    /// Service account client secret
    pub client_secret: SecretString,
    /// Tenant service group id
    pub tsg_id: String,
}

impl ClientCredentials {
    /// Create a new set of credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tsg_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            tsg_id: tsg_id.into(),
        }
    }

    /// The `scope` form value for this tenant.
    #[must_use]
    pub fn scope(&self) -> String {
        format!("tsg_id:{}", self.tsg_id)
    }
}

#[derive(Deserialize)]
struct TokenReply {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    scope: Option<String>,
}

/// Bearer token issued by the identity service.
#[derive(Debug)]
pub struct AccessToken {
    secret: SecretString,
    /// Token type, usually `Bearer`
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
    /// Granted scope
    pub scope: Option<String>,
}

impl AccessToken {
    /// Borrow the raw token.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Consume the token, keeping only the secret.
    #[must_use]
    pub fn into_secret(self) -> SecretString {
        self.secret
    }
}

impl From<TokenReply> for AccessToken {
    fn from(reply: TokenReply) -> Self {
        Self {
            secret: SecretString::from(reply.access_token),
            token_type: reply.token_type,
            expires_in: reply.expires_in,
            scope: reply.scope,
        }
    }
}

/// Request an access token using the client-credentials grant.
///
/// # Errors
///
/// Returns [`Error::Unauthorized`] if the identity service rejects the
/// credentials, a transport error if the exchange fails, or
/// [`Error::DecodeError`] if the reply carries no token.
pub async fn request_token(
    http: &Client,
    auth_url: &str,
    credentials: &ClientCredentials,
) -> Result<AccessToken> {
    let scope = credentials.scope();
    let form = [("grant_type", "client_credentials"), ("scope", scope.as_str())];

    debug!(tsg_id = %credentials.tsg_id, "requesting access token");

    let response = http
        .post(auth_url)
        .basic_auth(
            &credentials.client_id,
            Some(credentials.client_secret.expose_secret()),
        )
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let text = ApiErrorBody::parse(&body).map_or(body, |parsed| parsed.summary());
        return Err(if status.is_server_error() {
            Error::ServiceUnavailable(format!("Token endpoint error {status}: {text}"))
        } else {
            Error::Unauthorized(format!("Token request failed ({status}): {text}"))
        });
    }

    let reply: TokenReply = serde_json::from_str(&body)
        .map_err(|e| Error::DecodeError(format!("Invalid token response: {e}")))?;

    Ok(reply.into())
}
