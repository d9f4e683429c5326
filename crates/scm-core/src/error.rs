//! Error types for configuration API operations.
//!
//! Every failure surfaces to the direct caller unchanged. [`Error::kind`]
//! classifies errors into the few categories callers branch on: an unknown
//! host (detected before any I/O), a transport failure, a decode failure, or
//! a request that could not be built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for configuration API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Transport host has no entry in the namespace host map
    #[error("Unknown host: {0}")]
    UnknownHost(String),

    /// Path template placeholder without a value
    #[error("Missing path parameter: {0}")]
    MissingPathParam(String),

    /// Request could not be assembled
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid resource identifier
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Service is unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Authentication or authorization was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request with details
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict error
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    DecodeError(String),
}

/// Specialized result type for configuration API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The transport host is not in the host map; no network call was made.
    UnknownHost,
    /// The HTTP exchange failed or returned a non-success status.
    Transport,
    /// The response body did not match the expected schema.
    Decode,
    /// The request could not be built from the operation input.
    Request,
    /// The client or transport is misconfigured.
    Config,
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownHost(_) => ErrorKind::UnknownHost,
            Self::HttpError(_)
            | Self::Timeout(_)
            | Self::ServiceUnavailable(_)
            | Self::Unauthorized(_)
            | Self::NotFound(_)
            | Self::BadRequest(_)
            | Self::Conflict(_) => ErrorKind::Transport,
            Self::DecodeError(_) => ErrorKind::Decode,
            Self::MissingPathParam(_)
            | Self::InvalidRequest(_)
            | Self::InvalidId(_)
            | Self::ValidationError(_) => ErrorKind::Request,
            Self::ConfigError(_) | Self::InvalidEndpoint(_) => ErrorKind::Config,
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHost(_) => "UNKNOWN_HOST",
            Self::MissingPathParam(_) => "MISSING_PATH_PARAM",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidId(_) => "INVALID_ID",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Conflict(_) => "CONFLICT",
            Self::DecodeError(_) => "DECODE_ERROR",
        }
    }

    /// Returns true if the error came from the HTTP exchange.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport)
    }

    /// Returns true if the response body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self.kind(), ErrorKind::Decode)
    }

    /// Returns true if callers should log this error as a serious error.
    ///
    /// The transport never logs failures itself.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(
            self,
            Self::ConfigError(_) | Self::ServiceUnavailable(_) | Self::DecodeError(_)
        )
    }
}

/// Error envelope returned by the configuration API on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    /// Error entries
    #[serde(rename = "_errors", default)]
    pub errors: Vec<ApiErrorDetail>,
    /// Request ID assigned by the API
    #[serde(rename = "_request_id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Single entry of an [`ApiErrorBody`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorDetail {
    /// Error code for programmatic handling
    #[serde(default)]
    pub code: String,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Parse an error body, returning `None` if it is not an API error envelope.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|parsed| !parsed.errors.is_empty())
    }

    /// One-line summary of the envelope.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = self
            .errors
            .iter()
            .map(|detail| format!("{} {}", detail.code, detail.message).trim().to_string())
            .collect::<Vec<_>>()
            .join("; ");
        if let Some(request_id) = &self.request_id {
            summary.push_str(&format!(" (request {request_id})"));
        }
        summary
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            Self::DecodeError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Self::InvalidId(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::UnknownHost("h".into()).kind(), ErrorKind::UnknownHost);
        assert_eq!(Error::NotFound("x".into()).kind(), ErrorKind::Transport);
        assert_eq!(Error::Unauthorized("x".into()).kind(), ErrorKind::Transport);
        assert_eq!(Error::Timeout("x".into()).kind(), ErrorKind::Transport);
        assert_eq!(Error::DecodeError("x".into()).kind(), ErrorKind::Decode);
        assert_eq!(Error::MissingPathParam("id".into()).kind(), ErrorKind::Request);
        assert_eq!(Error::InvalidId("x".into()).kind(), ErrorKind::Request);
        assert_eq!(Error::ConfigError("x".into()).kind(), ErrorKind::Config);
        assert_eq!(Error::InvalidEndpoint("x".into()).kind(), ErrorKind::Config);
    }

    #[test]
    fn test_kind_helpers() {
        assert!(Error::Conflict("x".into()).is_transport());
        assert!(!Error::Conflict("x".into()).is_decode());
        assert!(Error::DecodeError("x".into()).is_decode());
        assert!(!Error::UnknownHost("x".into()).is_transport());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::UnknownHost("h".into()).error_code(), "UNKNOWN_HOST");
        assert_eq!(
            Error::MissingPathParam("id".into()).error_code(),
            "MISSING_PATH_PARAM"
        );
        assert_eq!(Error::DecodeError("x".into()).error_code(), "DECODE_ERROR");
        assert_eq!(Error::Unauthorized("x".into()).error_code(), "UNAUTHORIZED");
        assert_eq!(Error::NotFound("x".into()).error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownHost("api.example.com".to_string());
        assert_eq!(err.to_string(), "Unknown host: api.example.com");

        let err = Error::MissingPathParam("id".to_string());
        assert_eq!(err.to_string(), "Missing path parameter: id");
    }

    #[test]
    fn test_should_log() {
        assert!(Error::ConfigError("test".to_string()).should_log());
        assert!(Error::DecodeError("test".to_string()).should_log());
        assert!(!Error::NotFound("test".to_string()).should_log());
        assert!(!Error::UnknownHost("test".to_string()).should_log());
    }

    #[test]
    fn test_api_error_body_parse() {
        let body = r#"{
            "_errors": [{"code": "E016", "message": "Not Authenticated", "details": {}}],
            "_request_id": "req-123"
        }"#;

        let parsed = ApiErrorBody::parse(body).unwrap();
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].code, "E016");
        assert_eq!(parsed.summary(), "E016 Not Authenticated (request req-123)");
    }

    #[test]
    fn test_api_error_body_parse_rejects_other_bodies() {
        assert!(ApiErrorBody::parse("upstream timeout").is_none());
        assert!(ApiErrorBody::parse(r#"{"message": "nope"}"#).is_none());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let scm_err: Error = err.into();
        assert!(matches!(scm_err, Error::InvalidEndpoint(_)));
        assert_eq!(scm_err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_from_uuid_error() {
        let err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let scm_err: Error = err.into();
        assert!(matches!(scm_err, Error::InvalidId(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let scm_err: Error = err.into();
        assert!(matches!(scm_err, Error::DecodeError(_)));
        assert!(scm_err.is_decode());
    }

    #[test]
    fn test_error_partial_eq() {
        let err1 = Error::NotFound("test".to_string());
        let err2 = Error::NotFound("test".to_string());
        let err3 = Error::NotFound("other".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
