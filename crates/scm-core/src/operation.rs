//! Typed endpoint descriptions.
//!
//! Each API endpoint is described once by an input type implementing
//! [`Operation`]: its method, path template, path and query parameters, body
//! and response type. [`ServiceClient::execute`](crate::ServiceClient::execute)
//! runs any operation through the same pipeline.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::PathParams;
use crate::query::QueryParams;
use crate::request::HttpMethod;

/// A single API endpoint bound to its typed input.
pub trait Operation {
    /// HTTP method of the endpoint.
    const METHOD: HttpMethod;

    /// Path template relative to the host prefix, e.g. `/folders/{id}/move`.
    const PATH: &'static str;

    /// Request body type; `()` for operations without a body.
    type Body: Serialize + ?Sized;

    /// Decoded response type; [`IgnoredAny`](serde::de::IgnoredAny) for
    /// operations whose reply is discarded.
    type Output: DeserializeOwned;

    /// Bindings for the path template placeholders.
    fn path_params(&self) -> PathParams {
        PathParams::new()
    }

    /// Query parameters; absent optional inputs are omitted.
    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    /// Request body, if the endpoint takes one.
    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

/// Decode a response body into `T`.
///
/// An empty body decodes as JSON `null`, so `()` and `Option<_>` outputs
/// accept empty replies while schema outputs report a decode error.
///
/// # Errors
///
/// Returns [`Error::DecodeError`] if the body does not match `T`.
pub fn decode_body<T>(body: &str, path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let trimmed = body.trim();
    let source = if trimmed.is_empty() { "null" } else { trimmed };
    serde_json::from_str(source)
        .map_err(|err| Error::DecodeError(format!("Failed to parse response for `{path}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Folder {
        name: String,
    }

    #[test]
    fn decodes_schema() {
        let folder: Folder = decode_body(r#"{"name":"Texas"}"#, "/folders").unwrap();
        assert_eq!(folder.name, "Texas");
    }

    #[test]
    fn empty_body_decodes_unit() {
        decode_body::<()>("", "/folders/f1/move").unwrap();
        decode_body::<()>("  \n", "/folders/f1/move").unwrap();
    }

    #[test]
    fn empty_body_for_schema_is_decode_error() {
        let err = decode_body::<Folder>("", "/folders").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = decode_body::<Folder>("{not json", "/folders").unwrap_err();
        match err {
            Error::DecodeError(message) => assert!(message.contains("/folders")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ignored_output_accepts_any_reply() {
        assert!(decode_body::<()>(r#"{"ok":true}"#, "/x").is_err());
        decode_body::<serde::de::IgnoredAny>(r#"{"ok":true}"#, "/x").unwrap();
        decode_body::<serde::de::IgnoredAny>("", "/x").unwrap();
    }
}
