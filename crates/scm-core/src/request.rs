//! Request building.
//!
//! Turns a method, a resolved path prefix, a path template and the typed
//! inputs of an operation into a transport-ready [`HttpRequest`].

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};
use crate::path::{expand_path, PathParams};
use crate::query::QueryParams;

/// HTTP methods used by the configuration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a resource or list a collection
    Get,
    /// Create a resource or trigger an action
    Post,
    /// Replace a resource
    Put,
    /// Delete a resource
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A fully built request, ready for a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path including the host prefix, e.g. `/config/setup/v1/folders/f1/move`.
    pub path: String,
    /// Query pairs in insertion order.
    pub query: Vec<(&'static str, String)>,
    /// JSON body for write operations.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Value of the first query pair with `key`, if any.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// URL-encoded query string without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    method: HttpMethod,
    prefix: &'a str,
    template: &'a str,
    params: PathParams,
    query: QueryParams,
    body: Option<serde_json::Value>,
}

impl<'a> RequestBuilder<'a> {
    /// Start a request for `template` under the resolved host `prefix`.
    #[must_use]
    pub fn new(method: HttpMethod, prefix: &'a str, template: &'a str) -> Self {
        Self {
            method,
            prefix,
            template,
            params: PathParams::new(),
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Set the path parameter bindings.
    #[must_use]
    pub fn path_params(mut self, params: PathParams) -> Self {
        self.params = params;
        self
    }

    /// Set the query parameters.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Serialize `body` as the JSON request body when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the body cannot be encoded as JSON.
    pub fn json_body<B>(mut self, body: Option<&B>) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        self.body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| Error::InvalidRequest(format!("Failed to encode request body: {err}")))?;
        Ok(self)
    }

    /// Expand the template and assemble the request.
    ///
    /// # Errors
    ///
    /// Returns an error if a path placeholder cannot be substituted.
    pub fn build(self) -> Result<HttpRequest> {
        let expanded = expand_path(self.template, &self.params)?;
        Ok(HttpRequest {
            method: self.method,
            path: format!("{}{expanded}", self.prefix),
            query: self.query.into_pairs(),
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    }

    #[test]
    fn builds_prefixed_path() {
        let request = RequestBuilder::new(HttpMethod::Post, "/sse/config/v1", "/folders/{id}/move")
            .path_params(PathParams::new().with("id", "f1"))
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/sse/config/v1/folders/f1/move");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn empty_prefix_keeps_template_path() {
        let request = RequestBuilder::new(HttpMethod::Get, "", "/quarantined-devices")
            .build()
            .unwrap();
        assert_eq!(request.path, "/quarantined-devices");
    }

    #[test]
    fn query_string_contains_only_present_keys() {
        let query = QueryParams::new()
            .with_opt("limit", Some(50u32))
            .with_opt("offset", Some(0u32))
            .with_opt("name", Option::<&str>::None);

        let request = RequestBuilder::new(HttpMethod::Get, "/config/objects/v1", "/addresses")
            .query(query)
            .build()
            .unwrap();

        assert_eq!(request.query_string(), "limit=50&offset=0");
        assert_eq!(request.query_value("limit"), Some("50"));
        assert!(request.query_value("name").is_none());
    }

    #[test]
    fn query_string_is_url_encoded() {
        let query = QueryParams::new().with("name", "web servers");
        let request = RequestBuilder::new(HttpMethod::Get, "", "/addresses")
            .query(query)
            .build()
            .unwrap();
        assert_eq!(request.query_string(), "name=web+servers");
    }

    #[test]
    fn body_is_serialized_as_json() {
        let payload = Payload {
            name: "web".into(),
            description: None,
        };
        let request = RequestBuilder::new(HttpMethod::Put, "", "/addresses/{id}")
            .path_params(PathParams::new().with("id", "a1"))
            .json_body(Some(&payload))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({ "name": "web" })));
    }

    #[test]
    fn missing_path_param_fails_build() {
        let err = RequestBuilder::new(HttpMethod::Delete, "", "/addresses/{id}")
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingPathParam("id".to_string()));
    }

    #[test]
    fn method_conversion() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
    }
}
