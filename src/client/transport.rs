//! The transport seam between resources and the network.
//!
//! [`Transport`] has one required method, [`execute`](Transport::execute), which
//! sends a request and returns the fully read response without judging its
//! status. The verb helpers layered on top classify the status:
//!
//! | Helper | Non-2xx | 2xx |
//! |--------|---------|-----|
//! | [`get`](Transport::get) | `NotFound` / `HttpStatus` | response |
//! | [`post`](Transport::post) | `NotFound` / `HttpStatus` | response (202 included) |
//! | [`patch`](Transport::patch) | `NotFound` / `HttpStatus` | `()` |
//! | [`put`](Transport::put) | `NotFound` / `HttpStatus` | response |
//! | [`delete`](Transport::delete) | `NotFound` / `HttpStatus` | `()` |
//!
//! An [`HttpResponse`] owns its body as [`Bytes`]; the connection behind it has
//! already been released by the time it reaches the caller, on success and on
//! every error path.

use crate::client::ClientConfig;
use crate::error::{RedfishError, Result};
use crate::protocol::{self, constants};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// An outgoing request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute or service-relative URI.
    pub uri: String,
    /// Extra request headers.
    pub headers: BTreeMap<String, String>,
    /// Encoded body, if any.
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Create a request with no headers and no body.
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        HttpRequest {
            method,
            uri: uri.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Create a GET request.
    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Create a DELETE request.
    pub fn delete(uri: impl Into<String>) -> Self {
        Self::new(Method::DELETE, uri)
    }

    /// Add one header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add every non-empty header of `headers`.
    #[must_use]
    pub fn with_headers(mut self, headers: &BTreeMap<String, String>) -> Self {
        for (name, value) in headers {
            if !name.is_empty() && !value.is_empty() {
                self.headers.insert(name.clone(), value.clone());
            }
        }
        self
    }

    /// Encode `payload` as the JSON body.
    pub fn with_json(mut self, payload: &Value) -> Result<Self> {
        self.body = Some(Bytes::from(serde_json::to_vec(payload)?));
        Ok(self)
    }

    /// Whether the request may be repeated without side effects.
    #[inline]
    pub fn is_idempotent(&self) -> bool {
        self.method == Method::GET
    }
}

/// A fully read response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// URI the request was sent to.
    pub uri: String,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response with status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        HttpResponse {
            status,
            uri: String::new(),
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Set the request URI.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Add a header to the response.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        protocol::header_value(&self.headers, name)
    }

    /// The `ETag` header, if present and non-empty.
    pub fn etag(&self) -> Option<&str> {
        self.header(constants::headers::ETAG.as_str())
            .filter(|etag| !etag.is_empty())
    }

    /// The `Location` header, if present and non-empty.
    pub fn location(&self) -> Option<&str> {
        self.header(constants::headers::LOCATION.as_str())
            .filter(|location| !location.is_empty())
    }

    /// Check if this is a successful response (2xx status).
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the service accepted the request as a long-running task.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.status == 202
    }

    /// Get the body as a UTF-8 string.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| RedfishError::Decode {
            uri: self.uri.clone(),
            message: e.to_string(),
        })
    }

    /// Turn a non-2xx response into the matching error.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RedfishError::from_status(self.status, self.uri, self.body))
        }
    }
}

/// A connection to a Redfish service.
///
/// Implementations must be safe to call concurrently; resources share one
/// transport through an `Arc<dyn Transport>`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the fully read response, whatever its status.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// The configuration this transport was built with.
    fn config(&self) -> &ClientConfig;

    /// GET `uri`; non-2xx is an error.
    async fn get(&self, uri: &str) -> Result<HttpResponse> {
        self.get_with_headers(uri, &BTreeMap::new()).await
    }

    /// GET `uri` with extra headers; non-2xx is an error.
    async fn get_with_headers(
        &self,
        uri: &str,
        headers: &BTreeMap<String, String>,
    ) -> Result<HttpResponse> {
        let request = HttpRequest::get(uri).with_headers(headers);
        self.execute(request).await?.error_for_status()
    }

    /// POST a JSON payload; non-2xx is an error, 202 is returned as is.
    async fn post(
        &self,
        uri: &str,
        payload: &Value,
        headers: &BTreeMap<String, String>,
    ) -> Result<HttpResponse> {
        let request = HttpRequest::new(Method::POST, uri)
            .with_headers(headers)
            .with_json(payload)?;
        self.execute(request).await?.error_for_status()
    }

    /// PATCH a JSON document; the response body is discarded.
    async fn patch(
        &self,
        uri: &str,
        payload: &Value,
        headers: &BTreeMap<String, String>,
    ) -> Result<()> {
        let request = HttpRequest::new(Method::PATCH, uri)
            .with_headers(headers)
            .with_json(payload)?;
        self.execute(request).await?.error_for_status()?;
        Ok(())
    }

    /// PUT a JSON payload; non-2xx is an error.
    async fn put(
        &self,
        uri: &str,
        payload: &Value,
        headers: &BTreeMap<String, String>,
    ) -> Result<HttpResponse> {
        let request = HttpRequest::new(Method::PUT, uri)
            .with_headers(headers)
            .with_json(payload)?;
        self.execute(request).await?.error_for_status()
    }

    /// DELETE `uri`; the response body is discarded.
    async fn delete(&self, uri: &str) -> Result<()> {
        self.execute(HttpRequest::delete(uri))
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_headers_skips_empty() {
        let mut headers = BTreeMap::new();
        headers.insert("If-Match".to_string(), String::new());
        headers.insert("X-Trace".to_string(), "1".to_string());
        let request = HttpRequest::get("/redfish/v1").with_headers(&headers);
        assert_eq!(request.headers.len(), 1);
        assert!(request.is_idempotent());
    }

    #[test]
    fn test_with_json() {
        let request = HttpRequest::new(Method::POST, "/a")
            .with_json(&serde_json::json!({}))
            .unwrap();
        assert_eq!(request.body.unwrap().as_ref(), b"{}");
        assert!(!HttpRequest::new(Method::POST, "/a").is_idempotent());
    }

    #[test]
    fn test_response_headers() {
        let response = HttpResponse::new(202, "")
            .with_header("location", "/redfish/v1/TaskMonitors/1")
            .with_header("ETag", "");
        assert_eq!(response.location(), Some("/redfish/v1/TaskMonitors/1"));
        assert_eq!(response.etag(), None);
        assert!(response.is_accepted());
        assert!(response.is_success());
    }

    #[test]
    fn test_error_for_status() {
        let err = HttpResponse::new(404, "gone")
            .with_uri("/x")
            .error_for_status()
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(HttpResponse::new(204, "").error_for_status().is_ok());
    }

    #[test]
    fn test_json_decode_error_carries_uri() {
        let err = HttpResponse::new(200, "{")
            .with_uri("/redfish/v1/Chassis")
            .json::<Value>()
            .unwrap_err();
        assert_eq!(err.uri(), Some("/redfish/v1/Chassis"));
    }
}
