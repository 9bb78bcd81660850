//! Error types for Redfish client operations.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is
//! the single [`RedfishError`] enum.
//!
//! # Error Categories
//!
//! | Category | Variants | Retryable |
//! |----------|----------|-----------|
//! | Network | `Transport`, `Timeout` | Yes |
//! | Service | `HttpStatus`, `NotFound` | 408, 425, 429, 502, 503, 504 only |
//! | Decoding | `Decode`, `Json` | No |
//! | Protocol | `Protocol` | No |
//! | Caller | `InvalidState`, `Config`, `Cancelled` | No |
//! | Plural fetch | `Member` | Same as the wrapped error |
//!
//! Errors carry the offending URI when it is known, the HTTP status when it is
//! known, and the service's error payload bytes verbatim.
//!
//! # Examples
//!
//! ```
//! use redfish_client::RedfishError;
//!
//! let err = RedfishError::from_status(404, "/redfish/v1/Chassis/1", "");
//! assert!(err.is_not_found());
//! assert_eq!(err.status(), Some(404));
//!
//! let err = RedfishError::from_status(503, "/redfish/v1/Chassis/1", "busy");
//! assert!(err.is_retryable());
//! ```

use crate::client::{is_access_denied_status, is_retryable_status};
use crate::types::Message;
use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;

/// Result type for Redfish client operations.
pub type Result<T> = std::result::Result<T, RedfishError>;

/// Errors that can occur while talking to a Redfish service.
#[derive(Error, Debug)]
pub enum RedfishError {
    /// Connection, TLS or DNS failure, or any other failure below HTTP.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request was cancelled through a [`CancelHandle`](crate::client::CancelHandle).
    #[error("request cancelled")]
    Cancelled,

    /// The service answered with a non-2xx status other than 404.
    #[error("HTTP {status} from {uri}: {}", body_text(.body))]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// URI of the failed request.
        uri: String,
        /// Error payload exactly as the service sent it.
        body: Bytes,
    },

    /// The service answered 404.
    ///
    /// Link accessors translate this into an absent value.
    #[error("resource not found: {uri}")]
    NotFound {
        /// URI of the failed request.
        uri: String,
        /// Error payload exactly as the service sent it.
        body: Bytes,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode response from {uri}: {message}")]
    Decode {
        /// URI the body was fetched from.
        uri: String,
        /// Decoder message.
        message: String,
    },

    /// JSON encoding or decoding failed outside of a response context.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response status class does not fit the call shape.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The operation is not valid for the resource in its current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// One element of a plural fetch failed.
    #[error("failed to fetch {uri}: {source}")]
    Member {
        /// URI of the element that failed.
        uri: String,
        /// The underlying failure.
        source: Box<RedfishError>,
    },
}

fn body_text(body: &Bytes) -> String {
    String::from_utf8_lossy(body).into_owned()
}

impl RedfishError {
    /// Build the error for a non-2xx response, distinguishing 404.
    pub fn from_status(status: u16, uri: impl Into<String>, body: impl Into<Bytes>) -> Self {
        let uri = uri.into();
        let body = body.into();
        if status == 404 {
            RedfishError::NotFound { uri, body }
        } else {
            RedfishError::HttpStatus { status, uri, body }
        }
    }

    /// Wrap an error with the URI of the plural-fetch element it belongs to.
    pub fn for_member(uri: impl Into<String>, source: RedfishError) -> Self {
        RedfishError::Member {
            uri: uri.into(),
            source: Box::new(source),
        }
    }

    /// HTTP status associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            RedfishError::HttpStatus { status, .. } => Some(*status),
            RedfishError::NotFound { .. } => Some(404),
            RedfishError::Member { source, .. } => source.status(),
            _ => None,
        }
    }

    /// URI the error refers to, if known.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        match self {
            RedfishError::HttpStatus { uri, .. }
            | RedfishError::NotFound { uri, .. }
            | RedfishError::Decode { uri, .. }
            | RedfishError::Member { uri, .. } => Some(uri),
            _ => None,
        }
    }

    /// Error payload bytes as sent by the service.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            RedfishError::HttpStatus { body, .. } | RedfishError::NotFound { body, .. } => {
                Some(body)
            }
            RedfishError::Member { source, .. } => source.body(),
            _ => None,
        }
    }

    /// Check whether this is a 404, looking through plural-fetch wrappers.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if the service refused the credentials or the operation (401/403).
    #[inline]
    pub fn is_access_denied(&self) -> bool {
        self.status().is_some_and(is_access_denied_status)
    }

    /// Check if this error is worth retrying.
    ///
    /// Timeouts and transport failures are retryable, as are HTTP 408, 425,
    /// 429, 502, 503 and 504.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            RedfishError::Timeout | RedfishError::Transport(_) => true,
            RedfishError::HttpStatus { status, .. } => is_retryable_status(*status),
            RedfishError::Member { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// Parse the payload as a Redfish error object.
    ///
    /// Returns `None` when there is no payload or it is not a Redfish
    /// `{"error": {...}}` document; [`body`](Self::body) still has the raw bytes.
    #[must_use]
    pub fn service_error(&self) -> Option<ServiceError> {
        #[derive(Deserialize)]
        struct Envelope {
            error: ServiceError,
        }

        let body = self.body()?;
        serde_json::from_slice::<Envelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }
}

impl From<reqwest::Error> for RedfishError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RedfishError::Timeout
        } else {
            RedfishError::Transport(err.to_string())
        }
    }
}

/// The Redfish error object a service returns with 4xx/5xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceError {
    /// A MessageId from the message registry.
    #[serde(default)]
    pub code: String,
    /// Human readable message for `code`.
    #[serde(default)]
    pub message: String,
    /// Detailed messages.
    #[serde(rename = "@Message.ExtendedInfo", default)]
    pub extended_info: Vec<Message>,
}
