//! Utility functions for the Redfish HTTP client.
//!
//! This module provides helper functions for:
//! - Status code classification
//! - Retry logic with exponential backoff
//! - Resolving service-relative URIs against the endpoint

use crate::error::{RedfishError, Result};
use std::time::Duration;
use url::Url;

/// Check if status code indicates retryable error
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 425 | 429 | 502 | 503 | 504)
}

/// Check if status code indicates access denied
pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Exponential backoff delay calculation
pub fn exponential_backoff(attempt: u32, base_ms: u64) -> Duration {
    let delay_ms = base_ms.saturating_mul(2_u64.pow(attempt.min(10)));
    Duration::from_millis(delay_ms)
}

/// Resolve `uri` against the service endpoint.
///
/// Absolute URIs are used as given. Service-relative URIs are appended to the
/// endpoint, keeping any path prefix the endpoint carries.
///
/// # Examples
///
/// ```
/// use redfish_client::client::resolve_uri;
///
/// let url = resolve_uri("https://bmc:8443", "/redfish/v1/Chassis").unwrap();
/// assert_eq!(url, "https://bmc:8443/redfish/v1/Chassis");
///
/// let url = resolve_uri("https://bmc", "https://other/redfish/v1").unwrap();
/// assert_eq!(url, "https://other/redfish/v1");
/// ```
pub fn resolve_uri(endpoint: &str, uri: &str) -> Result<String> {
    if uri.is_empty() {
        return Err(RedfishError::Protocol(
            "unable to execute request, no target provided".to_string(),
        ));
    }

    if let Ok(absolute) = Url::parse(uri) {
        return Ok(absolute.to_string());
    }

    let joined = if uri.starts_with('/') {
        format!("{}{}", endpoint.trim_end_matches('/'), uri)
    } else {
        format!("{}/{}", endpoint.trim_end_matches('/'), uri)
    };

    Url::parse(&joined)
        .map(|url| url.to_string())
        .map_err(|e| RedfishError::Protocol(format!("invalid target URI '{}': {}", uri, e)))
}
