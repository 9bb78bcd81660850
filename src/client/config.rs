//! Configuration for the Redfish HTTP client.
//!
//! # Configuration Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `endpoint` | `""` | Service base URL, must start with `http` |
//! | `username` / `password` | `None` | Optional basic credentials |
//! | `insecure` | `false` | Skip TLS certificate verification |
//! | `request_timeout_ms` | 30000 | Per-request timeout |
//! | `max_retries` | 3 | Retries for retryable GET failures |
//! | `retry_delay_ms` | 1000 | Base delay between retries |
//! | `max_concurrent_requests` | 3 | In-flight bound for plural fetches |
//! | `enable_logging` | `false` | Per-request `tracing` output |
//! | `patch_content_type` | `application/json` | Content-Type for PATCH |
//! | `user_agent` | `redfish_client/<version>` | User-Agent header |
//! | `strip_etag_quotes` | `false` | Send unquoted ETags in `If-Match` |
//! | `disable_etag_match` | `false` | Never send `If-Match` |
//! | `proxy_url` | `""` | Optional proxy |
//!
//! # Examples
//!
//! ```
//! use redfish_client::client::ClientConfig;
//!
//! let config = ClientConfig {
//!     endpoint: "https://bmc.example.com".to_string(),
//!     max_retries: 5,
//!     ..Default::default()
//! };
//! assert_eq!(config.retry_delay_ms, 1000);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{RedfishError, Result};
use crate::protocol::constants::APPLICATION_JSON;

/// Configuration for the Redfish HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `https://10.0.0.5`.
    ///
    /// Service-relative URIs such as `/redfish/v1/Chassis` are appended to it.
    pub endpoint: String,

    /// Optional user name for HTTP basic authentication.
    pub username: Option<String>,

    /// Password paired with `username`.
    pub password: Option<String>,

    /// Accept invalid TLS certificates.
    pub insecure: bool,

    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,

    /// Maximum retries for failed GET requests.
    ///
    /// Only idempotent reads are retried; POST and PATCH never are.
    pub max_retries: u32,

    /// Base retry delay in milliseconds.
    ///
    /// The actual delay uses exponential backoff: `delay = base * 2^attempt`.
    pub retry_delay_ms: u64,

    /// Maximum requests in flight while resolving plural links and collections.
    ///
    /// Results are always returned in input order regardless of this value.
    pub max_concurrent_requests: usize,

    /// Enable request logging.
    ///
    /// When enabled, logs request/response details using the `tracing` crate.
    pub enable_logging: bool,

    /// Content-Type sent with PATCH bodies.
    pub patch_content_type: String,

    /// User-Agent sent with every request.
    pub user_agent: String,

    /// Strip the quotes of an ETag before sending it in `If-Match`.
    pub strip_etag_quotes: bool,

    /// Never send `If-Match`, for services that mishandle it.
    pub disable_etag_match: bool,

    /// Proxy URL (optional).
    pub proxy_url: String,
}

impl ClientConfig {
    /// Create a default configuration for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        ClientConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set basic authentication credentials.
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Check the configuration for obvious mistakes.
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http") {
            return Err(RedfishError::Config(format!(
                "endpoint must start with http or https, got '{}'",
                self.endpoint
            )));
        }
        if url::Url::parse(&self.endpoint).is_err() {
            return Err(RedfishError::Config(format!(
                "endpoint is not a valid URL: '{}'",
                self.endpoint
            )));
        }
        if self.max_concurrent_requests == 0 {
            return Err(RedfishError::Config(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: String::new(),
            username: None,
            password: None,
            insecure: false,
            request_timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
            max_concurrent_requests: 3,
            enable_logging: false,
            patch_content_type: APPLICATION_JSON.to_string(),
            user_agent: concat!("redfish_client/", env!("CARGO_PKG_VERSION")).to_string(),
            strip_etag_quotes: false,
            disable_etag_match: false,
            proxy_url: String::new(),
        }
    }
}
