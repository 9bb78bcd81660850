//! Redfish HTTP client implementation.
//!
//! This module provides the transport every resource talks through, enabling
//! resources to:
//!
//! - **Fetch documents** with GET, retried with exponential backoff
//! - **Submit changes** with PATCH, PUT and DELETE
//! - **Invoke actions** with POST, including 202 task responses
//! - **Release every response body** on success, error and cancellation
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── transport - Transport trait, HttpRequest and HttpResponse
//! ├── fetch     - RedfishClient and HTTP operations
//! ├── guard     - Scoped response release
//! ├── cancel    - Cooperative cancellation
//! ├── config    - Client configuration
//! └── utils     - Utility functions
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Transport`] | The seam resources use, object safe |
//! | [`RedfishClient`] | `reqwest` implementation of [`Transport`] |
//! | [`ResponseGuard`] | Releases a response body when dropped |
//! | [`CancelHandle`] | Cancels in-flight requests |
//! | [`ClientConfig`] | Client configuration options |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use redfish_client::client::{ClientConfig, RedfishClient};
//!
//! // Default configuration
//! let client = RedfishClient::new(ClientConfig::new("https://10.0.0.5")).unwrap();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     endpoint: "https://10.0.0.5".to_string(),
//!     max_retries: 5,
//!     retry_delay_ms: 2000,
//!     ..Default::default()
//! };
//! let client = RedfishClient::new(config).unwrap();
//! assert_eq!(client.open_responses(), 0);
//! ```
//!
//! ## Utility Functions
//!
//! ```
//! use redfish_client::client::{exponential_backoff, is_retryable_status};
//! use std::time::Duration;
//!
//! // Check if status is retryable
//! assert!(is_retryable_status(503));
//! assert!(!is_retryable_status(404));
//!
//! // Calculate backoff delay
//! let delay = exponential_backoff(2, 100);
//! assert_eq!(delay, Duration::from_millis(400));
//! ```

mod cancel;
mod config;
mod fetch;
mod guard;
mod transport;
mod utils;

pub use cancel::CancelHandle;
pub use config::ClientConfig;
pub use fetch::RedfishClient;
pub use guard::{OpenResponses, ResponseGuard};
pub use transport::{HttpRequest, HttpResponse, Transport};
pub use utils::*;
