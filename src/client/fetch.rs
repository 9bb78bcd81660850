//! Main Redfish HTTP client implementation.
//!
//! Provides [`RedfishClient`], the [`Transport`] that talks to a live service
//! over `reqwest`.
//!
//! # Examples
//!
//! ## Connecting
//!
//! ```ignore
//! use redfish_client::{ClientConfig, RedfishClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://10.0.0.5").with_credentials("admin", "secret");
//!     let (client, root) = RedfishClient::connect(config).await?;
//!     println!("Redfish {}", root.redfish_version.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Fetching and updating a resource
//!
//! ```ignore
//! use redfish_client::schemas::Heater;
//! use redfish_client::Resource;
//!
//! let transport = client.shared();
//! if let Some(mut heater) = Heater::get(&transport, "/redfish/v1/Chassis/1/ThermalSubsystem/Heaters/1").await? {
//!     heater.location_indicator_active = Some(true);
//!     heater.update().await?;
//! }
//! ```
//!
//! ## Cancelling in-flight requests
//!
//! ```ignore
//! let cancel = client.cancel_handle();
//! tokio::spawn(async move { cancel.cancel() });
//! ```

use crate::client::{
    exponential_backoff, is_retryable_status, resolve_uri, CancelHandle, ClientConfig,
    HttpRequest, HttpResponse, OpenResponses, ResponseGuard, Transport,
};
use crate::error::{RedfishError, Result};
use crate::protocol::constants::{APPLICATION_JSON, SERVICE_ROOT};
use crate::resource::Resource;
use crate::schemas::ServiceRoot;
use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use http::Method;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// The Redfish HTTP client.
///
/// Cheap to clone; clones share the connection pool, the open-response
/// counter and the cancel handle.
///
/// # Features
///
/// - Basic authentication and TLS options from [`ClientConfig`]
/// - Automatic retry of GET with exponential backoff
/// - Cancellation of every in-flight request through one [`CancelHandle`]
/// - Response bodies released on every exit path
#[derive(Clone)]
pub struct RedfishClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
    open: OpenResponses,
    cancel: CancelHandle,
}

impl RedfishClient {
    /// Create a client; fails if the configuration is invalid.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .pool_idle_timeout(Duration::from_secs(90))
            .danger_accept_invalid_certs(config.insecure);

        if !config.proxy_url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.proxy_url)
                .map_err(|e| RedfishError::Config(format!("invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| RedfishError::Config(e.to_string()))?;

        Ok(RedfishClient {
            client,
            config: Arc::new(config),
            open: OpenResponses::default(),
            cancel: CancelHandle::new(),
        })
    }

    /// Create a client and fetch the service root.
    pub async fn connect(config: ClientConfig) -> Result<(Self, ServiceRoot)> {
        let client = Self::new(config)?;
        let root = client.service_root().await?;
        Ok((client, root))
    }

    /// Fetch the service root at `/redfish/v1/`.
    pub async fn service_root(&self) -> Result<ServiceRoot> {
        ServiceRoot::get(&self.shared(), SERVICE_ROOT)
            .await?
            .ok_or_else(|| RedfishError::InvalidState("service root has no URI".to_string()))
    }

    /// This client as the shared transport resources attach to.
    pub fn shared(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    /// Number of response bodies currently held open.
    pub fn open_responses(&self) -> usize {
        self.open.count()
    }

    /// Handle that cancels this client's requests.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Internal execute with retry logic
    async fn execute_with_retries(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut attempt = 0;
        loop {
            let result = self.execute_once(request).await;
            let retry = request.is_idempotent()
                && attempt < self.config.max_retries
                && match &result {
                    Ok(response) => is_retryable_status(response.status),
                    Err(e) => e.is_retryable(),
                };
            if !retry {
                return result;
            }

            let delay = exponential_backoff(attempt, self.config.retry_delay_ms);
            if self.config.enable_logging {
                match &result {
                    Ok(response) => tracing::warn!(
                        "{} {} returned {} (attempt {}), retrying after {:?}",
                        request.method,
                        request.uri,
                        response.status,
                        attempt + 1,
                        delay
                    ),
                    Err(e) => tracing::warn!(
                        "{} {} failed (attempt {}), retrying after {:?}: {}",
                        request.method,
                        request.uri,
                        attempt + 1,
                        delay,
                        e
                    ),
                }
            }
            sleep(delay).await;
            attempt += 1;
        }
    }

    /// Internal execute implementation
    async fn execute_once(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = resolve_uri(&self.config.endpoint, &request.uri)?;

        let mut req_builder = self
            .client
            .request(request.method.clone(), &url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(ACCEPT, APPLICATION_JSON);

        if let Some(username) = &self.config.username {
            req_builder = req_builder.basic_auth(username, self.config.password.as_ref());
        }

        for (k, v) in &request.headers {
            req_builder = req_builder.header(k.as_str(), v.as_str());
        }

        if let Some(body) = &request.body {
            let content_type = if request.method == Method::PATCH {
                self.config.patch_content_type.as_str()
            } else {
                APPLICATION_JSON
            };
            if self.config.enable_logging {
                tracing::trace!(
                    "{} {} body: {}",
                    request.method,
                    request.uri,
                    String::from_utf8_lossy(body)
                );
            }
            req_builder = req_builder.header(CONTENT_TYPE, content_type).body(body.clone());
        }

        let response = req_builder.send().await?;
        let mut guard = ResponseGuard::new(response, &self.open);

        let status = guard.status().unwrap_or_default();
        let headers = guard.headers();
        let body = guard.bytes().await?;

        if self.config.enable_logging {
            tracing::debug!("{} {} -> {}", request.method, request.uri, status);
        }

        Ok(HttpResponse {
            status,
            uri: request.uri.clone(),
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for RedfishClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedfishClient")
            .field("endpoint", &self.config.endpoint)
            .field("open_responses", &self.open.count())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

#[async_trait]
impl Transport for RedfishClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        if self.cancel.is_cancelled() {
            return Err(RedfishError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                if self.config.enable_logging {
                    tracing::debug!("{} {} cancelled", request.method, request.uri);
                }
                Err(RedfishError::Cancelled)
            }
            result = self.execute_with_retries(&request) => result,
        }
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
