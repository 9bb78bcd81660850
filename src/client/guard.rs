//! Scoped release of HTTP response bodies.
//!
//! A [`ResponseGuard`] is attached to a response the moment it arrives, before
//! any branch that could return. Whatever happens next (a decode failure, an
//! error status, a cancelled future) the guard releases the body and the
//! connection behind it when it goes out of scope.
//!
//! Each guard registers itself in an [`OpenResponses`] counter shared with the
//! client, so leaks are observable: once every call has returned, the count is
//! back to zero.
//!
//! ```
//! use redfish_client::client::{OpenResponses, ResponseGuard};
//!
//! let open = OpenResponses::default();
//! let mut guard = ResponseGuard::absent(&open);
//! guard.release();
//! guard.release();
//! assert_eq!(open.count(), 0);
//! ```

use crate::error::{RedfishError, Result};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counter of response bodies that have not been released yet.
#[derive(Clone, Debug, Default)]
pub struct OpenResponses(Arc<AtomicUsize>);

impl OpenResponses {
    /// Number of live guards holding an unreleased body.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn acquire(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Owns a response until its body has been consumed or dropped.
///
/// Release is idempotent and safe on an absent response, so cleanup code can
/// be unconditional.
#[derive(Debug)]
pub struct ResponseGuard {
    response: Option<reqwest::Response>,
    open: OpenResponses,
    released: bool,
}

impl ResponseGuard {
    /// Guard a response.
    pub fn new(response: reqwest::Response, open: &OpenResponses) -> Self {
        open.acquire();
        ResponseGuard {
            response: Some(response),
            open: open.clone(),
            released: false,
        }
    }

    /// A guard with nothing to release.
    pub fn absent(open: &OpenResponses) -> Self {
        ResponseGuard {
            response: None,
            open: open.clone(),
            released: true,
        }
    }

    /// Status of the guarded response.
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status().as_u16())
    }

    /// Headers of the guarded response; values that are not visible ASCII are skipped.
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if let Some(response) = &self.response {
            for (k, v) in response.headers() {
                if let Ok(val) = v.to_str() {
                    headers.insert(k.as_str().to_string(), val.to_string());
                }
            }
        }
        headers
    }

    /// Read the whole body, then release.
    ///
    /// If the returned future is dropped before completing, the body is still
    /// released when the guard goes out of scope.
    pub async fn bytes(&mut self) -> Result<Bytes> {
        let response = self
            .response
            .take()
            .ok_or_else(|| RedfishError::InvalidState("response body already consumed".to_string()))?;
        let body = response.bytes().await;
        self.release();
        Ok(body?)
    }

    /// Drop the body without reading it. Calling this more than once is fine.
    pub fn release(&mut self) {
        self.response = None;
        if !self.released {
            self.released = true;
            self.open.release();
        }
    }

    /// Whether the body has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for ResponseGuard {
    fn drop(&mut self) {
        self.release();
    }
}
