//! Cooperative cancellation of in-flight requests.
//!
//! Every request a [`RedfishClient`](crate::client::RedfishClient) issues races
//! against its cancel signal. A cancelled request releases its response and
//! fails with [`RedfishError::Cancelled`](crate::RedfishError::Cancelled); no
//! resource is produced from a half-read body.
//!
//! Cancellation is sticky: once [`cancel`](CancelHandle::cancel) is called,
//! every subsequent request fails until [`reset`](CancelHandle::reset).

use std::sync::Arc;
use tokio::sync::watch;

/// Handle that cancels the requests of one client and its clones.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    signal: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Create a handle in the not-cancelled state.
    pub fn new() -> Self {
        let (signal, _) = watch::channel(false);
        CancelHandle {
            signal: Arc::new(signal),
        }
    }

    /// Cancel all in-flight and future requests.
    pub fn cancel(&self) {
        self.signal.send_replace(true);
    }

    /// Allow requests again.
    pub fn reset(&self) {
        self.signal.send_replace(false);
    }

    /// Whether cancellation is in effect.
    pub fn is_cancelled(&self) -> bool {
        *self.signal.borrow()
    }

    /// Resolve once cancellation is in effect.
    pub async fn cancelled(&self) {
        let mut receiver = self.signal.subscribe();
        // The sender lives as long as `self`, so this only ends on cancellation.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cancel_and_reset() {
        let handle = CancelHandle::new();
        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(handle.clone().is_cancelled());
        handle.reset();
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn test_already_cancelled_resolves_immediately() {
        let handle = CancelHandle::new();
        handle.cancel();
        tokio_test::block_on(handle.cancelled());
        assert!(handle.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves() {
        let handle = CancelHandle::new();
        let waiter = handle.clone();
        let task = tokio::spawn(async move { waiter.cancelled().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.cancel();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_pending_until_cancel() {
        let handle = CancelHandle::new();
        let result = tokio::time::timeout(Duration::from_millis(20), handle.cancelled()).await;
        assert!(result.is_err());
    }
}
