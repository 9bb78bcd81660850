//! Handles for long-running actions.
//!
//! When the service answers an action with 202, the `Location` header names a
//! task monitor. [`TaskMonitor`] keeps that URI, the time the service asked us
//! to wait until (`Retry-After`) and the task document if one came with the
//! 202. Its one operation is [`poll`](TaskMonitor::poll); the polling loop
//! belongs to the caller.
//!
//! ```ignore
//! use redfish_client::action::TaskStatus;
//!
//! if let Some(monitor) = battery.self_test().await? {
//!     loop {
//!         match monitor.poll().await? {
//!             TaskStatus::Running(_) => tokio::time::sleep(std::time::Duration::from_secs(1)).await,
//!             TaskStatus::Done(response) => break,
//!             TaskStatus::Failed(err) => return Err(err.into()),
//!         }
//!     }
//! }
//! ```

use crate::client::{HttpRequest, HttpResponse, Transport};
use crate::error::{RedfishError, Result};
use crate::protocol::{classify_status, constants, parse_retry_after, StatusClass};
use crate::resource::decode_resource;
use crate::schemas::Task;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Result of one poll of a task monitor.
#[derive(Debug)]
pub enum TaskStatus {
    /// The task is still running; the service may report its progress.
    Running(Option<Task>),
    /// The task finished; this is the final response of the operation.
    Done(HttpResponse),
    /// The task finished with an error status.
    Failed(RedfishError),
}

/// A pollable handle on a long-running operation.
#[derive(Clone)]
pub struct TaskMonitor {
    uri: String,
    headers: BTreeMap<String, String>,
    retry_after: Option<DateTime<Utc>>,
    task: Option<Task>,
    client: Arc<dyn Transport>,
}

impl TaskMonitor {
    /// Build a monitor from a 202 response.
    ///
    /// Fails with a `Protocol` error when the response has no `Location`.
    pub fn from_response(client: Arc<dyn Transport>, response: &HttpResponse) -> Result<Self> {
        let uri = response
            .location()
            .ok_or_else(|| {
                RedfishError::Protocol(format!(
                    "{} answered 202 without a Location header",
                    response.uri
                ))
            })?
            .to_string();

        let retry_after = response
            .header(constants::headers::RETRY_AFTER.as_str())
            .and_then(|value| parse_retry_after(value).ok());

        let task = decode_task(&client, response);

        Ok(TaskMonitor {
            uri,
            headers: response.headers.clone(),
            retry_after,
            task,
            client,
        })
    }

    /// URI of the task monitor.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Headers of the 202 response.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Earliest time the service wants to be polled, if it said.
    pub fn retry_after(&self) -> Option<DateTime<Utc>> {
        self.retry_after
    }

    /// Task document sent with the 202, if any.
    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    /// Ask the service for the state of the task.
    ///
    /// `Err` means the poll itself failed (transport, cancellation); a task
    /// that failed is `Ok(TaskStatus::Failed(_))`.
    pub async fn poll(&self) -> Result<TaskStatus> {
        let response = self.client.execute(HttpRequest::get(&self.uri)).await?;
        let status = match classify_status(response.status) {
            StatusClass::Accepted => TaskStatus::Running(decode_task(&self.client, &response)),
            StatusClass::Success => TaskStatus::Done(response),
            StatusClass::Failure => TaskStatus::Failed(RedfishError::from_status(
                response.status,
                response.uri,
                response.body,
            )),
        };
        Ok(status)
    }
}

fn decode_task(client: &Arc<dyn Transport>, response: &HttpResponse) -> Option<Task> {
    if response.body.is_empty() {
        return None;
    }
    let mut task: Task = decode_resource(&response.body, &response.uri).ok()?;
    task.entity.set_client(client.clone());
    Some(task)
}

impl fmt::Debug for TaskMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskMonitor")
            .field("uri", &self.uri)
            .field("retry_after", &self.retry_after)
            .field("task", &self.task)
            .finish()
    }
}
