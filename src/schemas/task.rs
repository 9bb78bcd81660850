//! Tasks tracking long-running operations.

use crate::error::Result;
use crate::resource::{Entity, LinkSlot, Resource, ResourceDefinition};
use crate::schemas::GenericResource;
use crate::types::{Health, Message};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle state of a task.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    /// Created but not yet started.
    New,
    /// Starting.
    Starting,
    /// Executing.
    Running,
    /// Stopped, may be resumed.
    Suspended,
    /// Interrupted by an outside event.
    Interrupted,
    /// Waiting for a resource or event.
    Pending,
    /// Stopping.
    Stopping,
    /// Finished successfully or with warnings.
    Completed,
    /// Terminated by a user.
    Killed,
    /// Finished with an error.
    Exception,
    /// Performing service work.
    Service,
    /// Being cancelled.
    Cancelling,
    /// Cancelled.
    Cancelled,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

impl TaskState {
    /// Whether the task can make no further progress.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Killed | TaskState::Exception | TaskState::Cancelled
        )
    }
}

/// The request that started a task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    /// Request headers.
    #[serde(rename = "HttpHeaders", skip_serializing_if = "Vec::is_empty")]
    pub http_headers: Vec<String>,
    /// Request method.
    #[serde(rename = "HttpOperation", skip_serializing_if = "Option::is_none")]
    pub http_operation: Option<String>,
    /// Request body.
    #[serde(rename = "JsonBody", skip_serializing_if = "Option::is_none")]
    pub json_body: Option<String>,
    /// Request URI.
    #[serde(rename = "TargetUri", skip_serializing_if = "Option::is_none")]
    pub target_uri: Option<String>,
}

/// A task. Read-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Task {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
    /// Completion time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Estimated duration as an ISO 8601 duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
    /// Whether the payload is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_payload: Option<bool>,
    /// Messages raised while the task ran.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
    /// The request that started the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    /// Progress in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<u32>,
    /// Start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// URI of the task monitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_monitor: Option<String>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_state: Option<TaskState>,
    /// Health of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_status: Option<Health>,
}

static TASK: ResourceDefinition = ResourceDefinition {
    type_name: "Task",
    declared_fields: &[
        "Id",
        "Name",
        "Description",
        "EndTime",
        "EstimatedDuration",
        "HidePayload",
        "Messages",
        "Oem",
        "Payload",
        "PercentComplete",
        "StartTime",
        "TaskMonitor",
        "TaskState",
        "TaskStatus",
    ],
    writable_fields: &[],
    link_slots: &[LinkSlot::plural("CreatedResources"), LinkSlot::root("SubTasks")],
    action_slots: &[],
};

impl Resource for Task {
    fn definition() -> &'static ResourceDefinition {
        &TASK
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Task {
    /// Resources created by this task.
    pub async fn created_resources(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("CreatedResources").await
    }

    /// Sub-tasks of this task.
    pub async fn sub_tasks(&self) -> Result<Vec<Task>> {
        self.entity.linked_collection("SubTasks").await
    }
}
