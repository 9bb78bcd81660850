//! The service root at `/redfish/v1/`.

use crate::error::Result;
use crate::resource::{Entity, LinkSlot, Resource, ResourceDefinition};
use crate::schemas::{GenericResource, Task};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entry point of a Redfish service. Read-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceRoot {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
    /// Redfish protocol version the service implements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redfish_version: Option<String>,
    /// Service identifier.
    #[serde(rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Vendor of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Product the service runs on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
}

static SERVICE_ROOT: ResourceDefinition = ResourceDefinition {
    type_name: "ServiceRoot",
    declared_fields: &[
        "Id",
        "Name",
        "Description",
        "RedfishVersion",
        "UUID",
        "Vendor",
        "Product",
        "Oem",
    ],
    writable_fields: &[],
    link_slots: &[
        LinkSlot::root("Systems"),
        LinkSlot::root("Chassis"),
        LinkSlot::root("Managers"),
        LinkSlot::root("StorageServices"),
        LinkSlot::root("Tasks"),
    ],
    action_slots: &[],
};

impl Resource for ServiceRoot {
    fn definition() -> &'static ResourceDefinition {
        &SERVICE_ROOT
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl ServiceRoot {
    /// Computer systems.
    pub async fn systems(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_collection("Systems").await
    }

    /// Chassis.
    pub async fn chassis(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_collection("Chassis").await
    }

    /// Managers.
    pub async fn managers(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_collection("Managers").await
    }

    /// Swordfish storage services.
    pub async fn storage_services(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_collection("StorageServices").await
    }

    /// Tasks known to the task service.
    pub async fn tasks(&self) -> Result<Vec<Task>> {
        self.entity.linked_collection("Tasks").await
    }
}
