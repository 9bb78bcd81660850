//! Heaters that warm devices before or while they operate.

use crate::error::Result;
use crate::resource::{Entity, LinkSlot, Resource, ResourceDefinition};
use crate::schemas::GenericResource;
use crate::types::{Location, PhysicalContext, Status};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A heater.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Heater {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
    /// Whether the heater can be replaced while powered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_pluggable: Option<bool>,
    /// Location of the heater.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// State of the locator indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_indicator_active: Option<bool>,
    /// Manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
    /// Part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    /// Area or device the heater warms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_context: Option<PhysicalContext>,
    /// Serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Spare part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spare_part_number: Option<String>,
    /// Status and health.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

static HEATER: ResourceDefinition = ResourceDefinition {
    type_name: "Heater",
    declared_fields: &[
        "Id",
        "Name",
        "Description",
        "HotPluggable",
        "Location",
        "LocationIndicatorActive",
        "Manufacturer",
        "Model",
        "Oem",
        "PartNumber",
        "PhysicalContext",
        "SerialNumber",
        "SparePartNumber",
        "Status",
    ],
    writable_fields: &["LocationIndicatorActive"],
    link_slots: &[
        LinkSlot::plural("Managers"),
        LinkSlot::plural("Memory"),
        LinkSlot::plural("NetworkAdapters"),
        LinkSlot::plural("Processors"),
        LinkSlot::plural("StorageControllers"),
        LinkSlot::root("Assembly"),
        LinkSlot::root("Metrics"),
    ],
    action_slots: &[],
};

impl Resource for Heater {
    fn definition() -> &'static ResourceDefinition {
        &HEATER
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Heater {
    /// Assembly data of this heater.
    pub async fn assembly(&self) -> Result<Option<GenericResource>> {
        self.entity.linked("Assembly").await
    }

    /// Metrics of this heater.
    pub async fn metrics(&self) -> Result<Option<GenericResource>> {
        self.entity.linked("Metrics").await
    }

    /// Managers that contain this heater.
    pub async fn managers(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("Managers").await
    }

    /// Memory devices this heater warms.
    pub async fn memory(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("Memory").await
    }

    /// Network adapters this heater warms.
    pub async fn network_adapters(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("NetworkAdapters").await
    }

    /// Processors this heater warms.
    pub async fn processors(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("Processors").await
    }

    /// Storage controllers this heater warms.
    pub async fn storage_controllers(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("StorageControllers").await
    }
}
