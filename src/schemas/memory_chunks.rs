//! Memory chunks carved out of a memory domain.

use crate::client::Transport;
use crate::collection;
use crate::error::Result;
use crate::resource::{Entity, LinkSlot, Resource, ResourceDefinition};
use crate::schemas::GenericResource;
use crate::types::{Link, Status};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Kind of address range a chunk maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressRangeType {
    /// Volatile memory.
    Volatile,
    /// Byte accessible persistent memory.
    #[serde(rename = "PMEM")]
    Pmem,
    /// Block accessible memory.
    Block,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Where the media backing a chunk lives.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaLocation {
    /// Attached to the local system.
    Local,
    /// Provided by a remote system.
    Remote,
    /// Both local and remote.
    Mixed,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Operational state of a chunk.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationalState {
    /// Online.
    Online,
    /// Offline.
    Offline,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// One interleave set of a memory chunk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InterleaveSet {
    /// The memory device this set uses.
    #[serde(skip_serializing_if = "Link::is_empty")]
    pub memory: Link,
    /// Level of this set in a multi-level interleave.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_level: Option<i64>,
    /// Offset within the device in MiB.
    #[serde(rename = "OffsetMiB", skip_serializing_if = "Option::is_none")]
    pub offset_mib: Option<i64>,
    /// Region of the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    /// Size in MiB.
    #[serde(rename = "SizeMiB", skip_serializing_if = "Option::is_none")]
    pub size_mib: Option<i64>,
}

impl InterleaveSet {
    /// Fetch the memory device; `None` when the set names none.
    pub async fn memory(&self, client: &Arc<dyn Transport>) -> Result<Option<GenericResource>> {
        collection::get_optional(client, self.memory.uri()).await
    }
}

/// A memory chunk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MemoryChunks {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
    /// Offset of the chunk in the memory domain, in MiB.
    #[serde(rename = "AddressRangeOffsetMiB", skip_serializing_if = "Option::is_none")]
    pub address_range_offset_mib: Option<i64>,
    /// Kind of address range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_range_type: Option<AddressRangeType>,
    /// User-assigned name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Interleave sets making up the chunk.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interleave_sets: Vec<InterleaveSet>,
    /// Whether mirroring is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mirror_enabled: Option<bool>,
    /// Whether the chunk is a spare.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spare: Option<bool>,
    /// Where the backing media lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_location: Option<MediaLocation>,
    /// Size of the chunk in MiB.
    #[serde(rename = "MemoryChunkSizeMiB", skip_serializing_if = "Option::is_none")]
    pub memory_chunk_size_mib: Option<i64>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
    /// Operational state requested by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_operational_state: Option<OperationalState>,
    /// Status and health.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

static MEMORY_CHUNKS: ResourceDefinition = ResourceDefinition {
    type_name: "MemoryChunks",
    declared_fields: &[
        "Id",
        "Name",
        "Description",
        "AddressRangeOffsetMiB",
        "AddressRangeType",
        "DisplayName",
        "InterleaveSets",
        "IsMirrorEnabled",
        "IsSpare",
        "MediaLocation",
        "MemoryChunkSizeMiB",
        "Oem",
        "RequestedOperationalState",
        "Status",
    ],
    writable_fields: &["DisplayName", "MediaLocation", "RequestedOperationalState"],
    link_slots: &[
        LinkSlot::plural("CXLLogicalDevices"),
        LinkSlot::plural("Endpoints"),
        LinkSlot::plural("MemoryRegions"),
    ],
    action_slots: &[],
};

impl Resource for MemoryChunks {
    fn definition() -> &'static ResourceDefinition {
        &MEMORY_CHUNKS
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl MemoryChunks {
    /// CXL logical devices associated with this chunk.
    pub async fn cxl_logical_devices(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("CXLLogicalDevices").await
    }

    /// Endpoints associated with this chunk.
    pub async fn endpoints(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("Endpoints").await
    }

    /// Memory regions making up this chunk.
    pub async fn memory_regions(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("MemoryRegions").await
    }
}
