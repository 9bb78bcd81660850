//! The resource substrate shared by every schema record.
//!
//! # Module Organization
//!
//! ```text
//! resource/
//! ├── definition - Static per-type tables: fields, writable subset, link and action slots
//! ├── envelope   - Document decoding into record + links + actions + raw bytes
//! ├── entity     - Identity, attached client, headers, link and action helpers
//! └── update     - Minimal PATCH computation and commit
//! ```
//!
//! # Implementing a record
//!
//! ```
//! use redfish_client::resource::{Entity, LinkSlot, Resource, ResourceDefinition};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase", default)]
//! pub struct Fan {
//!     #[serde(flatten)]
//!     pub entity: Entity,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub location_indicator_active: Option<bool>,
//! }
//!
//! static FAN: ResourceDefinition = ResourceDefinition {
//!     type_name: "Fan",
//!     declared_fields: &["Id", "Name", "LocationIndicatorActive"],
//!     writable_fields: &["LocationIndicatorActive"],
//!     link_slots: &[LinkSlot::root("Assembly")],
//!     action_slots: &[],
//! };
//!
//! impl Resource for Fan {
//!     fn definition() -> &'static ResourceDefinition {
//!         &FAN
//!     }
//!     fn entity(&self) -> &Entity {
//!         &self.entity
//!     }
//!     fn entity_mut(&mut self) -> &mut Entity {
//!         &mut self.entity
//!     }
//! }
//! ```

mod definition;
mod entity;
mod envelope;
mod update;

pub use definition::{Cardinality, LinkPlacement, LinkSlot, ResourceDefinition};
pub use entity::Entity;
pub use envelope::{decode_resource, decode_value, Envelope};
pub use update::patch_payload;

use crate::client::Transport;
use crate::collection;
use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// A typed Redfish resource.
///
/// Implementors supply their [`ResourceDefinition`] and access to their
/// [`Entity`]; fetching, listing and updating come for free.
#[async_trait]
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + Sized + 'static {
    /// The static definition of this type.
    fn definition() -> &'static ResourceDefinition;

    /// Common identity and plumbing.
    fn entity(&self) -> &Entity;

    /// Mutable access to the common identity and plumbing.
    fn entity_mut(&mut self) -> &mut Entity;

    /// The body [`update`](Resource::update) would send; empty when nothing changed.
    fn patch_payload(&self) -> Result<Map<String, Value>> {
        update::patch_payload(self)
    }

    /// Commit local changes to writable properties.
    ///
    /// Issues no request when nothing changed.
    async fn update(&mut self) -> Result<()> {
        update::commit(self).await
    }

    /// Fetch the resource at `uri`; `None` for an empty URI.
    async fn get(client: &Arc<dyn Transport>, uri: &str) -> Result<Option<Self>> {
        collection::get_one(client, uri).await
    }

    /// Fetch every member of the collection at `uri`, in page order.
    async fn list(client: &Arc<dyn Transport>, uri: &str) -> Result<Vec<Self>> {
        collection::get_collection(client, uri).await
    }
}
