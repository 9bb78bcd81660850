//! Identity-only record for schemas without a dedicated type.

use crate::resource::{Entity, Resource, ResourceDefinition};
use serde::{Deserialize, Serialize};

/// Any Redfish resource, decoded down to its identity.
///
/// The links and actions of the document are not captured; fetch the
/// resource as its own record type to reach them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenericResource {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
}

static GENERIC: ResourceDefinition = ResourceDefinition {
    type_name: "Resource",
    declared_fields: &["Id", "Name", "Description"],
    writable_fields: &[],
    link_slots: &[],
    action_slots: &[],
};

impl Resource for GenericResource {
    fn definition() -> &'static ResourceDefinition {
        &GENERIC
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
