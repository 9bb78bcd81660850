//! Per-type resource definitions.
//!
//! A [`ResourceDefinition`] is a static table describing one resource type:
//! its declared fields, the subset of them a PATCH may carry, where its
//! links live and which actions it publishes. One envelope decoder and one
//! update engine serve every type by reading this table.
//!
//! ```
//! use redfish_client::resource::{LinkSlot, ResourceDefinition};
//!
//! static DEFINITION: ResourceDefinition = ResourceDefinition {
//!     type_name: "Heater",
//!     declared_fields: &["Id", "Name", "LocationIndicatorActive"],
//!     writable_fields: &["LocationIndicatorActive"],
//!     link_slots: &[LinkSlot::plural("Managers"), LinkSlot::root("Metrics")],
//!     action_slots: &[],
//! };
//!
//! assert!(DEFINITION.is_mutable());
//! assert!(DEFINITION.is_writable("LocationIndicatorActive"));
//! assert!(!DEFINITION.is_writable("Name"));
//! assert!(DEFINITION.validate().is_ok());
//! ```

use crate::error::{RedfishError, Result};
use crate::protocol;
use std::collections::BTreeSet;

/// Whether a link names one target or many.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// `{"@odata.id": ...}`
    Single,
    /// `[{"@odata.id": ...}, ...]`
    Plural,
}

/// Where in the document a link is published.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkPlacement {
    /// Inside the `Links` sub-object.
    Links,
    /// At the top level of the document, like `Metrics` or a sub-collection.
    Root,
}

/// One named link of a resource type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkSlot {
    /// JSON property name.
    pub name: &'static str,
    /// One target or many.
    pub cardinality: Cardinality,
    /// Location in the document.
    pub placement: LinkPlacement,
}

impl LinkSlot {
    /// A single link under `Links`.
    pub const fn single(name: &'static str) -> Self {
        LinkSlot {
            name,
            cardinality: Cardinality::Single,
            placement: LinkPlacement::Links,
        }
    }

    /// A plural link under `Links`.
    pub const fn plural(name: &'static str) -> Self {
        LinkSlot {
            name,
            cardinality: Cardinality::Plural,
            placement: LinkPlacement::Links,
        }
    }

    /// A single link at the top level.
    pub const fn root(name: &'static str) -> Self {
        LinkSlot {
            name,
            cardinality: Cardinality::Single,
            placement: LinkPlacement::Root,
        }
    }

    /// A plural link at the top level.
    pub const fn root_plural(name: &'static str) -> Self {
        LinkSlot {
            name,
            cardinality: Cardinality::Plural,
            placement: LinkPlacement::Root,
        }
    }
}

/// Static description of a resource type.
#[derive(Debug)]
pub struct ResourceDefinition {
    /// Schema name, e.g. `Battery`; also the prefix of action keys.
    pub type_name: &'static str,
    /// Every property the record decodes.
    pub declared_fields: &'static [&'static str],
    /// Properties a PATCH may carry; a subset of `declared_fields`.
    pub writable_fields: &'static [&'static str],
    /// Links promoted to slots.
    pub link_slots: &'static [LinkSlot],
    /// Action names, e.g. `SelfTest` for `#Battery.SelfTest`.
    pub action_slots: &'static [&'static str],
}

impl ResourceDefinition {
    /// Whether the type declares any writable field.
    ///
    /// Only mutable resources retain their raw document.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        !self.writable_fields.is_empty()
    }

    /// Whether `field` may appear in a PATCH.
    pub fn is_writable(&self, field: &str) -> bool {
        self.writable_fields.contains(&field)
    }

    /// Whether `field` is declared.
    pub fn is_declared(&self, field: &str) -> bool {
        self.declared_fields.contains(&field)
    }

    /// Key of `action` under `Actions`.
    pub fn action_key(&self, action: &str) -> String {
        protocol::action_key(self.type_name, action)
    }

    /// Slot named `name`, if declared.
    pub fn link_slot(&self, name: &str) -> Option<&LinkSlot> {
        self.link_slots.iter().find(|slot| slot.name == name)
    }

    /// Check the table for internal consistency.
    ///
    /// Every writable field must be declared, and field, slot and action
    /// names must each be unique.
    pub fn validate(&self) -> Result<()> {
        if self.type_name.is_empty() {
            return Err(RedfishError::InvalidState(
                "resource definition has no type name".to_string(),
            ));
        }

        let invalid = |what: &str, name: &str| {
            RedfishError::InvalidState(format!("{}: {} '{}'", self.type_name, what, name))
        };

        let mut seen = BTreeSet::new();
        for &field in self.declared_fields {
            if !seen.insert(field) {
                return Err(invalid("duplicate declared field", field));
            }
        }

        let mut seen = BTreeSet::new();
        for &field in self.writable_fields {
            if !self.is_declared(field) {
                return Err(invalid("writable field is not declared", field));
            }
            if !seen.insert(field) {
                return Err(invalid("duplicate writable field", field));
            }
        }

        let mut seen = BTreeSet::new();
        for slot in self.link_slots {
            if !seen.insert(slot.name) {
                return Err(invalid("duplicate link slot", slot.name));
            }
        }

        let mut seen = BTreeSet::new();
        for &action in self.action_slots {
            if !seen.insert(action) {
                return Err(invalid("duplicate action", action));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BATTERY_LIKE: ResourceDefinition = ResourceDefinition {
        type_name: "Battery",
        declared_fields: &["Id", "Name", "LocationIndicatorActive", "ServicedDate"],
        writable_fields: &["LocationIndicatorActive", "ServicedDate"],
        link_slots: &[LinkSlot::plural("Memory"), LinkSlot::root("Metrics")],
        action_slots: &["Calibrate", "SelfTest"],
    };

    #[test]
    fn test_lookup() {
        assert_eq!(BATTERY_LIKE.action_key("SelfTest"), "#Battery.SelfTest");
        let slot = BATTERY_LIKE.link_slot("Metrics").unwrap();
        assert_eq!(slot.placement, LinkPlacement::Root);
        assert_eq!(slot.cardinality, Cardinality::Single);
        assert!(BATTERY_LIKE.link_slot("Assembly").is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(BATTERY_LIKE.validate().is_ok());
    }

    #[test]
    fn test_validate_undeclared_writable() {
        let definition = ResourceDefinition {
            type_name: "Heater",
            declared_fields: &["Id"],
            writable_fields: &["AssetTag"],
            link_slots: &[],
            action_slots: &[],
        };
        let err = definition.validate().unwrap_err();
        assert!(err.to_string().contains("AssetTag"));
    }

    #[test]
    fn test_validate_duplicate_slot() {
        static SLOTS: [LinkSlot; 2] = [
            LinkSlot::plural("Memory"),
            LinkSlot::root_plural("Memory"),
        ];
        let definition = ResourceDefinition {
            type_name: "Heater",
            declared_fields: &["Id"],
            writable_fields: &[],
            link_slots: &SLOTS,
            action_slots: &[],
        };
        assert!(definition.validate().is_err());
        assert!(!definition.is_mutable());
    }
}
