//! Envelope decoding.
//!
//! A resource document is split into four parts:
//!
//! 1. declared fields, decoded by the record's own `Deserialize` impl,
//! 2. links named by the definition, read from `Links` or the top level,
//! 3. action targets named by the definition, read from `Actions`,
//! 4. the raw bytes, retained only when the type declares writable fields.
//!
//! Parts 2 to 4 land in the [`Envelope`] carried by the resource's
//! [`Entity`](crate::resource::Entity). Unknown properties are ignored.

use crate::action::ActionTarget;
use crate::error::{RedfishError, Result};
use crate::protocol::constants::{ACTIONS, LINKS};
use crate::resource::{Cardinality, LinkPlacement, Resource, ResourceDefinition};
use crate::types::{Link, LinkValue, Links};
use bytes::Bytes;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Links, action targets and raw bytes captured at decode time.
#[derive(Clone, Debug, Default)]
pub struct Envelope {
    links: BTreeMap<&'static str, LinkValue>,
    actions: BTreeMap<&'static str, ActionTarget>,
    raw: Option<Bytes>,
    committed: Map<String, Value>,
}

impl Envelope {
    /// Capture the slots `definition` names from `document`.
    ///
    /// `raw` is kept only if the definition is mutable.
    pub fn extract(definition: &ResourceDefinition, document: &Value, raw: &[u8]) -> Self {
        let links_object = document.get(LINKS);

        let links = definition
            .link_slots
            .iter()
            .map(|slot| {
                let source = match slot.placement {
                    LinkPlacement::Links => links_object.and_then(|links| links.get(slot.name)),
                    LinkPlacement::Root => document.get(slot.name),
                };
                let value = match slot.cardinality {
                    Cardinality::Single => {
                        LinkValue::Single(source.map(Link::from_value).unwrap_or_default())
                    }
                    Cardinality::Plural => {
                        LinkValue::Plural(source.map(Links::from_value).unwrap_or_default())
                    }
                };
                (slot.name, value)
            })
            .collect();

        let actions_object = document.get(ACTIONS);
        let actions = definition
            .action_slots
            .iter()
            .filter_map(|&action| {
                let key = definition.action_key(action);
                actions_object
                    .and_then(|actions| actions.get(&key))
                    .map(|value| (action, ActionTarget::from_value(value)))
            })
            .collect();

        let raw = definition
            .is_mutable()
            .then(|| Bytes::copy_from_slice(raw));

        Envelope {
            links,
            actions,
            raw,
            committed: Map::new(),
        }
    }

    /// Link captured for slot `name`.
    pub fn link(&self, name: &str) -> Option<&LinkValue> {
        self.links.get(name)
    }

    /// Action target captured for `action`.
    pub fn action(&self, action: &str) -> Option<&ActionTarget> {
        self.actions.get(action)
    }

    /// Names of the actions the document published.
    pub fn actions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.keys().copied()
    }

    /// Document bytes exactly as fetched.
    pub fn raw(&self) -> Option<&Bytes> {
        self.raw.as_ref()
    }

    /// Values sent by successful updates since the fetch.
    pub fn committed(&self) -> &Map<String, Value> {
        &self.committed
    }

    pub(crate) fn commit(&mut self, patch: Map<String, Value>) {
        self.committed.extend(patch);
    }
}

/// Decode `body`, fetched from `uri`, into a resource.
///
/// The client is not attached.
pub fn decode_resource<R: Resource>(body: &[u8], uri: &str) -> Result<R> {
    let document: Value = serde_json::from_slice(body).map_err(|e| decode_error(uri, e))?;
    decode_document(document, body, uri)
}

/// Decode an already parsed document, such as an expanded collection member.
///
/// The raw bytes retained for a mutable type are the re-encoded document.
pub fn decode_value<R: Resource>(document: Value, uri: &str) -> Result<R> {
    let body = serde_json::to_vec(&document)?;
    decode_document(document, &body, uri)
}

fn decode_document<R: Resource>(document: Value, body: &[u8], uri: &str) -> Result<R> {
    if !document.is_object() {
        return Err(RedfishError::Decode {
            uri: uri.to_string(),
            message: "expected a JSON object".to_string(),
        });
    }

    let mut resource = R::deserialize(&document).map_err(|e| decode_error(uri, e))?;
    let envelope = Envelope::extract(R::definition(), &document, body);
    resource.entity_mut().set_envelope(envelope);
    Ok(resource)
}

fn decode_error(uri: &str, err: serde_json::Error) -> RedfishError {
    RedfishError::Decode {
        uri: uri.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::LinkSlot;
    use serde_json::json;

    static DEFINITION: ResourceDefinition = ResourceDefinition {
        type_name: "Battery",
        declared_fields: &["Id", "LocationIndicatorActive"],
        writable_fields: &["LocationIndicatorActive"],
        link_slots: &[
            LinkSlot::plural("Memory"),
            LinkSlot::single("Chassis"),
            LinkSlot::root("Metrics"),
        ],
        action_slots: &["Calibrate", "Reset", "SelfTest"],
    };

    static READ_ONLY: ResourceDefinition = ResourceDefinition {
        type_name: "BatteryMetrics",
        declared_fields: &["Id"],
        writable_fields: &[],
        link_slots: &[],
        action_slots: &[],
    };

    fn document() -> Value {
        json!({
            "Id": "Module1",
            "Metrics": {"@odata.id": "/redfish/v1/Batteries/Module1/Metrics"},
            "Links": {
                "Memory": [
                    {"@odata.id": "/redfish/v1/Memory/2"},
                    {"@odata.id": "/redfish/v1/Memory/1"},
                    {"@odata.id": "/redfish/v1/Memory/2"}
                ]
            },
            "Actions": {
                "#Battery.Calibrate": {"target": "/redfish/v1/Batteries/Module1/Actions/Battery.Calibrate"},
                "#Battery.SelfTest": {
                    "target": "/redfish/v1/Batteries/Module1/Actions/Battery.SelfTest",
                    "@Redfish.ActionInfo": "/redfish/v1/Batteries/Module1/SelfTestActionInfo"
                },
                "#Other.Reset": {"target": "/nope"}
            }
        })
    }

    #[test]
    fn test_links_extracted() {
        let envelope = Envelope::extract(&DEFINITION, &document(), b"{}");
        let memory = envelope.link("Memory").unwrap();
        assert_eq!(
            memory.uris(),
            vec!["/redfish/v1/Memory/2", "/redfish/v1/Memory/1", "/redfish/v1/Memory/2"]
        );
        let metrics = envelope.link("Metrics").unwrap().as_single().unwrap();
        assert_eq!(metrics.uri(), "/redfish/v1/Batteries/Module1/Metrics");
        assert!(envelope.link("Chassis").unwrap().as_single().unwrap().is_empty());
    }

    #[test]
    fn test_actions_extracted() {
        let envelope = Envelope::extract(&DEFINITION, &document(), b"{}");
        assert_eq!(
            envelope.action("Calibrate").unwrap().target,
            "/redfish/v1/Batteries/Module1/Actions/Battery.Calibrate"
        );
        assert_eq!(
            envelope.action("SelfTest").unwrap().action_info,
            "/redfish/v1/Batteries/Module1/SelfTestActionInfo"
        );
        assert!(envelope.action("Reset").is_none());
        assert_eq!(envelope.actions().collect::<Vec<_>>(), vec!["Calibrate", "SelfTest"]);
    }

    #[test]
    fn test_raw_kept_only_when_mutable() {
        let raw = br#"{"Id":"Module1"}"#;
        let envelope = Envelope::extract(&DEFINITION, &json!({"Id": "Module1"}), raw);
        assert_eq!(envelope.raw().unwrap().as_ref(), raw);

        let envelope = Envelope::extract(&READ_ONLY, &json!({"Id": "Module1"}), raw);
        assert!(envelope.raw().is_none());
    }

    #[test]
    fn test_commit_accumulates() {
        let mut envelope = Envelope::default();
        let mut patch = Map::new();
        patch.insert("A".to_string(), json!(1));
        envelope.commit(patch);
        let mut patch = Map::new();
        patch.insert("A".to_string(), json!(2));
        patch.insert("B".to_string(), Value::Null);
        envelope.commit(patch);
        assert_eq!(envelope.committed().get("A"), Some(&json!(2)));
        assert_eq!(envelope.committed().len(), 2);
    }
}
