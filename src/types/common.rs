//! Records and enumerations shared by many resource schemas.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health of a resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Health {
    /// Normal.
    #[serde(rename = "OK")]
    Ok,
    /// A condition requires attention.
    Warning,
    /// A critical condition requires immediate attention.
    Critical,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Known state of a resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// Enabled.
    Enabled,
    /// Disabled.
    Disabled,
    /// Enabled but awaiting an external action.
    StandbyOffline,
    /// Part of a redundancy set, awaiting failover.
    StandbySpare,
    /// Undergoing testing.
    InTest,
    /// Starting.
    Starting,
    /// Not present.
    Absent,
    /// Present but cannot be used.
    UnavailableOffline,
    /// Will not process requests until instructed.
    Deferring,
    /// Enabled but only processing a restricted set of commands.
    Quiesced,
    /// Being updated.
    Updating,
    /// Meets qualification requirements.
    Qualified,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Status and health of a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Status {
    /// Health of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    /// Overall health of this resource and its dependents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_rollup: Option<Health>,
    /// Known state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    /// Active conditions, kept as sent.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Value>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
}

/// A copy of a sensor reading embedded in another resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SensorExcerpt {
    /// URI of the resource that provides the reading.
    #[serde(rename = "DataSourceUri", skip_serializing_if = "Option::is_none")]
    pub data_source_uri: Option<String>,
    /// The sensor value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<f64>,
}

/// Type of a part location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    /// A slot.
    Slot,
    /// A bay.
    Bay,
    /// A connector or port.
    Connector,
    /// A socket.
    Socket,
    /// A backplane.
    Backplane,
    /// Embedded in another part.
    Embedded,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Ordering direction of part locations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Front to back.
    FrontToBack,
    /// Back to front.
    BackToFront,
    /// Top to bottom.
    TopToBottom,
    /// Bottom to top.
    BottomToTop,
    /// Left to right.
    LeftToRight,
    /// Right to left.
    RightToLeft,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Side of an enclosure a part is located on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// Top.
    Top,
    /// Bottom.
    Bottom,
    /// Front.
    Front,
    /// Rear.
    Rear,
    /// Left.
    Left,
    /// Right.
    Right,
    /// Middle.
    Middle,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Location of a part within an enclosure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PartLocation {
    /// Number that identifies the location within its type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ordinal_value: Option<i64>,
    /// Type of location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    /// Ordering direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Side of the enclosure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    /// Label printed on the part location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_label: Option<String>,
}

/// Location of a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Location {
    /// Part location within an enclosure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_location: Option<PartLocation>,
    /// Altitude in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_meters: Option<f64>,
    /// Latitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Contact information, kept as sent.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Value>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
}

/// Area or device a reading or component applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PhysicalContext {
    Room,
    Intake,
    Exhaust,
    LiquidInlet,
    LiquidOutlet,
    Front,
    Back,
    Upper,
    Lower,
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "CPUSubsystem")]
    CpuSubsystem,
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "GPUSubsystem")]
    GpuSubsystem,
    #[serde(rename = "FPGA")]
    Fpga,
    Accelerator,
    #[serde(rename = "ASIC")]
    Asic,
    Backplane,
    SystemBoard,
    PowerSupply,
    PowerSubsystem,
    VoltageRegulator,
    Rectifier,
    StorageDevice,
    StorageSubsystem,
    NetworkingDevice,
    ExpansionSubsystem,
    ComputeBay,
    StorageBay,
    NetworkBay,
    ExpansionBay,
    PowerSupplyBay,
    Memory,
    MemorySubsystem,
    Chassis,
    Fan,
    CoolingSubsystem,
    Motor,
    Transformer,
    #[serde(rename = "ACUtilityInput")]
    AcUtilityInput,
    #[serde(rename = "ACStaticBypassInput")]
    AcStaticBypassInput,
    #[serde(rename = "ACMaintenanceBypassInput")]
    AcMaintenanceBypassInput,
    #[serde(rename = "DCBus")]
    DcBus,
    #[serde(rename = "ACOutput")]
    AcOutput,
    #[serde(rename = "ACInput")]
    AcInput,
    PowerOutlet,
    TrustedModule,
    Board,
    Transceiver,
    Battery,
    Pump,
    Filter,
    Reservoir,
    Switch,
    Manager,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Type of reset an action performs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetType {
    /// Power on.
    On,
    /// Turn off immediately.
    ForceOff,
    /// Shut down gracefully and power off.
    GracefulShutdown,
    /// Shut down gracefully and restart.
    GracefulRestart,
    /// Shut down immediately and restart.
    ForceRestart,
    /// Generate a diagnostic interrupt.
    Nmi,
    /// Power on immediately.
    ForceOn,
    /// Simulate pressing the power button.
    PushPowerButton,
    /// Power off then on.
    PowerCycle,
    /// Write state to memory and suspend.
    Suspend,
    /// Pause execution.
    Pause,
    /// Resume execution.
    Resume,
    /// Full power cycle including auxiliary power.
    FullPowerCycle,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// A message from a message registry.
///
/// Appears in error payloads under `@Message.ExtendedInfo` and in tasks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Message {
    /// Registry key of the message, e.g. `Base.1.8.PropertyNotWritable`.
    pub message_id: String,
    /// Human readable text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Substitution arguments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub message_args: Vec<String>,
    /// Severity as given by the registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_severity: Option<Health>,
    /// Legacy severity string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Suggested corrective action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// JSON pointers of the properties the message concerns.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_properties: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_roundtrip_skips_absent() {
        let status: Status =
            serde_json::from_value(json!({"State": "Enabled", "Health": "OK"})).unwrap();
        assert_eq!(status.state, Some(State::Enabled));
        assert_eq!(status.health, Some(Health::Ok));
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({"State": "Enabled", "Health": "OK"})
        );
    }

    #[test]
    fn test_sensor_excerpt() {
        let excerpt: SensorExcerpt =
            serde_json::from_value(json!({"Reading": 91, "DataSourceUri": "/x"})).unwrap();
        assert_eq!(excerpt.reading, Some(91.0));
        assert_eq!(excerpt.data_source_uri.as_deref(), Some("/x"));
    }

    #[test]
    fn test_location() {
        let location: Location = serde_json::from_value(json!({
            "PartLocation": {"ServiceLabel": "Battery 1", "LocationType": "Bay", "LocationOrdinalValue": 0}
        }))
        .unwrap();
        let part = location.part_location.unwrap();
        assert_eq!(part.location_type, Some(LocationType::Bay));
        assert_eq!(part.service_label.as_deref(), Some("Battery 1"));
    }

    #[test]
    fn test_reset_type_literals() {
        assert_eq!(
            serde_json::to_value(ResetType::GracefulRestart).unwrap(),
            json!("GracefulRestart")
        );
        assert_eq!(
            serde_json::from_value::<ResetType>(json!("Explode")).unwrap(),
            ResetType::Other("Explode".to_string())
        );
    }

    #[test]
    fn test_newer_state_round_trips() {
        let status: Status =
            serde_json::from_value(json!({"State": "Degraded", "Health": "OK"})).unwrap();
        assert_eq!(status.state, Some(State::Other("Degraded".to_string())));
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({"State": "Degraded", "Health": "OK"})
        );
    }

    #[test]
    fn test_non_string_state_rejected() {
        assert!(serde_json::from_value::<State>(json!(7)).is_err());
    }
}
