//! Battery and supercapacitor energy storage units.

use crate::action::TaskMonitor;
use crate::error::Result;
use crate::resource::{Entity, LinkSlot, Resource, ResourceDefinition};
use crate::schemas::{BatteryMetrics, GenericResource};
use crate::types::{Location, ResetType, SensorExcerpt, Status};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Chemistry of a battery.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryChemistryType {
    /// Lead-acid.
    LeadAcid,
    /// Lithium-ion.
    LithiumIon,
    /// Nickel-cadmium.
    NickelCadmium,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Charge state of a battery.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeState {
    /// Neither charging nor discharging.
    Idle,
    /// Charging.
    Charging,
    /// Discharging.
    Discharging,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// How energy is stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyStorageType {
    /// Chemical battery.
    Battery,
    /// Supercapacitor.
    Supercapacitor,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// A battery.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Battery {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
    /// Chemistry, when `EnergyStorageType` is `Battery`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_chemistry_type: Option<BatteryChemistryType>,
    /// Actual capacity in amp-hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_actual_amp_hours: Option<f64>,
    /// Actual capacity in watt-hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_actual_watt_hours: Option<f64>,
    /// Rated capacity in amp-hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_rated_amp_hours: Option<f64>,
    /// Rated capacity in watt-hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_rated_watt_hours: Option<f64>,
    /// Charge state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_state: Option<ChargeState>,
    /// Storage technology.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_storage_type: Option<EnergyStorageType>,
    /// Firmware version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    /// Whether the unit can be replaced while powered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_pluggable: Option<bool>,
    /// Location of the unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// State of the locator indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_indicator_active: Option<bool>,
    /// Manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Maximum charge current in amps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_charge_rate_amps: Option<f64>,
    /// Maximum charge voltage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_charge_voltage: Option<f64>,
    /// Maximum discharge current in amps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discharge_rate_amps: Option<f64>,
    /// Model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Nominal output voltage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_output_voltage: Option<f64>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
    /// Part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    /// Production date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_date: Option<String>,
    /// Whether the unit can be replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaceable: Option<bool>,
    /// Serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Date the unit was put into service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serviced_date: Option<String>,
    /// Spare part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spare_part_number: Option<String>,
    /// Remaining capacity relative to the rated capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_of_health_percent: Option<SensorExcerpt>,
    /// Status and health.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Hardware version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

static BATTERY: ResourceDefinition = ResourceDefinition {
    type_name: "Battery",
    declared_fields: &[
        "Id",
        "Name",
        "Description",
        "BatteryChemistryType",
        "CapacityActualAmpHours",
        "CapacityActualWattHours",
        "CapacityRatedAmpHours",
        "CapacityRatedWattHours",
        "ChargeState",
        "EnergyStorageType",
        "FirmwareVersion",
        "HotPluggable",
        "Location",
        "LocationIndicatorActive",
        "Manufacturer",
        "MaxChargeRateAmps",
        "MaxChargeVoltage",
        "MaxDischargeRateAmps",
        "Model",
        "NominalOutputVoltage",
        "Oem",
        "PartNumber",
        "ProductionDate",
        "Replaceable",
        "SerialNumber",
        "ServicedDate",
        "SparePartNumber",
        "StateOfHealthPercent",
        "Status",
        "Version",
    ],
    writable_fields: &["LocationIndicatorActive", "ServicedDate"],
    link_slots: &[
        LinkSlot::plural("Memory"),
        LinkSlot::plural("StorageControllers"),
        LinkSlot::root("Assembly"),
        LinkSlot::root("Metrics"),
    ],
    action_slots: &["Calibrate", "Reset", "SelfTest"],
};

impl Resource for Battery {
    fn definition() -> &'static ResourceDefinition {
        &BATTERY
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Battery {
    /// Run a self-calibration (learn cycle).
    pub async fn calibrate(&self) -> Result<Option<TaskMonitor>> {
        self.entity.invoke("Calibrate", &json!({})).await
    }

    /// Reset the battery; without a type the service performs `GracefulRestart`.
    pub async fn reset(&self, reset_type: Option<ResetType>) -> Result<Option<TaskMonitor>> {
        let payload = match reset_type {
            Some(reset_type) => json!({ "ResetType": reset_type }),
            None => json!({}),
        };
        self.entity.invoke("Reset", &payload).await
    }

    /// Run a self-test.
    pub async fn self_test(&self) -> Result<Option<TaskMonitor>> {
        self.entity.invoke("SelfTest", &json!({})).await
    }

    /// Metrics of this battery.
    pub async fn metrics(&self) -> Result<Option<BatteryMetrics>> {
        self.entity.linked("Metrics").await
    }

    /// Assembly data of this battery.
    pub async fn assembly(&self) -> Result<Option<GenericResource>> {
        self.entity.linked("Assembly").await
    }

    /// Memory devices this battery provides power to.
    pub async fn memory(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("Memory").await
    }

    /// Storage controllers this battery provides power to.
    pub async fn storage_controllers(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_all("StorageControllers").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::decode_resource;
    use crate::types::State;

    const BODY: &str = r##"{
        "@odata.type": "#Battery.v1_2_2.Battery",
        "Id": "Module1",
        "Name": "Battery 1",
        "Status": {"State": "Enabled", "Health": "OK"},
        "Location": {"PartLocation": {"ServiceLabel": "Battery 1", "LocationType": "Bay", "LocationOrdinalValue": 0}},
        "ChargeState": "Idle",
        "Manufacturer": "Contoso Power",
        "StateOfHealthPercent": {"DataSourceUri": "/redfish/v1/Chassis/1/Sensors/BatteryHealth", "Reading": 91},
        "LocationIndicatorActive": false,
        "Metrics": {"@odata.id": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Metrics"},
        "Links": {
            "StorageControllers": [{"@odata.id": "/redfish/v1/Systems/1/Storage/1#/StorageControllers/0"}]
        },
        "Actions": {
            "#Battery.Calibrate": {"target": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Actions/Battery.Calibrate"},
            "#Battery.SelfTest": {"target": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Actions/Battery.SelfTest"}
        },
        "@odata.id": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1"
    }"##;

    #[test]
    fn test_definition_is_consistent() {
        Battery::definition().validate().unwrap();
    }

    #[test]
    fn test_decode() {
        let battery: Battery = decode_resource(BODY.as_bytes(), "/b").unwrap();
        assert_eq!(battery.entity.id, "Module1");
        assert_eq!(battery.charge_state, Some(ChargeState::Idle));
        assert_eq!(
            battery.state_of_health_percent.as_ref().and_then(|s| s.reading),
            Some(91.0)
        );
        assert_eq!(
            battery.entity.links("StorageControllers").uris(),
            vec!["/redfish/v1/Systems/1/Storage/1#/StorageControllers/0"]
        );
        assert!(battery.entity.links("Memory").is_empty());
        assert!(battery.entity.action_target("Reset").is_empty());
        assert_eq!(battery.entity.raw_data(), Some(BODY.as_bytes()));
    }

    #[test]
    fn test_writable_fields_only() {
        let mut battery: Battery = decode_resource(BODY.as_bytes(), "/b").unwrap();
        battery.location_indicator_active = Some(true);
        battery.manufacturer = Some("Other".to_string());
        let patch = battery.patch_payload().unwrap();
        assert_eq!(serde_json::Value::Object(patch), json!({"LocationIndicatorActive": true}));
    }

    #[test]
    fn test_newer_enum_values_decode() {
        let body = BODY
            .replace(r#""State": "Enabled""#, r#""State": "Degraded""#)
            .replace(r#""ChargeState": "Idle""#, r#""ChargeState": "Trickle""#);
        let battery: Battery = decode_resource(body.as_bytes(), "/b").unwrap();
        assert_eq!(
            battery.status.as_ref().and_then(|s| s.state.clone()),
            Some(State::Other("Degraded".to_string()))
        );
        assert_eq!(battery.charge_state, Some(ChargeState::Other("Trickle".to_string())));
        assert!(battery.patch_payload().unwrap().is_empty());
    }
}
