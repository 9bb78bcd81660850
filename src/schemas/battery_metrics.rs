//! Battery metrics.

use crate::resource::{Entity, Resource, ResourceDefinition};
use crate::types::{SensorExcerpt, Status};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metrics of a battery. Read-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatteryMetrics {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
    /// C-rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_rate: Option<f64>,
    /// Per-cell voltages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cell_voltages: Vec<SensorExcerpt>,
    /// State of charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_percent: Option<SensorExcerpt>,
    /// Number of discharge cycles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_cycles: Option<f64>,
    /// E-rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_rate: Option<f64>,
    /// Input current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_current_amps: Option<SensorExcerpt>,
    /// Input voltage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_voltage: Option<SensorExcerpt>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
    /// Output currents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output_current_amps: Vec<SensorExcerpt>,
    /// Output voltages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output_voltages: Vec<SensorExcerpt>,
    /// Status and health.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Stored charge in amp-hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_charge_amp_hours: Option<SensorExcerpt>,
    /// Stored energy in watt-hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_energy_watt_hours: Option<SensorExcerpt>,
    /// Cell temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<SensorExcerpt>,
}

static BATTERY_METRICS: ResourceDefinition = ResourceDefinition {
    type_name: "BatteryMetrics",
    declared_fields: &[
        "Id",
        "Name",
        "Description",
        "CRate",
        "CellVoltages",
        "ChargePercent",
        "DischargeCycles",
        "ERate",
        "InputCurrentAmps",
        "InputVoltage",
        "Oem",
        "OutputCurrentAmps",
        "OutputVoltages",
        "Status",
        "StoredChargeAmpHours",
        "StoredEnergyWattHours",
        "TemperatureCelsius",
    ],
    writable_fields: &[],
    link_slots: &[],
    action_slots: &[],
};

impl Resource for BatteryMetrics {
    fn definition() -> &'static ResourceDefinition {
        &BATTERY_METRICS
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RedfishError;
    use crate::resource::decode_resource;

    #[test]
    fn test_decode_read_only() {
        let body = br#"{
            "@odata.id": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Metrics",
            "Id": "Metrics",
            "Name": "Battery Metrics",
            "ChargePercent": {"Reading": 78.6},
            "CellVoltages": [{"Reading": 3.2}, {"Reading": 3.3}],
            "TemperatureCelsius": {"Reading": 31}
        }"#;
        let metrics: BatteryMetrics = decode_resource(body, "/m").unwrap();
        assert_eq!(metrics.charge_percent.as_ref().and_then(|c| c.reading), Some(78.6));
        assert_eq!(metrics.cell_voltages.len(), 2);
        assert!(metrics.entity.raw_data().is_none());
        assert!(matches!(
            metrics.patch_payload(),
            Err(RedfishError::InvalidState(_))
        ));
        BatteryMetrics::definition().validate().unwrap();
    }
}
