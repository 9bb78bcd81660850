#![allow(dead_code)]

use redfish_client::{ClientConfig, RedfishClient};

pub const BATTERY_URI: &str = "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1";
pub const BATTERY: &str = r##"{
    "@odata.type": "#Battery.v1_2_2.Battery",
    "@odata.id": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1",
    "@odata.etag": "\"A89B031B62\"",
    "Id": "Module1",
    "Name": "Battery 1",
    "Status": {"State": "Enabled", "Health": "OK"},
    "Location": {"PartLocation": {"ServiceLabel": "Battery 1", "LocationType": "Bay", "LocationOrdinalValue": 0}},
    "ChargeState": "Idle",
    "EnergyStorageType": "Battery",
    "BatteryChemistryType": "LithiumIon",
    "CapacityRatedWattHours": 1234.5,
    "CapacityActualWattHours": 1180.25,
    "Manufacturer": "Contoso Power",
    "Model": "RB-1000",
    "SerialNumber": "S8AY829",
    "FirmwareVersion": "1.0.3",
    "HotPluggable": true,
    "Replaceable": true,
    "LocationIndicatorActive": false,
    "StateOfHealthPercent": {"DataSourceUri": "/redfish/v1/Chassis/1/Sensors/BatteryHealth", "Reading": 91},
    "Metrics": {"@odata.id": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Metrics"},
    "Links": {
        "Memory": [
            {"@odata.id": "/redfish/v1/Systems/1/Memory/DIMM1"},
            {"@odata.id": "/redfish/v1/Systems/1/Memory/DIMM2"},
            {"@odata.id": "/redfish/v1/Systems/1/Memory/DIMM1"}
        ],
        "StorageControllers": [{"@odata.id": "/redfish/v1/Systems/1/Storage/1#/StorageControllers/0"}]
    },
    "Actions": {
        "#Battery.Calibrate": {"target": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Actions/Battery.Calibrate"},
        "#Battery.Reset": {
            "target": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Actions/Battery.Reset",
            "@Redfish.ActionInfo": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/ResetActionInfo"
        },
        "#Battery.SelfTest": {"target": "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1/Actions/Battery.SelfTest"}
    }
}"##;

pub const FILE_SHARE_URI: &str = "/redfish/v1/StorageServices/1/FileSystems/FS1/ExportedFileShares/FS1";
pub const FILE_SHARE: &str = r##"{
    "@odata.type": "#FileShare.v1_2_0.FileShare",
    "@odata.id": "/redfish/v1/StorageServices/1/FileSystems/FS1/ExportedFileShares/FS1",
    "@odata.etag": "W/\"12\"",
    "Id": "FS1",
    "Name": "Share 1",
    "CASupported": false,
    "ExecuteSupport": true,
    "FileSharePath": "/FS1",
    "FileShareQuotaType": "Soft",
    "FileShareTotalQuotaBytes": 1099511627776,
    "FileShareRemainingQuotaBytes": 549755813888,
    "FileSharingProtocols": ["NFSv4_1"],
    "DefaultAccessCapabilities": ["Read", "Write"],
    "LowSpaceWarningThresholdPercents": [10, 5],
    "RemainingCapacityPercent": 50,
    "ReplicationEnabled": false,
    "RootAccess": false,
    "WritePolicy": "Synchronous",
    "Status": {"State": "Enabled", "Health": "OK"},
    "Links": {
        "ClassOfService": {"@odata.id": "/redfish/v1/StorageServices/1/ClassesOfService/Gold"},
        "FileSystem": {"@odata.id": "/redfish/v1/StorageServices/1/FileSystems/FS1"}
    }
}"##;

pub const HEATER_URI: &str = "/redfish/v1/Chassis/1/ThermalSubsystem/Heaters/CPU1Heater";
pub const HEATER: &str = r##"{
    "@odata.type": "#Heater.v1_0_1.Heater",
    "@odata.id": "/redfish/v1/Chassis/1/ThermalSubsystem/Heaters/CPU1Heater",
    "Id": "CPU1Heater",
    "Name": "CPU 1 Heater",
    "PhysicalContext": "CPU",
    "Manufacturer": "Contoso",
    "Model": "SuperHeat 1",
    "PartNumber": "ABC-123",
    "SerialNumber": "H1",
    "HotPluggable": false,
    "LocationIndicatorActive": false,
    "Status": {"State": "Enabled", "Health": "OK"},
    "Metrics": {"@odata.id": "/redfish/v1/Chassis/1/ThermalSubsystem/Heaters/CPU1Heater/Metrics"},
    "Links": {
        "Processors": [
            {"@odata.id": "/redfish/v1/Systems/1/Processors/CPU1"},
            {"@odata.id": "/redfish/v1/Systems/1/Processors/CPU1"}
        ],
        "Managers": [{"@odata.id": "/redfish/v1/Managers/BMC"}]
    }
}"##;

pub const MEMORY_CHUNKS_URI: &str = "/redfish/v1/Systems/2/MemoryDomains/1/MemoryChunks/1";
pub const MEMORY_CHUNKS: &str = r##"{
    "@odata.type": "#MemoryChunks.v1_6_0.MemoryChunks",
    "@odata.id": "/redfish/v1/Systems/2/MemoryDomains/1/MemoryChunks/1",
    "Id": "1",
    "Name": "Memory Chunk - Whole System",
    "DisplayName": "chunk-a",
    "AddressRangeType": "Volatile",
    "AddressRangeOffsetMiB": 0,
    "MemoryChunkSizeMiB": 32768,
    "MediaLocation": "Local",
    "RequestedOperationalState": "Online",
    "IsMirrorEnabled": false,
    "IsSpare": false,
    "InterleaveSets": [
        {"Memory": {"@odata.id": "/Systems/2/Memory/1"}},
        {"Memory": {"@odata.id": "/Systems/2/Memory/2"}},
        {"Memory": {"@odata.id": "/Systems/2/Memory/3"}},
        {"Memory": {"@odata.id": "/Systems/2/Memory/4"}}
    ],
    "Links": {
        "Endpoints": [{"@odata.id": "/redfish/v1/Fabrics/CXL/Endpoints/1"}]
    },
    "Status": {"State": "Enabled", "Health": "OK"}
}"##;

/// Send library logs to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// A logging client pointed at `server` that retries quickly.
pub fn client(server: &mockito::ServerGuard) -> RedfishClient {
    init_tracing();
    RedfishClient::new(ClientConfig {
        retry_delay_ms: 1,
        enable_logging: true,
        ..ClientConfig::new(server.url())
    })
    .expect("client")
}

/// Serve `body` for GET `path`.
pub async fn serve(server: &mut mockito::ServerGuard, path: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
