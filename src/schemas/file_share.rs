//! Swordfish file shares exported from a file system.

use crate::error::Result;
use crate::resource::{Entity, LinkSlot, Resource, ResourceDefinition};
use crate::schemas::GenericResource;
use crate::types::Status;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a quota is enforced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuotaType {
    /// Exceeding the quota only raises warnings.
    Soft,
    /// Exceeding the quota fails writes.
    Hard,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// An access capability of a storage resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageAccessCapability {
    /// Read.
    Read,
    /// Write.
    Write,
    /// Write once.
    WriteOnce,
    /// Append.
    Append,
    /// Streaming.
    Streaming,
    /// Execute.
    Execute,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// A file sharing protocol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileProtocol {
    /// NFS version 3.
    #[serde(rename = "NFSv3")]
    NfsV3,
    /// NFS version 4.0.
    #[serde(rename = "NFSv4_0")]
    NfsV4_0,
    /// NFS version 4.1.
    #[serde(rename = "NFSv4_1")]
    NfsV4_1,
    /// SMB version 2.0.
    #[serde(rename = "SMBv2_0")]
    SmbV2_0,
    /// SMB version 2.1.
    #[serde(rename = "SMBv2_1")]
    SmbV2_1,
    /// SMB version 3.0.
    #[serde(rename = "SMBv3_0")]
    SmbV3_0,
    /// SMB version 3.0.2.
    #[serde(rename = "SMBv3_0_2")]
    SmbV3_0_2,
    /// SMB version 3.1.1.
    #[serde(rename = "SMBv3_1_1")]
    SmbV3_1_1,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// When replicas are brought up to date.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplicaUpdateMode {
    /// Active-active.
    Active,
    /// Writes complete once all replicas are updated.
    Synchronous,
    /// Writes complete before replicas are updated.
    Asynchronous,
    /// Switches between synchronous and asynchronous.
    Adaptive,
    /// A value not listed above, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// A file share.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileShare {
    /// Identity and plumbing.
    #[serde(flatten)]
    pub entity: Entity,
    /// Whether continuous availability is supported.
    #[serde(rename = "CASupported", skip_serializing_if = "Option::is_none")]
    pub ca_supported: Option<bool>,
    /// Access capabilities granted by default.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_access_capabilities: Vec<StorageAccessCapability>,
    /// Whether files on the share may be executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_support: Option<bool>,
    /// Path of the share relative to the file system root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_share_path: Option<String>,
    /// Quota enforcement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_share_quota_type: Option<QuotaType>,
    /// Remaining quota in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_share_remaining_quota_bytes: Option<i64>,
    /// Total quota in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_share_total_quota_bytes: Option<i64>,
    /// Protocols the share is exported with.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_sharing_protocols: Vec<FileProtocol>,
    /// Remaining-capacity thresholds that raise low space warnings.
    pub low_space_warning_threshold_percents: Vec<Option<i64>>,
    /// Vendor extension payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
    /// Remaining capacity as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_capacity_percent: Option<i64>,
    /// Whether replication is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_enabled: Option<bool>,
    /// Whether root access is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<bool>,
    /// Status and health.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Replica update policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_policy: Option<ReplicaUpdateMode>,
}

static FILE_SHARE: ResourceDefinition = ResourceDefinition {
    type_name: "FileShare",
    declared_fields: &[
        "Id",
        "Name",
        "Description",
        "CASupported",
        "DefaultAccessCapabilities",
        "ExecuteSupport",
        "FileSharePath",
        "FileShareQuotaType",
        "FileShareRemainingQuotaBytes",
        "FileShareTotalQuotaBytes",
        "FileSharingProtocols",
        "LowSpaceWarningThresholdPercents",
        "Oem",
        "RemainingCapacityPercent",
        "ReplicationEnabled",
        "RootAccess",
        "Status",
        "WritePolicy",
    ],
    writable_fields: &[
        "CASupported",
        "FileShareQuotaType",
        "FileShareTotalQuotaBytes",
        "LowSpaceWarningThresholdPercents",
        "ReplicationEnabled",
    ],
    link_slots: &[
        LinkSlot::single("ClassOfService"),
        LinkSlot::single("FileSystem"),
        LinkSlot::root("EthernetInterfaces"),
    ],
    action_slots: &[],
};

impl Resource for FileShare {
    fn definition() -> &'static ResourceDefinition {
        &FILE_SHARE
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl FileShare {
    /// Class of service of this share.
    pub async fn class_of_service(&self) -> Result<Option<GenericResource>> {
        self.entity.linked("ClassOfService").await
    }

    /// File system that contains this share.
    pub async fn file_system(&self) -> Result<Option<GenericResource>> {
        self.entity.linked("FileSystem").await
    }

    /// Ethernet interfaces the share is reachable through.
    pub async fn ethernet_interfaces(&self) -> Result<Vec<GenericResource>> {
        self.entity.linked_collection("EthernetInterfaces").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientConfig, RedfishClient};
    use crate::resource::decode_resource;
    use serde_json::json;

    const BODY: &str = r##"{
        "@odata.type": "#FileShare.v1_2_0.FileShare",
        "@odata.id": "/redfish/v1/StorageServices/1/FileSystems/FS1/ExportedFileShares/FS1",
        "Id": "FS1",
        "Name": "Share 1",
        "CASupported": false,
        "FileShareQuotaType": "Soft",
        "FileShareTotalQuotaBytes": 1099511627776,
        "FileSharingProtocols": ["NFSv4_1", "SMBv3_1_1"],
        "DefaultAccessCapabilities": ["Read", "Write"],
        "LowSpaceWarningThresholdPercents": [10, null, 5],
        "WritePolicy": "Synchronous",
        "EthernetInterfaces": {"@odata.id": "/redfish/v1/StorageServices/1/FileSystems/FS1/ExportedFileShares/FS1/EthernetInterfaces"},
        "Links": {
            "FileSystem": {"@odata.id": "/redfish/v1/StorageServices/1/FileSystems/FS1"}
        }
    }"##;

    #[test]
    fn test_definition_is_consistent() {
        FileShare::definition().validate().unwrap();
    }

    #[test]
    fn test_decode() {
        let share: FileShare = decode_resource(BODY.as_bytes(), "/fs").unwrap();
        assert_eq!(share.ca_supported, Some(false));
        assert_eq!(share.file_share_quota_type, Some(QuotaType::Soft));
        assert_eq!(
            share.file_sharing_protocols,
            vec![FileProtocol::NfsV4_1, FileProtocol::SmbV3_1_1]
        );
        assert_eq!(share.low_space_warning_threshold_percents, vec![Some(10), None, Some(5)]);
        assert_eq!(share.write_policy, Some(ReplicaUpdateMode::Synchronous));
        assert_eq!(
            share.entity.link("FileSystem").uri(),
            "/redfish/v1/StorageServices/1/FileSystems/FS1"
        );
        assert!(share.entity.link("ClassOfService").is_empty());
    }

    #[test]
    fn test_quota_change() {
        let mut share: FileShare = decode_resource(BODY.as_bytes(), "/fs").unwrap();
        share.file_share_quota_type = Some(QuotaType::Hard);
        share.root_access = Some(true);
        let patch = share.patch_payload().unwrap();
        assert_eq!(Value::Object(patch), json!({"FileShareQuotaType": "Hard"}));
    }

    #[test]
    fn test_cleared_thresholds_sent_as_empty_list() {
        let mut share: FileShare = decode_resource(BODY.as_bytes(), "/fs").unwrap();
        share.low_space_warning_threshold_percents.clear();
        let patch = share.patch_payload().unwrap();
        assert_eq!(Value::Object(patch), json!({"LowSpaceWarningThresholdPercents": []}));
    }

    #[test]
    fn test_absent_thresholds_unchanged() {
        let share: FileShare =
            decode_resource(br#"{"@odata.id":"/fs","Id":"FS1"}"#, "/fs").unwrap();
        assert!(share.patch_payload().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ethernet_interfaces_walks_collection() {
        let mut server = mockito::Server::new_async().await;
        let base = "/redfish/v1/StorageServices/1/FileSystems/FS1/ExportedFileShares/FS1/EthernetInterfaces";
        let _collection = server
            .mock("GET", base)
            .with_body(
                json!({"Members": [{"@odata.id": format!("{}/1", base)}]}).to_string(),
            )
            .create_async()
            .await;
        let _member = server
            .mock("GET", format!("{}/1", base).as_str())
            .with_body(r#"{"Id":"1","Name":"eth0"}"#)
            .create_async()
            .await;

        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap();
        let mut share: FileShare = decode_resource(BODY.as_bytes(), "/fs").unwrap();
        share.entity.set_client(client.shared());
        let interfaces = share.ethernet_interfaces().await.unwrap();
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces[0].entity.name, "eth0");
    }
}
