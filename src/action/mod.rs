//! Action invocation.
//!
//! Actions are POSTed to the target a resource published under `Actions`.
//! Two call shapes cover every action:
//!
//! | Function | 200/204 | 202 | non-2xx |
//! |----------|---------|-----|---------|
//! | [`post_action`] | `None` | `Some(TaskMonitor)` | error |
//! | [`post_action_with_response`] | decoded body | `Protocol` error | error |
//!
//! Response bodies are read and released by the transport before either
//! function looks at the status, so no path leaks a connection.

mod task_monitor;

pub use task_monitor::{TaskMonitor, TaskStatus};

use crate::client::Transport;
use crate::error::{RedfishError, Result};
use crate::protocol::{classify_status, StatusClass};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An action endpoint as published under `Actions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTarget {
    /// URL to POST to.
    #[serde(default, alias = "Target")]
    pub target: String,
    /// Link to the description of the supported parameters.
    #[serde(
        rename = "@Redfish.ActionInfo",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub action_info: String,
}

impl ActionTarget {
    /// Read an action object; a malformed one has an empty target.
    pub fn from_value(value: &Value) -> Self {
        ActionTarget::deserialize(value).unwrap_or_default()
    }

    /// Whether the service published a target.
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

/// POST `payload` to an action target.
///
/// Returns a [`TaskMonitor`] when the service answers 202, `None` on any
/// other 2xx.
pub async fn post_action(
    client: &Arc<dyn Transport>,
    target: &str,
    payload: &Value,
    headers: &BTreeMap<String, String>,
) -> Result<Option<TaskMonitor>> {
    if target.is_empty() {
        return Err(RedfishError::InvalidState(
            "action is not supported by this resource".to_string(),
        ));
    }

    let response = client.post(target, payload, headers).await?;
    match classify_status(response.status) {
        StatusClass::Accepted => TaskMonitor::from_response(client.clone(), &response).map(Some),
        _ => Ok(None),
    }
}

/// POST `payload` to an action target and decode the reply as `T`.
///
/// A 202 is a protocol error here: the caller asked for a reply, not a task.
pub async fn post_action_with_response<T: DeserializeOwned>(
    client: &Arc<dyn Transport>,
    target: &str,
    payload: &Value,
    headers: &BTreeMap<String, String>,
) -> Result<T> {
    if target.is_empty() {
        return Err(RedfishError::InvalidState(
            "action is not supported by this resource".to_string(),
        ));
    }

    let response = client.post(target, payload, headers).await?;
    if response.is_accepted() {
        return Err(RedfishError::Protocol(format!(
            "{} answered 202 where a response body was expected",
            target
        )));
    }
    response.json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientConfig, RedfishClient};
    use serde_json::json;

    const GENERATE_CSR: &str = "/redfish/v1/CertificateService/Actions/CertificateService.GenerateCSR";

    #[derive(Debug, Deserialize)]
    struct CsrReply {
        #[serde(rename = "CSRString")]
        csr_string: String,
    }

    #[test]
    fn test_action_target_shapes() {
        let target = ActionTarget::from_value(&json!({
            "target": "/redfish/v1/Batteries/1/Actions/Battery.Reset",
            "@Redfish.ActionInfo": "/redfish/v1/Batteries/1/ResetActionInfo",
            "ResetType@Redfish.AllowableValues": ["On"]
        }));
        assert_eq!(target.target, "/redfish/v1/Batteries/1/Actions/Battery.Reset");
        assert_eq!(target.action_info, "/redfish/v1/Batteries/1/ResetActionInfo");

        let legacy = ActionTarget::from_value(&json!({"Target": "/t"}));
        assert_eq!(legacy.target, "/t");

        assert!(ActionTarget::from_value(&json!("oops")).is_empty());
    }

    #[tokio::test]
    async fn test_with_response_decodes_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", GENERATE_CSR)
            .match_body(mockito::Matcher::Json(json!({"CommonName": "bmc"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"CSRString": "-----BEGIN CERTIFICATE REQUEST-----"}"#)
            .expect(1)
            .create_async()
            .await;
        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap();

        let reply: CsrReply = post_action_with_response(
            &client.shared(),
            GENERATE_CSR,
            &json!({"CommonName": "bmc"}),
            &BTreeMap::new(),
        )
        .await
        .unwrap();

        assert_eq!(reply.csr_string, "-----BEGIN CERTIFICATE REQUEST-----");
        assert_eq!(client.open_responses(), 0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_with_response_rejects_accepted() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_CSR)
            .with_status(202)
            .with_header("Location", "/redfish/v1/TaskService/TaskMonitors/3")
            .create_async()
            .await;
        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap();

        let err = post_action_with_response::<CsrReply>(
            &client.shared(),
            GENERATE_CSR,
            &json!({}),
            &BTreeMap::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, RedfishError::Protocol(_)));
        assert_eq!(client.open_responses(), 0);
    }

    #[tokio::test]
    async fn test_with_response_undecodable_reply() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_CSR)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;
        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap();

        let err = post_action_with_response::<CsrReply>(
            &client.shared(),
            GENERATE_CSR,
            &json!({}),
            &BTreeMap::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, RedfishError::Decode { .. }));
        assert_eq!(client.open_responses(), 0);
    }
}
