//! Identity and service plumbing shared by every resource.
//!
//! Records embed an [`Entity`] with `#[serde(flatten)]`. It carries the OData
//! identity properties, the transport the resource was fetched through and
//! the [`Envelope`] captured at decode time.

use crate::action::{self, ActionTarget, TaskMonitor};
use crate::client::{HttpResponse, Transport};
use crate::collection;
use crate::error::{RedfishError, Result};
use crate::protocol::{constants, format_if_match};
use crate::resource::{Envelope, Resource};
use crate::types::{Link, LinkValue, Links};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Common identity of a resource.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Canonical URI of the resource.
    #[serde(rename = "@odata.id", skip_serializing_if = "String::is_empty")]
    pub odata_id: String,
    /// Schema type and version, e.g. `#Battery.v1_2_2.Battery`.
    #[serde(rename = "@odata.type", skip_serializing_if = "String::is_empty")]
    pub odata_type: String,
    /// Context document URI.
    #[serde(rename = "@odata.context", skip_serializing_if = "String::is_empty")]
    pub odata_context: String,
    /// Entity tag of the fetched representation.
    ///
    /// Taken from the body, or from the `ETag` header when the body has none.
    #[serde(rename = "@odata.etag", skip_serializing_if = "String::is_empty")]
    pub etag: String,
    /// Identifier, unique within the containing collection.
    #[serde(rename = "Id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Human readable name.
    #[serde(rename = "Name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Description.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip)]
    client: Option<Arc<dyn Transport>>,
    #[serde(skip)]
    envelope: Envelope,
}

impl Entity {
    /// Canonical URI of the resource.
    pub fn uri(&self) -> &str {
        &self.odata_id
    }

    /// Attach the transport subsequent calls go through.
    pub fn set_client(&mut self, client: Arc<dyn Transport>) {
        self.client = Some(client);
    }

    /// The attached transport, if any.
    pub fn client(&self) -> Option<&Arc<dyn Transport>> {
        self.client.as_ref()
    }

    /// The attached transport; `InvalidState` when detached.
    pub fn require_client(&self) -> Result<&Arc<dyn Transport>> {
        self.client.as_ref().ok_or_else(|| {
            RedfishError::InvalidState(format!(
                "resource '{}' is not attached to a client",
                self.odata_id
            ))
        })
    }

    /// Envelope captured at decode time.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub(crate) fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    pub(crate) fn set_envelope(&mut self, envelope: Envelope) {
        self.envelope = envelope;
    }

    /// Raw document bytes; present only on mutable resources.
    pub fn raw_data(&self) -> Option<&[u8]> {
        self.envelope.raw().map(|raw| raw.as_ref())
    }

    /// Headers for requests relative to this resource.
    ///
    /// Carries `If-Match` with the resource's ETag unless the client is
    /// configured not to.
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if self.etag.is_empty() {
            return headers;
        }

        let (disabled, strip) = self
            .client
            .as_ref()
            .map(|client| {
                let config = client.config();
                (config.disable_etag_match, config.strip_etag_quotes)
            })
            .unwrap_or((false, false));

        if !disabled {
            headers.insert(
                constants::headers::IF_MATCH.as_str().to_string(),
                format_if_match(&self.etag, strip),
            );
        }
        headers
    }

    /// Single link stored in slot `name`; empty when absent.
    pub fn link(&self, name: &str) -> Link {
        self.envelope
            .link(name)
            .and_then(LinkValue::as_single)
            .cloned()
            .unwrap_or_default()
    }

    /// Plural link stored in slot `name`; empty when absent.
    pub fn links(&self, name: &str) -> Links {
        self.envelope
            .link(name)
            .and_then(LinkValue::as_plural)
            .cloned()
            .unwrap_or_default()
    }

    /// Target captured for `action`; empty when the service published none.
    pub fn action_target(&self, action: &str) -> ActionTarget {
        self.envelope.action(action).cloned().unwrap_or_default()
    }

    /// Fetch the resource behind single link `name`.
    ///
    /// An empty link and a 404 both resolve to `None`.
    pub async fn linked<T: Resource>(&self, name: &str) -> Result<Option<T>> {
        let link = self.link(name);
        if link.is_empty() {
            return Ok(None);
        }
        collection::get_optional(self.require_client()?, link.uri()).await
    }

    /// Fetch every resource behind plural link `name`, in link order.
    pub async fn linked_all<T: Resource>(&self, name: &str) -> Result<Vec<T>> {
        let uris = self.links(name).to_strings();
        if uris.is_empty() {
            return Ok(Vec::new());
        }
        collection::get_many_by_uri(self.require_client()?, &uris).await
    }

    /// Walk the collection behind single link `name`.
    pub async fn linked_collection<T: Resource>(&self, name: &str) -> Result<Vec<T>> {
        let link = self.link(name);
        if link.is_empty() {
            return Ok(Vec::new());
        }
        collection::get_collection(self.require_client()?, link.uri()).await
    }

    /// POST `payload` to `uri`, discarding the response.
    pub async fn post(&self, uri: &str, payload: &Value) -> Result<()> {
        self.require_client()?
            .post(uri, payload, &self.headers())
            .await?;
        Ok(())
    }

    /// POST `payload` to `uri` and return the response.
    pub async fn post_with_response(&self, uri: &str, payload: &Value) -> Result<HttpResponse> {
        self.require_client()?
            .post(uri, payload, &self.headers())
            .await
    }

    /// Invoke `action`; see [`post_action`](crate::action::post_action).
    pub async fn invoke(&self, action: &str, payload: &Value) -> Result<Option<TaskMonitor>> {
        let target = self.action_target(action);
        if target.is_empty() {
            return Err(self.unsupported(action));
        }
        action::post_action(self.require_client()?, &target.target, payload, &self.headers()).await
    }

    /// Invoke `action` and decode its reply; see
    /// [`post_action_with_response`](crate::action::post_action_with_response).
    pub async fn invoke_with_response<T: DeserializeOwned>(
        &self,
        action: &str,
        payload: &Value,
    ) -> Result<T> {
        let target = self.action_target(action);
        if target.is_empty() {
            return Err(self.unsupported(action));
        }
        action::post_action_with_response(
            self.require_client()?,
            &target.target,
            payload,
            &self.headers(),
        )
        .await
    }

    fn unsupported(&self, action: &str) -> RedfishError {
        RedfishError::InvalidState(format!(
            "action '{}' is not supported by '{}'",
            action, self.odata_id
        ))
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("odata_id", &self.odata_id)
            .field("odata_type", &self.odata_type)
            .field("etag", &self.etag)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("attached", &self.client.is_some())
            .finish()
    }
}
