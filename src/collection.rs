//! Generic fetchers typed by the resource record.
//!
//! | Function | Empty URI | 404 | Result order |
//! |----------|-----------|-----|--------------|
//! | [`get_one`] | `Ok(None)` | `NotFound` error | - |
//! | [`get_optional`] | `Ok(None)` | `Ok(None)` | - |
//! | [`get_many_by_uri`] | skipped | `Member` error | input order |
//! | [`get_collection`] | empty | `NotFound` / `Member` error | page order |
//!
//! Plural fetches keep up to `max_concurrent_requests` requests in flight and
//! fail fast: the first failing element aborts the call, and its error names
//! the element's URI.

use crate::client::{HttpResponse, Transport};
use crate::error::{RedfishError, Result};
use crate::protocol::constants::{LINKS, MEMBERS, MEMBERS_NEXT_LINK, ODATA_COUNT_SUFFIX};
use crate::resource::{decode_resource, decode_value, Resource};
use crate::types::Link;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Fetch and decode the resource at `uri`.
pub async fn get_one<T: Resource>(client: &Arc<dyn Transport>, uri: &str) -> Result<Option<T>> {
    if uri.is_empty() {
        return Ok(None);
    }
    let response = client.get(uri).await?;
    decode_response(client, &response).map(Some)
}

/// Like [`get_one`], but a 404 is an absent resource rather than an error.
pub async fn get_optional<T: Resource>(
    client: &Arc<dyn Transport>,
    uri: &str,
) -> Result<Option<T>> {
    match get_one(client, uri).await {
        Err(err) if err.is_not_found() => Ok(None),
        other => other,
    }
}

/// Fetch every URI in `uris` and return the resources in the same order.
///
/// Empty URIs name no resource and are skipped, so the result has one
/// element per non-empty URI and may be shorter than `uris`.
pub async fn get_many_by_uri<T: Resource, S: AsRef<str>>(
    client: &Arc<dyn Transport>,
    uris: &[S],
) -> Result<Vec<T>> {
    let members = uris
        .iter()
        .filter_map(|uri| {
            let uri: &str = uri.as_ref();
            (!uri.is_empty()).then(|| Member::Reference(uri.to_string()))
        })
        .collect();
    fetch_members(client, members).await
}

/// Fetch every member of the collection at `uri`, following continuation pages.
pub async fn get_collection<T: Resource>(
    client: &Arc<dyn Transport>,
    uri: &str,
) -> Result<Vec<T>> {
    if uri.is_empty() {
        return Ok(Vec::new());
    }

    let mut members = Vec::new();
    let mut visited = BTreeSet::new();
    let mut next = Some(uri.to_string());

    while let Some(page_uri) = next.take() {
        if !visited.insert(page_uri.clone()) {
            return Err(RedfishError::Protocol(format!(
                "collection {} links back to page {}",
                uri, page_uri
            )));
        }
        let page = CollectionPage::fetch(client, &page_uri).await?;
        members.extend(page.members.into_iter().filter_map(Member::from_value));
        next = page.next_link;
    }

    fetch_members(client, members).await
}

/// Decode a fetched document as `T` and attach `client`.
///
/// The `ETag` header fills in the entity tag when the body carries none.
pub fn decode_response<T: Resource>(
    client: &Arc<dyn Transport>,
    response: &HttpResponse,
) -> Result<T> {
    let mut resource: T = decode_resource(&response.body, &response.uri)?;
    let entity = resource.entity_mut();
    if entity.etag.is_empty() {
        if let Some(etag) = response.etag() {
            entity.etag = etag.to_string();
        }
    }
    entity.set_client(client.clone());
    Ok(resource)
}

/// One page of a collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionPage {
    /// Name of the collection.
    pub name: String,
    /// `Members@odata.count`, when given.
    pub count: Option<u64>,
    /// Member entries as sent: links, or expanded documents.
    pub members: Vec<Value>,
    /// URI of the next page.
    pub next_link: Option<String>,
}

impl CollectionPage {
    /// Read a page out of a collection document.
    ///
    /// Members are taken from `Members` at the top level, or from
    /// `Links.Members` when the top level has none.
    pub fn from_value(document: &Value) -> Self {
        let count_key = format!("{}{}", MEMBERS, ODATA_COUNT_SUFFIX);

        let members_at = |value: Option<&Value>| -> Vec<Value> {
            value
                .and_then(|v| v.get(MEMBERS))
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default()
        };
        let mut members = members_at(Some(document));
        if members.is_empty() {
            members = members_at(document.get(LINKS));
        }

        CollectionPage {
            name: document
                .get("Name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            count: document.get(&count_key).and_then(Value::as_u64),
            members,
            next_link: document
                .get(MEMBERS_NEXT_LINK)
                .and_then(Value::as_str)
                .filter(|link| !link.is_empty())
                .map(str::to_string),
        }
    }

    /// Fetch and read the page at `uri`.
    pub async fn fetch(client: &Arc<dyn Transport>, uri: &str) -> Result<Self> {
        let response = client.get(uri).await?;
        let document: Value = response.json()?;
        Ok(CollectionPage::from_value(&document))
    }

    /// URIs of the members in order; members without one are skipped.
    pub fn member_uris(&self) -> Vec<String> {
        self.members
            .iter()
            .map(Link::from_value)
            .filter(|link| !link.is_empty())
            .map(|link| link.uri().to_string())
            .collect()
    }
}

enum Member {
    Reference(String),
    Expanded(String, Value),
}

impl Member {
    fn from_value(value: Value) -> Option<Self> {
        let uri = Link::from_value(&value);
        if uri.is_empty() {
            return None;
        }
        let expanded = value.get("Id").is_some();
        Some(if expanded {
            Member::Expanded(uri.uri().to_string(), value)
        } else {
            Member::Reference(uri.uri().to_string())
        })
    }

    fn uri(&self) -> &str {
        match self {
            Member::Reference(uri) | Member::Expanded(uri, _) => uri,
        }
    }
}

async fn fetch_members<T: Resource>(
    client: &Arc<dyn Transport>,
    members: Vec<Member>,
) -> Result<Vec<T>> {
    let limit = client.config().max_concurrent_requests.max(1);

    stream::iter(members)
        .map(|member| async move {
            let fetched = match &member {
                Member::Reference(uri) => get_one::<T>(client, uri).await,
                Member::Expanded(uri, value) => decode_value::<T>(value.clone(), uri).map(|mut r| {
                    r.entity_mut().set_client(client.clone());
                    Some(r)
                }),
            };
            fetched.map_err(|err| RedfishError::for_member(member.uri(), err))
        })
        .buffered(limit)
        .try_filter_map(|resource| async move { Ok(resource) })
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientConfig, RedfishClient};
    use crate::schemas::GenericResource;
    use serde_json::json;

    #[test]
    fn test_page_root_members() {
        let page = CollectionPage::from_value(&json!({
            "Name": "Batteries",
            "Members@odata.count": 2,
            "Members": [{"@odata.id": "/b/1"}, {"@odata.id": "/b/2"}],
            "Members@odata.nextLink": "/b?$skip=2"
        }));
        assert_eq!(page.name, "Batteries");
        assert_eq!(page.count, Some(2));
        assert_eq!(page.member_uris(), vec!["/b/1", "/b/2"]);
        assert_eq!(page.next_link.as_deref(), Some("/b?$skip=2"));
    }

    #[test]
    fn test_page_links_members() {
        let page = CollectionPage::from_value(&json!({
            "Links": {"Members": [{"href": "/old/1"}, {"@odata.id": "/old/2"}]}
        }));
        assert_eq!(page.member_uris(), vec!["/old/1", "/old/2"]);
        assert!(page.next_link.is_none());
    }

    #[tokio::test]
    async fn test_get_one_empty_uri() {
        let client = RedfishClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap().shared();
        let absent: Option<GenericResource> = get_one(&client, "").await.unwrap();
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn test_get_one_etag_from_header() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/redfish/v1/Chassis/1")
            .with_status(200)
            .with_header("ETag", "\"77\"")
            .with_body(r#"{"@odata.id":"/redfish/v1/Chassis/1","Id":"1","Name":"Chassis"}"#)
            .create_async()
            .await;

        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap().shared();
        let chassis: GenericResource = get_one(&client, "/redfish/v1/Chassis/1").await.unwrap().unwrap();
        assert_eq!(chassis.entity.etag, "\"77\"");
        assert!(chassis.entity.client().is_some());
    }

    #[tokio::test]
    async fn test_get_many_fail_fast_with_context() {
        let mut server = mockito::Server::new_async().await;
        let _one = server
            .mock("GET", "/m/1")
            .with_body(r#"{"@odata.id":"/m/1","Id":"1"}"#)
            .create_async()
            .await;
        let _two = server
            .mock("GET", "/m/2")
            .with_status(500)
            .with_body("bad")
            .create_async()
            .await;

        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap();
        let transport = client.shared();
        let err = get_many_by_uri::<GenericResource, _>(&transport, &["/m/1", "/m/2"])
            .await
            .unwrap_err();
        assert!(matches!(err, RedfishError::Member { .. }));
        assert_eq!(err.uri(), Some("/m/2"));
        assert_eq!(err.status(), Some(500));
        assert_eq!(client.open_responses(), 0);
    }

    #[tokio::test]
    async fn test_many_by_uri_skips_empty() {
        let mut server = mockito::Server::new_async().await;
        let one = server
            .mock("GET", "/m/1")
            .with_body(r#"{"@odata.id":"/m/1","Id":"1"}"#)
            .expect(1)
            .create_async()
            .await;
        let two = server
            .mock("GET", "/m/2")
            .with_body(r#"{"@odata.id":"/m/2","Id":"2"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap();
        let items = get_many_by_uri::<GenericResource, _>(&client.shared(), &["", "/m/2", "", "/m/1"])
            .await
            .unwrap();
        let ids: Vec<&str> = items.iter().map(|r| r.entity.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        one.assert_async().await;
        two.assert_async().await;
    }

    #[tokio::test]
    async fn test_collection_loop_detected() {
        let mut server = mockito::Server::new_async().await;
        let _page = server
            .mock("GET", "/c")
            .with_body(r#"{"Members":[],"Members@odata.nextLink":"/c"}"#)
            .create_async()
            .await;

        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap().shared();
        let err = get_collection::<GenericResource>(&client, "/c").await.unwrap_err();
        assert!(matches!(err, RedfishError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_expanded_members_not_refetched() {
        let mut server = mockito::Server::new_async().await;
        let page = server
            .mock("GET", "/c")
            .with_body(
                json!({"Members": [
                    {"@odata.id": "/c/1", "Id": "1", "Name": "one"},
                    {"@odata.id": "/c/2", "Id": "2", "Name": "two"}
                ]})
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let client = RedfishClient::new(ClientConfig::new(server.url())).unwrap().shared();
        let members: Vec<GenericResource> = get_collection(&client, "/c").await.unwrap();
        let names: Vec<_> = members.iter().map(|m| m.entity.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
        page.assert_async().await;
    }
}
