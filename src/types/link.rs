//! Hyperlinks between resources.
//!
//! A link only records the URI of its target; it never owns the resource.
//! Following one is an explicit call on the containing resource.
//!
//! | Type | JSON | Meaning |
//! |------|------|---------|
//! | [`Link`] | `{"@odata.id": "/redfish/v1/..."}` | At most one target |
//! | [`Links`] | `[{"@odata.id": ...}, ...]` | Ordered targets, duplicates kept |
//! | [`LinksCollection`] | `{"Members": [...], "Members@odata.count": n}` | Members of a collection |
//!
//! Decoding is tolerant: `href` is accepted in place of `@odata.id`, and a
//! malformed value decodes as an empty link instead of failing the resource.
//!
//! # Examples
//!
//! ```
//! use redfish_client::types::{Link, Links};
//! use serde_json::json;
//!
//! let link: Link = serde_json::from_value(json!({"@odata.id": "/redfish/v1/Chassis/1"})).unwrap();
//! assert_eq!(link.uri(), "/redfish/v1/Chassis/1");
//!
//! let legacy: Link = serde_json::from_value(json!({"href": "/redfish/v1/Chassis/2"})).unwrap();
//! assert_eq!(legacy.uri(), "/redfish/v1/Chassis/2");
//!
//! let broken: Link = serde_json::from_value(json!(42)).unwrap();
//! assert!(broken.is_empty());
//!
//! let links = Links::from_value(&json!([
//!     {"@odata.id": "/a"}, {"@odata.id": "/b"}, {"@odata.id": "/a"}
//! ]));
//! assert_eq!(links.uris(), vec!["/a", "/b", "/a"]);
//! ```

use crate::protocol::constants::{HREF, MEMBERS, ODATA_COUNT_SUFFIX, ODATA_ID};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A hyperlink to one resource; empty when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link(String);

impl Link {
    /// Create a link to `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Link(uri.into())
    }

    /// Read a link out of a JSON value.
    ///
    /// Takes `@odata.id`, else `href`, else empty.
    pub fn from_value(value: &Value) -> Self {
        let target = |key: &str| value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());
        target(ODATA_ID)
            .or_else(|| target(HREF))
            .map(Link::new)
            .unwrap_or_default()
    }

    /// Target URI; empty when the link is absent.
    pub fn uri(&self) -> &str {
        &self.0
    }

    /// Whether the link is absent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Target URI, `None` when absent.
    pub fn as_option(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }

    /// The JSON form of this link.
    pub fn to_value(&self) -> Value {
        serde_json::json!({ ODATA_ID: self.0 })
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Link {
    fn from(uri: &str) -> Self {
        Link::new(uri)
    }
}

impl From<String> for Link {
    fn from(uri: String) -> Self {
        Link(uri)
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(ODATA_ID, &self.0)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Link::from_value(&value))
    }
}

/// An ordered list of hyperlinks.
///
/// Order is preserved and duplicates are kept; the service may imply
/// position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    /// Create a list from links.
    pub fn new(links: Vec<Link>) -> Self {
        Links(links)
    }

    /// Read a list out of a JSON array; anything else is an empty list.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Links(items.iter().map(Link::from_value).collect()),
            _ => Links::default(),
        }
    }

    /// Target URIs in order.
    pub fn uris(&self) -> Vec<&str> {
        self.0.iter().map(Link::uri).collect()
    }

    /// Target URIs in order, owned.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|l| l.uri().to_string()).collect()
    }

    /// Iterate over the links.
    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.0.iter()
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Link> for Links {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        Links(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Links::from_value(&value))
    }
}

/// Members of a collection as published under a `Links` object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinksCollection {
    /// `Members@odata.count`, when given.
    pub count: Option<u64>,
    /// Member links in order.
    pub members: Links,
}

impl LinksCollection {
    /// Read the member list out of a JSON object.
    pub fn from_value(value: &Value) -> Self {
        let count_key = format!("{}{}", MEMBERS, ODATA_COUNT_SUFFIX);
        LinksCollection {
            count: value.get(&count_key).and_then(Value::as_u64),
            members: value.get(MEMBERS).map(Links::from_value).unwrap_or_default(),
        }
    }

    /// Member URIs in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.members.to_strings()
    }
}

/// A link of either shape, as stored in a resource's link slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkValue {
    /// At most one target.
    Single(Link),
    /// Ordered targets.
    Plural(Links),
}

impl LinkValue {
    /// Target URIs in order; a single empty link yields nothing.
    pub fn uris(&self) -> Vec<&str> {
        match self {
            LinkValue::Single(link) => link.as_option().into_iter().collect(),
            LinkValue::Plural(links) => links.uris(),
        }
    }

    /// The single link, if this is one.
    pub fn as_single(&self) -> Option<&Link> {
        match self {
            LinkValue::Single(link) => Some(link),
            LinkValue::Plural(_) => None,
        }
    }

    /// The plural link, if this is one.
    pub fn as_plural(&self) -> Option<&Links> {
        match self {
            LinkValue::Plural(links) => Some(links),
            LinkValue::Single(_) => None,
        }
    }
}
