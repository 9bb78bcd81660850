//! Redfish wire conventions.
//!
//! Constants for the OData annotations and sub-objects the service uses, status
//! classification, and header parsing helpers.
//!
//! # Status Classes
//!
//! | Status | Class | Meaning |
//! |--------|-------|---------|
//! | 2xx except 202 | [`StatusClass::Success`] | Completed, optional body |
//! | 202 | [`StatusClass::Accepted`] | Long-running task, `Location` is the task monitor |
//! | anything else | [`StatusClass::Failure`] | Body is a Redfish error object, if JSON |
//!
//! # Examples
//!
//! ```
//! use redfish_client::protocol::{classify_status, StatusClass};
//!
//! assert_eq!(classify_status(204), StatusClass::Success);
//! assert_eq!(classify_status(202), StatusClass::Accepted);
//! assert_eq!(classify_status(404), StatusClass::Failure);
//! ```

pub mod headers;

pub use headers::{format_if_match, header_value, parse_retry_after, parse_retry_after_at};

/// Protocol constants.
pub mod constants {
    /// Canonical URI of a resource or link target.
    pub const ODATA_ID: &str = "@odata.id";
    /// Schema type and version, e.g. `#Battery.v1_5_0.Battery`.
    pub const ODATA_TYPE: &str = "@odata.type";
    /// Context document URI.
    pub const ODATA_CONTEXT: &str = "@odata.context";
    /// Entity tag carried in the body.
    pub const ODATA_ETAG: &str = "@odata.etag";
    /// Suffix of the count annotation for a plural field.
    pub const ODATA_COUNT_SUFFIX: &str = "@odata.count";
    /// Legacy link attribute some services emit instead of `@odata.id`.
    pub const HREF: &str = "href";

    /// Sub-object holding inbound hyperlinks.
    pub const LINKS: &str = "Links";
    /// Sub-object holding action endpoints.
    pub const ACTIONS: &str = "Actions";
    /// Attribute of an action object that holds its POST URL.
    pub const TARGET: &str = "target";
    /// Attribute of an action object that links its parameter description.
    pub const ACTION_INFO: &str = "@Redfish.ActionInfo";
    /// Vendor extension payload.
    pub const OEM: &str = "Oem";

    /// Member list of a collection.
    pub const MEMBERS: &str = "Members";
    /// Continuation link of a collection page.
    pub const MEMBERS_NEXT_LINK: &str = "Members@odata.nextLink";

    /// Default path of the service root.
    pub const SERVICE_ROOT: &str = "/redfish/v1/";

    /// JSON content type.
    pub const APPLICATION_JSON: &str = "application/json";
    /// JSON patch content type some services require for PATCH.
    pub const APPLICATION_JSON_PATCH: &str = "application/json-patch+json";

    /// Header names used by the client.
    pub mod headers {
        use http::header::HeaderName;

        /// `ETag`
        pub const ETAG: HeaderName = http::header::ETAG;
        /// `If-Match`
        pub const IF_MATCH: HeaderName = http::header::IF_MATCH;
        /// `Location`
        pub const LOCATION: HeaderName = http::header::LOCATION;
        /// `Retry-After`
        pub const RETRY_AFTER: HeaderName = http::header::RETRY_AFTER;
    }
}

/// Classification of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx other than 202.
    Success,
    /// 202, the service started a task.
    Accepted,
    /// Anything outside 2xx.
    Failure,
}

/// Classify a status code.
#[inline]
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        202 => StatusClass::Accepted,
        200..=299 => StatusClass::Success,
        _ => StatusClass::Failure,
    }
}

/// Build the key an action is published under in `Actions`.
///
/// ```
/// use redfish_client::protocol::action_key;
///
/// assert_eq!(action_key("Battery", "SelfTest"), "#Battery.SelfTest");
/// ```
#[inline]
pub fn action_key(type_name: &str, action: &str) -> String {
    format!("#{}.{}", type_name, action)
}
