//! Header parsing and formatting for Redfish requests and responses.
//!
//! # Header Formats
//!
//! | Header | Format | Example |
//! |--------|--------|---------|
//! | ETag / If-Match | Quoted or bare entity tag | `"W/\"1a2b\""`, `1a2b` |
//! | Retry-After | Delay in seconds or an HTTP-date | `30`, `Wed, 21 Oct 2015 07:28:00 GMT` |
//! | Location | Task monitor URI | `/redfish/v1/TaskService/TaskMonitors/1` |
//!
//! # Examples
//!
//! ```
//! use redfish_client::protocol::{format_if_match, parse_retry_after_at};
//! use chrono::{TimeZone, Utc};
//!
//! assert_eq!(format_if_match("\"abc\"", true), "abc");
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let at = parse_retry_after_at("30", now).unwrap();
//! assert_eq!((at - now).num_seconds(), 30);
//! ```

use crate::error::{RedfishError, Result};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Look up a header case-insensitively.
pub fn header_value<'a>(headers: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Format an entity tag for the `If-Match` header.
///
/// Some services only match unquoted tags; `strip_quotes` removes the
/// surrounding double quotes for those.
pub fn format_if_match(etag: &str, strip_quotes: bool) -> String {
    if strip_quotes {
        etag.trim_matches('"').to_string()
    } else {
        etag.to_string()
    }
}

/// Parse a `Retry-After` value relative to the current time.
pub fn parse_retry_after(value: &str) -> Result<DateTime<Utc>> {
    parse_retry_after_at(value, Utc::now())
}

/// Parse a `Retry-After` value relative to `now`.
///
/// # Supported Formats
///
/// | Format | Example |
/// |--------|---------|
/// | Delay in seconds | `"120"` |
/// | HTTP-date | `"Fri, 31 Dec 1999 23:59:59 GMT"` |
///
/// # Errors
///
/// Returns an error if the value is neither form.
pub fn parse_retry_after_at(value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Ok(now + Duration::seconds(seconds.max(0)));
    }

    DateTime::parse_from_rfc2822(trimmed)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| RedfishError::Protocol(format!("invalid Retry-After: {}", value)))
}
