//! Minimal PATCH computation.
//!
//! The baseline is the fetched document, decoded through the record type and
//! serialized again so both sides share one encoding, with the values of
//! earlier successful updates laid over it. The current record is serialized
//! the same way. Only the writable fields are compared:
//!
//! - equal values are skipped,
//! - a value that differs is sent as its new value,
//! - a value that disappeared is sent as `null`,
//! - a list that disappeared is sent as `[]`.
//!
//! Arrays compare element-wise in order. A field missing on one side and
//! `null` on the other is unchanged. Changes to fields that are not writable
//! are never sent.

use crate::error::{RedfishError, Result};
use crate::resource::Resource;
use serde::Serialize;
use serde_json::{Map, Value};

/// Compute the PATCH body for `resource`.
///
/// Fails with `InvalidState` when the type has no writable fields or the
/// resource holds no raw document.
pub fn patch_payload<R: Resource>(resource: &R) -> Result<Map<String, Value>> {
    let definition = R::definition();
    let entity = resource.entity();

    if !definition.is_mutable() {
        return Err(RedfishError::InvalidState(format!(
            "{} has no writable properties",
            definition.type_name
        )));
    }

    let raw = entity.envelope().raw().ok_or_else(|| {
        RedfishError::InvalidState(format!(
            "{} '{}' was not decoded from a service document",
            definition.type_name,
            entity.uri()
        ))
    })?;

    let original: R = serde_json::from_slice(raw).map_err(|e| RedfishError::Decode {
        uri: entity.uri().to_string(),
        message: e.to_string(),
    })?;
    let mut before = to_object(&original)?;
    for (field, value) in entity.envelope().committed() {
        before.insert(field.clone(), value.clone());
    }
    let after = to_object(resource)?;

    let logging = entity
        .client()
        .is_some_and(|client| client.config().enable_logging);

    let empty_list = Value::Array(Vec::new());
    let mut patch = Map::new();
    for &field in definition.declared_fields {
        let old = before.get(field).unwrap_or(&Value::Null);
        // Empty lists are usually skipped when serializing.
        let new = match after.get(field) {
            Some(value) => value,
            None if old.is_array() => &empty_list,
            None => &Value::Null,
        };
        if old == new {
            continue;
        }
        if definition.is_writable(field) {
            patch.insert(field.to_string(), new.clone());
        } else if logging {
            tracing::debug!(
                "{}: ignoring change to read-only property {}",
                entity.uri(),
                field
            );
        }
    }

    if logging && !patch.is_empty() {
        let body = Value::Object(patch.clone());
        tracing::trace!("{}: patch {}", entity.uri(), body);
    }
    Ok(patch)
}

/// Send the PATCH for `resource`, if any, and record what was committed.
pub async fn commit<R: Resource>(resource: &mut R) -> Result<()> {
    let patch = patch_payload(resource)?;
    if patch.is_empty() {
        return Ok(());
    }

    let client = resource.entity().require_client()?.clone();
    let uri = resource.entity().uri().to_string();
    if uri.is_empty() {
        return Err(RedfishError::InvalidState(format!(
            "{} has no @odata.id to update",
            R::definition().type_name
        )));
    }
    let headers = resource.entity().headers();

    client
        .patch(&uri, &Value::Object(patch.clone()), &headers)
        .await?;

    resource.entity_mut().envelope_mut().commit(patch);
    Ok(())
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(RedfishError::InvalidState(format!(
            "resource serialized to a non-object: {}",
            other
        ))),
    }
}
