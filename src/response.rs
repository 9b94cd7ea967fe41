//! Response decoding shared by the async and blocking clients.

use serde_json::Value;

use crate::errors::HttpError;

/// Decode a response body as JSON and optionally unwrap one top-level field.
///
/// The status code is only carried into the error for context; a JSON body
/// decodes the same way whatever the status.
pub(crate) fn decode_body(
    url: &str,
    status: u16,
    body: &[u8],
    unwrap: Option<&'static str>,
) -> Result<Value, HttpError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| HttpError::decode(url, status, e))?;

    match unwrap {
        Some(field) => unwrap_field(url, value, field),
        None => Ok(value),
    }
}

/// Take `field` out of a JSON object.
pub(crate) fn unwrap_field(url: &str, value: Value, field: &'static str) -> Result<Value, HttpError> {
    match value {
        Value::Object(mut map) => map
            .remove(field)
            .ok_or_else(|| HttpError::missing_field(url, field)),
        _ => Err(HttpError::missing_field(url, field)),
    }
}
