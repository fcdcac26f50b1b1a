//! The uniform `{ success, message, data }` response wrapper.
//!
//! `success: false` is authoritative: a rejected envelope is a failure even
//! when it also carries `data`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::transport::HttpResponse;
use crate::validate::Validate;

/// Envelope as returned by every backend endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl Envelope<Value> {
    /// Decode a raw response into an accepted envelope.
    ///
    /// Non-2xx statuses become [`ApiError::Status`] carrying the envelope
    /// message when the body has one. A 2xx body that is not an envelope is a
    /// schema failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`], [`ApiError::Rejected`] or
    /// [`ApiError::Schema`].
    pub fn from_response(response: &HttpResponse) -> Result<Self, ApiError> {
        let parsed = parse_body(&response.body);
        if !response.is_success() {
            let message = parsed.ok().and_then(|env| env.message);
            return Err(ApiError::Status { status: response.status, message });
        }
        let envelope = parsed.map_err(|e| ApiError::Schema(format!("invalid envelope: {e}")))?;
        if !envelope.success {
            return Err(ApiError::Rejected { message: envelope.message });
        }
        Ok(envelope)
    }

    /// Extract and validate the `data` payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Schema`] if `data` is absent, does not deserialize,
    /// or fails [`Validate`].
    pub fn into_data<T>(self) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let data = self.data.filter(|v| !v.is_null()).ok_or_else(|| ApiError::Schema("missing data".to_owned()))?;
        decode_data(data)
    }
}

fn parse_body(body: &str) -> Result<Envelope<Value>, serde_json::Error> {
    serde_json::from_str::<Envelope<Value>>(body)
}

/// Deserialize and validate a `data` payload.
///
/// # Errors
///
/// Returns [`ApiError::Schema`] on shape or validation mismatch.
pub fn decode_data<T>(data: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(data).map_err(|e| ApiError::Schema(e.to_string()))?;
    value.validate().map_err(ApiError::Schema)?;
    Ok(value)
}
