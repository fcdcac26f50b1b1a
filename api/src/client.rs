//! Typed request/response pipeline over a [`Transport`].
//!
//! Every call is exactly one round trip: resolve URL → send → decode the
//! envelope → validate `data`. Callers never see a partially valid object.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::messages;
use crate::transport::{HttpRequest, Method, Transport};
use crate::validate::Validate;

/// Backend client bound to one origin and one transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET` a path and return its validated `data`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Validate,
    {
        self.call(Method::Get, path, None).await
    }

    /// Send `body` as JSON and return the validated `data`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Validate,
    {
        let body = encode_body(body)?;
        self.call(method, path, Some(body)).await
    }

    /// Perform one round trip whose envelope must carry `data` of type `R`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when no response arrived.
    /// - [`ApiError::Status`] for non-2xx responses.
    /// - [`ApiError::Rejected`] when the envelope reports `success: false`.
    /// - [`ApiError::Schema`] when `data` is missing or malformed.
    pub async fn call<R>(&self, method: Method, path: &str, body: Option<Value>) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Validate,
    {
        self.execute(method, path, body).await?.into_data()
    }

    /// Perform one round trip where only the envelope verdict matters.
    ///
    /// Returns the server message, if any.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::call`], minus the `data` checks.
    pub async fn call_empty(&self, method: Method, path: &str, body: Option<Value>) -> Result<Option<String>, ApiError> {
        Ok(self.execute(method, path, body).await?.message)
    }

    async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<Envelope, ApiError> {
        let url = self.config.endpoint(path);
        log::debug!("{} {url}", method.as_str());
        let request = HttpRequest { method, url, body };
        let response = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{} {path} failed: {e}", method.as_str());
        })?;
        Envelope::from_response(&response).inspect_err(|e| {
            log::warn!("{} {path} -> {}: {e}", method.as_str(), response.status);
        })
    }
}

/// Serialize a request body.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] with the generic user-facing message if
/// the value cannot be represented as JSON; the serializer detail is logged.
pub fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        log::error!("request body not encodable: {e}");
        ApiError::Validation(messages::GENERIC_ERROR.to_owned())
    })
}
