//! Session endpoints: probe, login, logout, register.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::precheck;
use crate::client::{ApiClient, encode_body};
use crate::error::ApiError;
use crate::transport::{Method, Transport};
use crate::types::{LoginRequest, RegisterRequest, SessionProbe, SessionUser};

pub const CHECK_SESSION_PATH: &str = "/api/auth/check-session";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Ask the backend whether the current cookie session is authenticated.
///
/// # Errors
///
/// Returns an [`ApiError`] if the probe round trip fails.
pub async fn check_session<T: Transport>(client: &ApiClient<T>) -> Result<SessionProbe, ApiError> {
    client.get(CHECK_SESSION_PATH).await
}

/// Authenticate with email and password, returning the full user record.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for blank credentials (no request is
/// sent), otherwise any round-trip failure.
pub async fn login<T: Transport>(client: &ApiClient<T>, request: &LoginRequest) -> Result<SessionUser, ApiError> {
    precheck(request)?;
    client.send_json(Method::Post, LOGIN_PATH, request).await
}

/// End the backend session.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend could not be reached or refused.
pub async fn logout<T: Transport>(client: &ApiClient<T>) -> Result<(), ApiError> {
    client.call_empty(Method::Post, LOGOUT_PATH, None).await.map(|_| ())
}

/// Create an account. Returns the backend's confirmation message.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for invalid input, otherwise any
/// round-trip failure.
pub async fn register<T: Transport>(client: &ApiClient<T>, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
    precheck(request)?;
    let body = encode_body(request)?;
    client.call_empty(Method::Post, REGISTER_PATH, Some(body)).await
}
