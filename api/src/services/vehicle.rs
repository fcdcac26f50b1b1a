//! Vehicle CRUD.

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

use super::{precheck, segment};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{Method, Transport};
use crate::types::{Vehicle, VehicleRequest};

pub const VEHICLES_PATH: &str = "/api/vehicles";

fn vehicle_path(vehicle_id: &str) -> String {
    format!("{VEHICLES_PATH}/{}", segment(vehicle_id))
}

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn list_vehicles<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Vehicle>, ApiError> {
    client.get(VEHICLES_PATH).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn get_vehicle<T: Transport>(client: &ApiClient<T>, vehicle_id: &str) -> Result<Vehicle, ApiError> {
    client.get(&vehicle_path(vehicle_id)).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for an invalid request (nothing is sent),
/// otherwise any round-trip failure.
pub async fn create_vehicle<T: Transport>(client: &ApiClient<T>, request: &VehicleRequest) -> Result<Vehicle, ApiError> {
    precheck(request)?;
    client.send_json(Method::Post, VEHICLES_PATH, request).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for an invalid request (nothing is sent),
/// otherwise any round-trip failure.
pub async fn update_vehicle<T: Transport>(
    client: &ApiClient<T>,
    vehicle_id: &str,
    request: &VehicleRequest,
) -> Result<Vehicle, ApiError> {
    precheck(request)?;
    client.send_json(Method::Put, &vehicle_path(vehicle_id), request).await
}

/// Returns the backend's confirmation message, if any.
///
/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn delete_vehicle<T: Transport>(client: &ApiClient<T>, vehicle_id: &str) -> Result<Option<String>, ApiError> {
    client.call_empty(Method::Delete, &vehicle_path(vehicle_id), None).await
}
