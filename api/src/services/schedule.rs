//! Vehicle usage schedules and check-in/check-out.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use super::{precheck, segment};
use crate::client::{ApiClient, encode_body};
use crate::error::ApiError;
use crate::transport::{Method, Transport};
use crate::types::{Schedule, ScheduleRequest, VehicleCheck};

pub const SCHEDULES_PATH: &str = "/api/schedules";

fn schedules_query(vehicle_id: Option<&str>) -> String {
    match vehicle_id {
        Some(id) => format!("{SCHEDULES_PATH}?vehicleId={}", segment(id)),
        None => SCHEDULES_PATH.to_owned(),
    }
}

/// Schedules visible to the caller, optionally for one vehicle.
///
/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn list_schedules<T: Transport>(client: &ApiClient<T>, vehicle_id: Option<&str>) -> Result<Vec<Schedule>, ApiError> {
    client.get(&schedules_query(vehicle_id)).await
}

/// Book a vehicle. Conflict detection is the backend's job.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the range is empty or inverted
/// (nothing is sent), otherwise any round-trip failure.
pub async fn create_schedule<T: Transport>(client: &ApiClient<T>, request: &ScheduleRequest) -> Result<Schedule, ApiError> {
    precheck(request)?;
    client.send_json(Method::Post, SCHEDULES_PATH, request).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn cancel_schedule<T: Transport>(client: &ApiClient<T>, schedule_id: &str) -> Result<Option<String>, ApiError> {
    client
        .call_empty(Method::Delete, &format!("{SCHEDULES_PATH}/{}", segment(schedule_id)), None)
        .await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for an out-of-range battery level,
/// otherwise any round-trip failure.
pub async fn check_in<T: Transport>(client: &ApiClient<T>, schedule_id: &str, check: &VehicleCheck) -> Result<Schedule, ApiError> {
    record_check(client, schedule_id, "check-in", check).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for an out-of-range battery level,
/// otherwise any round-trip failure.
pub async fn check_out<T: Transport>(client: &ApiClient<T>, schedule_id: &str, check: &VehicleCheck) -> Result<Schedule, ApiError> {
    record_check(client, schedule_id, "check-out", check).await
}

async fn record_check<T: Transport>(
    client: &ApiClient<T>,
    schedule_id: &str,
    step: &str,
    check: &VehicleCheck,
) -> Result<Schedule, ApiError> {
    precheck(check)?;
    let path = format!("{SCHEDULES_PATH}/{}/{step}", segment(schedule_id));
    client.call(Method::Post, &path, Some(encode_body(check)?)).await
}
