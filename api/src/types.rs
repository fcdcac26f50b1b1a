//! Wire DTOs for the backend REST contract.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Enums carry an `Unknown`
//! catch-all so a new backend value degrades to a label instead of failing
//! the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// SESSION
// =============================================================================

/// Account role as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
    CoOwner,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Identity-document verification state of an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The signed-in user held by the session context.
///
/// Login returns every field; the session probe does not return `full_name`
/// or `verification_status`, which are then left at their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub verification_status: VerificationStatus,
}

/// Response of `GET /api/auth/check-session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProbe {
    pub is_authenticated: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl SessionProbe {
    /// The partial user this probe describes, if it reports a session.
    #[must_use]
    pub fn into_user(self) -> Option<SessionUser> {
        if !self.is_authenticated {
            return None;
        }
        Some(SessionUser {
            user_id: self.user_id?,
            email: self.email.unwrap_or_default(),
            full_name: String::new(),
            role: self.role.unwrap_or_default(),
            verification_status: VerificationStatus::default(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

// =============================================================================
// VEHICLES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
    Inactive,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_id: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub battery_capacity_kwh: f64,
    #[serde(default)]
    pub status: VehicleStatus,
    /// Backend-relative path such as `/uploads/vehicles/1.jpg`.
    pub image_url: Option<String>,
    pub group_id: Option<String>,
}

/// Body for vehicle create/update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub battery_capacity_kwh: f64,
    pub image_url: Option<String>,
    pub group_id: Option<String>,
}

impl From<&Vehicle> for VehicleRequest {
    fn from(v: &Vehicle) -> Self {
        Self {
            license_plate: v.license_plate.clone(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            year: v.year,
            battery_capacity_kwh: v.battery_capacity_kwh,
            image_url: v.image_url.clone(),
            group_id: v.group_id.clone(),
        }
    }
}

// =============================================================================
// MEMBERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub verification_status: VerificationStatus,
}

/// Admin verdict on a member's identity verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationDecision {
    pub status: VerificationStatus,
    pub note: Option<String>,
}

// =============================================================================
// GROUPS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub user_id: String,
    pub full_name: String,
    pub ownership_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipGroup {
    pub group_id: String,
    pub group_name: String,
    pub description: Option<String>,
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl OwnershipGroup {
    /// Sum of all members' ownership shares.
    #[must_use]
    pub fn allocated_percentage(&self) -> f64 {
        self.members.iter().map(|m| m.ownership_percentage).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub description: Option<String>,
    pub vehicle_id: Option<String>,
}

/// Body of `POST /api/groups/{id}/join-requests`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGroupRequest {
    pub proposed_ownership_percentage: f64,
    pub reason: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A pending or decided request to join an ownership group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    pub request_id: String,
    pub group_id: String,
    pub user_id: String,
    pub full_name: Option<String>,
    pub proposed_ownership_percentage: f64,
    pub reason: String,
    #[serde(default)]
    pub status: RequestStatus,
}

/// Optional reviewer note sent with approve/reject.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewNote {
    pub note: Option<String>,
}

// =============================================================================
// SCHEDULES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    #[default]
    Booked,
    CheckedIn,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_id: String,
    pub vehicle_id: String,
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub purpose: Option<String>,
    #[serde(default)]
    pub status: ScheduleStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub vehicle_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub purpose: Option<String>,
}

/// Odometer/battery readings recorded at check-in or check-out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCheck {
    pub odometer_km: Option<u32>,
    pub battery_level: Option<u8>,
    pub notes: Option<String>,
}
