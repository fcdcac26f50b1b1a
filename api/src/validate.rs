//! Shape checks beyond what serde enforces.
//!
//! The same trait guards both directions: outgoing requests are checked
//! before any network call (failures become [`crate::ApiError::Validation`]
//! with display text), and incoming `data` payloads are checked after
//! deserialization (failures become [`crate::ApiError::Schema`]).

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::messages;
use crate::types::*;

/// Lowest ownership share a join request may propose.
pub const MIN_OWNERSHIP_PERCENTAGE: f64 = 5.0;
pub const MAX_OWNERSHIP_PERCENTAGE: f64 = 100.0;
/// Minimum length, in characters, of a join-request reason.
pub const MIN_REASON_CHARS: usize = 10;
pub const MIN_PASSWORD_CHARS: usize = 6;
pub const VEHICLE_YEAR_RANGE: std::ops::RangeInclusive<u16> = 1990..=2100;

pub trait Validate {
    /// # Errors
    ///
    /// Returns a description of the first violated constraint.
    fn validate(&self) -> Result<(), String>;
}

impl Validate for () {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter().try_for_each(Validate::validate)
    }
}

fn require_id(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("empty {field}"));
    }
    Ok(())
}

fn require_text(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_owned());
    }
    Ok(())
}

fn percentage_in_range(field: &str, value: f64) -> Result<(), String> {
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("{field} out of range: {value}"));
    }
    Ok(())
}

// =============================================================================
// RESPONSES
// =============================================================================

impl Validate for SessionUser {
    fn validate(&self) -> Result<(), String> {
        require_id("userId", &self.user_id)
    }
}

impl Validate for SessionProbe {
    fn validate(&self) -> Result<(), String> {
        if self.is_authenticated {
            let user_id = self.user_id.as_deref().unwrap_or_default();
            require_id("userId", user_id)?;
        }
        Ok(())
    }
}

impl Validate for Vehicle {
    fn validate(&self) -> Result<(), String> {
        require_id("vehicleId", &self.vehicle_id)?;
        if self.battery_capacity_kwh < 0.0 {
            return Err(format!("negative batteryCapacityKwh: {}", self.battery_capacity_kwh));
        }
        Ok(())
    }
}

impl Validate for Member {
    fn validate(&self) -> Result<(), String> {
        require_id("userId", &self.user_id)
    }
}

impl Validate for GroupMember {
    fn validate(&self) -> Result<(), String> {
        require_id("userId", &self.user_id)?;
        percentage_in_range("ownershipPercentage", self.ownership_percentage)
    }
}

impl Validate for OwnershipGroup {
    fn validate(&self) -> Result<(), String> {
        require_id("groupId", &self.group_id)?;
        self.members.validate()
    }
}

impl Validate for MembershipRequest {
    fn validate(&self) -> Result<(), String> {
        require_id("requestId", &self.request_id)?;
        require_id("groupId", &self.group_id)?;
        percentage_in_range("proposedOwnershipPercentage", self.proposed_ownership_percentage)
    }
}

impl Validate for Schedule {
    fn validate(&self) -> Result<(), String> {
        require_id("scheduleId", &self.schedule_id)?;
        if self.end_time < self.start_time {
            return Err(format!("schedule {} ends before it starts", self.schedule_id));
        }
        Ok(())
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), String> {
        require_text(&self.email, messages::EMAIL_REQUIRED)?;
        require_text(&self.password, messages::PASSWORD_REQUIRED)
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), String> {
        require_text(&self.full_name, messages::FULL_NAME_REQUIRED)?;
        require_text(&self.email, messages::EMAIL_REQUIRED)?;
        if !self.email.contains('@') {
            return Err(messages::EMAIL_INVALID.to_owned());
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(messages::PASSWORD_TOO_SHORT.to_owned());
        }
        Ok(())
    }
}

impl Validate for VehicleRequest {
    fn validate(&self) -> Result<(), String> {
        require_text(&self.license_plate, messages::PLATE_REQUIRED)?;
        if self.brand.trim().is_empty() || self.model.trim().is_empty() {
            return Err(messages::BRAND_MODEL_REQUIRED.to_owned());
        }
        if !VEHICLE_YEAR_RANGE.contains(&self.year) {
            return Err(messages::YEAR_OUT_OF_RANGE.to_owned());
        }
        if self.battery_capacity_kwh.is_nan() || self.battery_capacity_kwh <= 0.0 {
            return Err(messages::BATTERY_CAPACITY_INVALID.to_owned());
        }
        Ok(())
    }
}

impl Validate for CreateGroupRequest {
    fn validate(&self) -> Result<(), String> {
        require_text(&self.group_name, messages::GROUP_NAME_REQUIRED)
    }
}

impl Validate for JoinGroupRequest {
    fn validate(&self) -> Result<(), String> {
        let pct = self.proposed_ownership_percentage;
        if pct.is_nan() || pct < MIN_OWNERSHIP_PERCENTAGE {
            return Err(messages::OWNERSHIP_BELOW_MINIMUM.to_owned());
        }
        if pct > MAX_OWNERSHIP_PERCENTAGE {
            return Err(messages::OWNERSHIP_ABOVE_MAXIMUM.to_owned());
        }
        if self.reason.trim().chars().count() < MIN_REASON_CHARS {
            return Err(messages::REASON_TOO_SHORT.to_owned());
        }
        Ok(())
    }
}

impl Validate for VerificationDecision {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for ReviewNote {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for ScheduleRequest {
    fn validate(&self) -> Result<(), String> {
        require_text(&self.vehicle_id, messages::VEHICLE_REQUIRED)?;
        if self.end_time <= self.start_time {
            return Err(messages::SCHEDULE_RANGE_INVALID.to_owned());
        }
        Ok(())
    }
}

impl Validate for VehicleCheck {
    fn validate(&self) -> Result<(), String> {
        if self.battery_level.is_some_and(|level| level > 100) {
            return Err(messages::BATTERY_LEVEL_INVALID.to_owned());
        }
        Ok(())
    }
}
