//! Vietnamese display labels and form-input parsing.
//!
//! Form fields arrive as raw strings; these helpers turn them into typed
//! values or a ready-to-show message. Backend rules are not re-checked here.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::str::FromStr;

use api::messages;
use api::types::{RequestStatus, Role, ScheduleStatus, VehicleStatus, VerificationStatus};
use time::macros::{format_description, offset};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Wall-clock offset for display and `datetime-local` inputs (UTC+7).
pub const LOCAL_OFFSET: UtcOffset = offset!(+7);

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Quản trị viên",
        Role::Staff => "Nhân viên",
        Role::CoOwner => "Đồng sở hữu",
        Role::Unknown => "Không xác định",
    }
}

pub fn verification_label(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Pending => "Chờ xác minh",
        VerificationStatus::Verified => "Đã xác minh",
        VerificationStatus::Rejected => "Bị từ chối",
        VerificationStatus::Unknown => "Chưa rõ",
    }
}

pub fn vehicle_status_label(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Available => "Sẵn sàng",
        VehicleStatus::InUse => "Đang sử dụng",
        VehicleStatus::Maintenance => "Đang bảo dưỡng",
        VehicleStatus::Inactive => "Ngừng hoạt động",
        VehicleStatus::Unknown => "Không xác định",
    }
}

pub fn request_status_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "Chờ duyệt",
        RequestStatus::Approved => "Đã duyệt",
        RequestStatus::Rejected => "Đã từ chối",
    }
}

pub fn schedule_status_label(status: ScheduleStatus) -> &'static str {
    match status {
        ScheduleStatus::Booked => "Đã đặt",
        ScheduleStatus::CheckedIn => "Đang sử dụng",
        ScheduleStatus::Completed => "Hoàn thành",
        ScheduleStatus::Cancelled => "Đã hủy",
    }
}

/// `dd/mm/yyyy hh:mm` in [`LOCAL_OFFSET`].
pub fn format_datetime(at: OffsetDateTime) -> String {
    at.to_offset(LOCAL_OFFSET)
        .format(format_description!("[day]/[month]/[year] [hour]:[minute]"))
        .unwrap_or_default()
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Parse a `datetime-local` input value (`2025-03-01T08:30`) as local time.
///
/// # Errors
///
/// Returns a display message when the value is blank or malformed.
pub fn parse_datetime_local(input: &str) -> Result<OffsetDateTime, &'static str> {
    PrimitiveDateTime::parse(input.trim(), format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .map(|local| local.assume_offset(LOCAL_OFFSET))
        .map_err(|_| messages::DATETIME_INVALID)
}

/// # Errors
///
/// Returns a display message when the field is not a number.
pub fn parse_number<T: FromStr>(input: &str) -> Result<T, &'static str> {
    input.trim().parse().map_err(|_| messages::NUMBER_INVALID)
}

/// Like [`parse_number`], but a blank field is `None`.
///
/// # Errors
///
/// Returns a display message when a non-blank field is not a number.
pub fn parse_optional_number<T: FromStr>(input: &str) -> Result<Option<T>, &'static str> {
    if input.trim().is_empty() { Ok(None) } else { parse_number(input).map(Some) }
}

/// Trimmed text, or `None` when blank.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
