//! User-facing Vietnamese messages.
//!
//! All display text produced from errors or validation lives here so pages,
//! actions and the CLI render the same wording.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::error::ApiError;

pub const GENERIC_ERROR: &str = "Đã xảy ra lỗi không xác định. Vui lòng thử lại.";
pub const NETWORK_ERROR: &str = "Không thể kết nối đến máy chủ. Vui lòng kiểm tra kết nối mạng.";
pub const INVALID_RESPONSE: &str = "Dữ liệu phản hồi từ máy chủ không hợp lệ.";
pub const SESSION_EXPIRED: &str = "Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại.";
pub const FORBIDDEN: &str = "Bạn không có quyền thực hiện thao tác này.";
pub const NOT_FOUND: &str = "Không tìm thấy dữ liệu yêu cầu.";
pub const SERVER_ERROR: &str = "Máy chủ đang gặp sự cố. Vui lòng thử lại sau.";

pub const EMAIL_REQUIRED: &str = "Vui lòng nhập email.";
pub const EMAIL_INVALID: &str = "Email không hợp lệ.";
pub const PASSWORD_REQUIRED: &str = "Vui lòng nhập mật khẩu.";
pub const PASSWORD_TOO_SHORT: &str = "Mật khẩu phải có ít nhất 6 ký tự.";
pub const FULL_NAME_REQUIRED: &str = "Vui lòng nhập họ và tên.";

pub const OWNERSHIP_BELOW_MINIMUM: &str = "Tỷ lệ sở hữu đề xuất phải tối thiểu 5%.";
pub const OWNERSHIP_ABOVE_MAXIMUM: &str = "Tỷ lệ sở hữu đề xuất không được vượt quá 100%.";
pub const REASON_TOO_SHORT: &str = "Lý do tham gia phải có ít nhất 10 ký tự.";
pub const GROUP_NAME_REQUIRED: &str = "Vui lòng nhập tên nhóm.";

pub const PLATE_REQUIRED: &str = "Vui lòng nhập biển số xe.";
pub const BRAND_MODEL_REQUIRED: &str = "Vui lòng nhập hãng và mẫu xe.";
pub const YEAR_OUT_OF_RANGE: &str = "Năm sản xuất không hợp lệ.";
pub const BATTERY_CAPACITY_INVALID: &str = "Dung lượng pin phải lớn hơn 0.";

pub const SCHEDULE_RANGE_INVALID: &str = "Thời gian kết thúc phải sau thời gian bắt đầu.";
pub const VEHICLE_REQUIRED: &str = "Vui lòng chọn xe.";
pub const BATTERY_LEVEL_INVALID: &str = "Mức pin phải nằm trong khoảng 0–100%.";
pub const NUMBER_INVALID: &str = "Vui lòng nhập một số hợp lệ.";
pub const DATETIME_INVALID: &str = "Thời gian không hợp lệ.";

pub const REGISTERED: &str = "Đăng ký thành công. Vui lòng đăng nhập.";
pub const VEHICLE_CREATED: &str = "Thêm xe thành công.";
pub const VEHICLE_UPDATED: &str = "Cập nhật xe thành công.";
pub const VEHICLE_DELETED: &str = "Xóa xe thành công.";
pub const GROUP_CREATED: &str = "Tạo nhóm thành công.";
pub const JOIN_REQUEST_SENT: &str = "Đã gửi yêu cầu tham gia nhóm.";
pub const JOIN_REQUEST_APPROVED: &str = "Đã duyệt yêu cầu tham gia.";
pub const JOIN_REQUEST_REJECTED: &str = "Đã từ chối yêu cầu tham gia.";
pub const MEMBER_REVIEWED: &str = "Đã cập nhật trạng thái xác minh.";
pub const SCHEDULE_BOOKED: &str = "Đặt lịch thành công.";
pub const SCHEDULE_CANCELLED: &str = "Đã hủy lịch.";
pub const CHECKED_IN: &str = "Nhận xe thành công.";
pub const CHECKED_OUT: &str = "Trả xe thành công.";

/// Display text for a failed request.
///
/// A server-provided message wins; otherwise the error kind picks the text.
/// The generic message is used only when nothing more specific is known.
#[must_use]
pub fn describe(error: &ApiError) -> String {
    if let Some(message) = error.server_message().map(str::trim).filter(|m| !m.is_empty()) {
        return message.to_owned();
    }
    match error {
        ApiError::Transport(_) => NETWORK_ERROR.to_owned(),
        ApiError::Status { status, .. } => status_message(*status).to_owned(),
        ApiError::Schema(_) => INVALID_RESPONSE.to_owned(),
        ApiError::Validation(message) => message.clone(),
        ApiError::Rejected { .. } => GENERIC_ERROR.to_owned(),
    }
}

fn status_message(status: u16) -> &'static str {
    match status {
        401 => SESSION_EXPIRED,
        403 => FORBIDDEN,
        404 => NOT_FOUND,
        500..=599 => SERVER_ERROR,
        _ => GENERIC_ERROR,
    }
}
