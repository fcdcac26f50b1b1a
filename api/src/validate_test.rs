use super::*;
use time::macros::datetime;

fn join(pct: f64, reason: &str) -> JoinGroupRequest {
    JoinGroupRequest { proposed_ownership_percentage: pct, reason: reason.to_owned() }
}

fn vehicle_request() -> VehicleRequest {
    VehicleRequest {
        license_plate: "30A-999.99".to_owned(),
        brand: "VinFast".to_owned(),
        model: "VF 8".to_owned(),
        year: 2024,
        battery_capacity_kwh: 87.7,
        image_url: None,
        group_id: None,
    }
}

// =============================================================
// JoinGroupRequest
// =============================================================

#[test]
fn join_request_below_minimum_percentage_is_rejected() {
    assert_eq!(join(4.9, "Đi làm hằng ngày ở Thủ Đức").validate(), Err(messages::OWNERSHIP_BELOW_MINIMUM.to_owned()));
}

#[test]
fn join_request_at_minimum_is_accepted() {
    assert_eq!(join(MIN_OWNERSHIP_PERCENTAGE, "Đi làm hằng ngày ở Thủ Đức").validate(), Ok(()));
}

#[test]
fn join_request_above_hundred_is_rejected() {
    assert_eq!(join(100.5, "Đi làm hằng ngày ở Thủ Đức").validate(), Err(messages::OWNERSHIP_ABOVE_MAXIMUM.to_owned()));
}

#[test]
fn join_request_nan_percentage_is_rejected() {
    assert!(join(f64::NAN, "Đi làm hằng ngày ở Thủ Đức").validate().is_err());
}

#[test]
fn join_request_short_reason_is_rejected() {
    assert_eq!(join(20.0, "ngắn quá").validate(), Err(messages::REASON_TOO_SHORT.to_owned()));
}

#[test]
fn join_request_reason_counts_characters_not_bytes() {
    // Ten Vietnamese characters are more than ten bytes but exactly ten chars.
    assert_eq!(join(20.0, "đườngđường").validate(), Ok(()));
    assert_eq!(join(20.0, "   đường   ").validate(), Err(messages::REASON_TOO_SHORT.to_owned()));
}

// =============================================================
// Other requests
// =============================================================

#[test]
fn login_requires_email_and_password() {
    let req = LoginRequest { email: " ".to_owned(), password: "x".to_owned() };
    assert_eq!(req.validate(), Err(messages::EMAIL_REQUIRED.to_owned()));
    let req = LoginRequest { email: "a@b.vn".to_owned(), password: String::new() };
    assert_eq!(req.validate(), Err(messages::PASSWORD_REQUIRED.to_owned()));
}

#[test]
fn register_checks_email_and_password_length() {
    let mut req = RegisterRequest {
        full_name: "Nguyễn Văn A".to_owned(),
        email: "nva.example.com".to_owned(),
        password: "secret1".to_owned(),
        phone_number: None,
    };
    assert_eq!(req.validate(), Err(messages::EMAIL_INVALID.to_owned()));
    req.email = "nva@example.com".to_owned();
    req.password = "12345".to_owned();
    assert_eq!(req.validate(), Err(messages::PASSWORD_TOO_SHORT.to_owned()));
    req.password = "123456".to_owned();
    assert_eq!(req.validate(), Ok(()));
}

#[test]
fn vehicle_request_checks_year_and_capacity() {
    assert_eq!(vehicle_request().validate(), Ok(()));

    let mut req = vehicle_request();
    req.year = 1985;
    assert_eq!(req.validate(), Err(messages::YEAR_OUT_OF_RANGE.to_owned()));

    let mut req = vehicle_request();
    req.battery_capacity_kwh = 0.0;
    assert_eq!(req.validate(), Err(messages::BATTERY_CAPACITY_INVALID.to_owned()));

    let mut req = vehicle_request();
    req.license_plate.clear();
    assert_eq!(req.validate(), Err(messages::PLATE_REQUIRED.to_owned()));
}

#[test]
fn schedule_request_requires_end_after_start() {
    let req = ScheduleRequest {
        vehicle_id: "v-1".to_owned(),
        start_time: datetime!(2026-10-20 10:00 UTC),
        end_time: datetime!(2026-10-20 10:00 UTC),
        purpose: None,
    };
    assert_eq!(req.validate(), Err(messages::SCHEDULE_RANGE_INVALID.to_owned()));
}

#[test]
fn vehicle_check_caps_battery_level() {
    let check = VehicleCheck { battery_level: Some(101), ..VehicleCheck::default() };
    assert_eq!(check.validate(), Err(messages::BATTERY_LEVEL_INVALID.to_owned()));
    let check = VehicleCheck { battery_level: Some(100), ..VehicleCheck::default() };
    assert_eq!(check.validate(), Ok(()));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn group_with_out_of_range_member_share_fails() {
    let group = OwnershipGroup {
        group_id: "g-1".to_owned(),
        group_name: "Nhóm".to_owned(),
        description: None,
        vehicle_id: None,
        members: vec![GroupMember { user_id: "u".to_owned(), full_name: "U".to_owned(), ownership_percentage: 120.0 }],
    };
    assert!(group.validate().is_err());
}

#[test]
fn authenticated_probe_without_user_id_fails() {
    let probe = SessionProbe { is_authenticated: true, ..SessionProbe::default() };
    assert!(probe.validate().is_err());
    assert!(SessionProbe::default().validate().is_ok());
}

#[test]
fn vec_validation_stops_at_first_bad_item() {
    let users = vec![
        SessionUser {
            user_id: "u-1".to_owned(),
            email: "a@b.vn".to_owned(),
            full_name: String::new(),
            role: Role::CoOwner,
            verification_status: VerificationStatus::Verified,
        },
        SessionUser {
            user_id: String::new(),
            email: "c@d.vn".to_owned(),
            full_name: String::new(),
            role: Role::CoOwner,
            verification_status: VerificationStatus::Verified,
        },
    ];
    assert_eq!(users.validate(), Err("empty userId".to_owned()));
}
