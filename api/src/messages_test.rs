use super::*;

#[test]
fn server_message_takes_priority() {
    let err = ApiError::Rejected { message: Some("Biển số đã tồn tại".to_owned()) };
    assert_eq!(describe(&err), "Biển số đã tồn tại");

    let err = ApiError::Status { status: 409, message: Some("Trùng lịch".to_owned()) };
    assert_eq!(describe(&err), "Trùng lịch");
}

#[test]
fn blank_server_message_falls_back_to_kind() {
    let err = ApiError::Status { status: 404, message: Some("  ".to_owned()) };
    assert_eq!(describe(&err), NOT_FOUND);
}

#[test]
fn transport_failure_uses_network_message() {
    assert_eq!(describe(&ApiError::Transport("dns".to_owned())), NETWORK_ERROR);
}

#[test]
fn status_codes_map_to_specific_messages() {
    let msg = |status| describe(&ApiError::Status { status, message: None });
    assert_eq!(msg(401), SESSION_EXPIRED);
    assert_eq!(msg(403), FORBIDDEN);
    assert_eq!(msg(503), SERVER_ERROR);
    assert_eq!(msg(418), GENERIC_ERROR);
}

#[test]
fn schema_failure_uses_invalid_response_message() {
    assert_eq!(describe(&ApiError::Schema("missing field".to_owned())), INVALID_RESPONSE);
}

#[test]
fn validation_message_is_passed_through() {
    assert_eq!(describe(&ApiError::Validation(REASON_TOO_SHORT.to_owned())), REASON_TOO_SHORT);
}

#[test]
fn rejection_without_message_is_generic() {
    assert_eq!(describe(&ApiError::Rejected { message: None }), GENERIC_ERROR);
}
