use super::*;
use api::messages;

#[test]
fn build_join_request_parses_percentage_and_trims_reason() {
    let request = build_join_request(" 12.5 ", "  Cần xe đi làm hằng ngày  ").unwrap();
    assert_eq!(request.proposed_ownership_percentage, 12.5);
    assert_eq!(request.reason, "Cần xe đi làm hằng ngày");
}

#[test]
fn build_join_request_rejects_non_numeric_percentage() {
    assert_eq!(build_join_request("mười", "Cần xe đi làm hằng ngày"), Err(messages::NUMBER_INVALID));
}

#[test]
fn build_join_request_leaves_range_checks_to_the_action() {
    assert!(build_join_request("1", "ngắn").is_ok());
}
