use super::*;
use crate::messages;
use crate::test_support::{MockTransport, client};
use crate::types::RequestStatus;
use serde_json::json;

fn membership_json(status: &str) -> serde_json::Value {
    json!({
        "requestId": "r-1",
        "groupId": "g-1",
        "userId": "u-9",
        "fullName": "Võ Quang",
        "proposedOwnershipPercentage": 20.0,
        "reason": "Cần xe cho gia đình cuối tuần",
        "status": status
    })
}

#[tokio::test]
async fn join_below_minimum_share_is_refused_before_network() {
    let transport = MockTransport::new();
    let req = JoinGroupRequest { proposed_ownership_percentage: 2.0, reason: "Cần xe cho gia đình cuối tuần".to_owned() };

    let err = request_to_join(&client(&transport), "g-1", &req).await.unwrap_err();

    assert_eq!(err, ApiError::Validation(messages::OWNERSHIP_BELOW_MINIMUM.to_owned()));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn join_with_short_reason_is_refused_before_network() {
    let transport = MockTransport::new();
    let req = JoinGroupRequest { proposed_ownership_percentage: 30.0, reason: "đi chơi".to_owned() };

    let err = request_to_join(&client(&transport), "g-1", &req).await.unwrap_err();

    assert_eq!(err, ApiError::Validation(messages::REASON_TOO_SHORT.to_owned()));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn valid_join_posts_to_group() {
    let transport = MockTransport::new();
    transport.ok(membership_json("Pending"));
    let req = JoinGroupRequest { proposed_ownership_percentage: 20.0, reason: "Cần xe cho gia đình cuối tuần".to_owned() };

    let created = request_to_join(&client(&transport), "g-1", &req).await.unwrap();

    assert_eq!(created.status, RequestStatus::Pending);
    assert!(transport.last_request().url.ends_with("/api/groups/g-1/join-requests"));
}

#[tokio::test]
async fn approve_and_reject_hit_verdict_paths() {
    let transport = MockTransport::new();
    transport.ok(membership_json("Approved"));
    transport.ok(membership_json("Rejected"));
    let api = client(&transport);

    let approved = approve_join_request(&api, "r-1", &ReviewNote::default()).await.unwrap();
    assert!(transport.last_request().url.ends_with("/api/groups/join-requests/r-1/approve"));
    let rejected = reject_join_request(&api, "r-1", &ReviewNote { note: Some("Đã đủ thành viên".to_owned()) })
        .await
        .unwrap();
    assert!(transport.last_request().url.ends_with("/api/groups/join-requests/r-1/reject"));

    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(rejected.status, RequestStatus::Rejected);
}

#[tokio::test]
async fn create_group_requires_name() {
    let transport = MockTransport::new();
    let err = create_group(&client(&transport), &CreateGroupRequest::default()).await.unwrap_err();
    assert_eq!(err, ApiError::Validation(messages::GROUP_NAME_REQUIRED.to_owned()));
    assert_eq!(transport.request_count(), 0);
}
