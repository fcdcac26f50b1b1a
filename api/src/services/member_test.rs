use super::*;
use crate::test_support::{MockTransport, client};
use crate::types::VerificationStatus;
use serde_json::json;

fn member_json(status: &str) -> serde_json::Value {
    json!({
        "userId": "u-5",
        "email": "hoa@example.com",
        "fullName": "Phạm Hoa",
        "phoneNumber": "0912345678",
        "role": "CoOwner",
        "verificationStatus": status
    })
}

#[tokio::test]
async fn get_member_returns_verification_status() {
    let transport = MockTransport::new();
    transport.ok(member_json("Pending"));

    let member = get_member(&client(&transport), "u-5").await.unwrap();

    assert_eq!(member.full_name, "Phạm Hoa");
    assert_eq!(member.verification_status, VerificationStatus::Pending);
}

#[tokio::test]
async fn review_verification_puts_decision() {
    let transport = MockTransport::new();
    transport.ok(member_json("Verified"));

    let decision = VerificationDecision { status: VerificationStatus::Verified, note: None };
    let member = review_verification(&client(&transport), "u-5", &decision).await.unwrap();

    assert_eq!(member.verification_status, VerificationStatus::Verified);
    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Put);
    assert!(sent.url.ends_with("/api/members/u-5/verification"));
    assert_eq!(sent.body, Some(json!({ "status": "Verified", "note": null })));
}
