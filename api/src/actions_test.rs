use super::*;
use crate::test_support::{MockTransport, client, envelope, vehicle_json};
use serde_json::json;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingInvalidator {
    views: RefCell<Vec<View>>,
}

impl Invalidate for RecordingInvalidator {
    fn invalidate(&self, view: &View) {
        self.views.borrow_mut().push(view.clone());
    }
}

fn vehicle_request() -> VehicleRequest {
    VehicleRequest {
        license_plate: "51K-888.88".to_owned(),
        brand: "VinFast".to_owned(),
        model: "VF 8".to_owned(),
        year: 2024,
        battery_capacity_kwh: 87.7,
        image_url: None,
        group_id: None,
    }
}

#[tokio::test]
async fn create_vehicle_success_invalidates_list_and_dashboard() {
    let transport = MockTransport::new();
    transport.ok(vehicle_json("v-1"));
    let inv = RecordingInvalidator::default();

    let result = create_vehicle(&client(&transport), &inv, &vehicle_request()).await;

    assert!(result.success);
    assert_eq!(result.message, messages::VEHICLE_CREATED);
    assert_eq!(result.data.unwrap().vehicle_id, "v-1");
    assert_eq!(*inv.views.borrow(), vec![View::VehicleList, View::Dashboard]);
}

#[tokio::test]
async fn failed_mutation_returns_message_and_invalidates_nothing() {
    let transport = MockTransport::new();
    transport.push(Ok(envelope(200, false, Some("Biển số đã tồn tại"), None)));
    let inv = RecordingInvalidator::default();

    let result = create_vehicle(&client(&transport), &inv, &vehicle_request()).await;

    assert!(!result.success);
    assert_eq!(result.message, "Biển số đã tồn tại");
    assert!(result.data.is_none());
    assert!(inv.views.borrow().is_empty());
}

#[tokio::test]
async fn update_vehicle_also_invalidates_detail() {
    let transport = MockTransport::new();
    transport.ok(vehicle_json("v-2"));
    let inv = RecordingInvalidator::default();

    update_vehicle(&client(&transport), &inv, "v-2", &vehicle_request()).await;

    assert!(inv.views.borrow().contains(&View::VehicleDetail("v-2".to_owned())));
}

#[tokio::test]
async fn delete_vehicle_network_failure_uses_network_message() {
    let transport = MockTransport::new();
    transport.push(Err(ApiError::Transport("offline".to_owned())));
    let inv = RecordingInvalidator::default();

    let result = delete_vehicle(&client(&transport), &inv, "v-3").await;

    assert!(!result.success);
    assert_eq!(result.message, messages::NETWORK_ERROR);
}

#[tokio::test]
async fn create_group_refreshes_group_list() {
    let transport = MockTransport::new();
    transport.ok(json!({
        "groupId": "g-9",
        "groupName": "Nhóm VF 8 Thủ Đức",
        "description": null,
        "vehicleId": "v-1"
    }));
    let inv = RecordingInvalidator::default();
    let req = CreateGroupRequest {
        group_name: "Nhóm VF 8 Thủ Đức".to_owned(),
        description: None,
        vehicle_id: Some("v-1".to_owned()),
    };

    let result = create_group(&client(&transport), &inv, &req).await;

    assert!(result.success);
    assert_eq!(result.message, messages::GROUP_CREATED);
    assert!(result.data.unwrap().members.is_empty());
    assert_eq!(*inv.views.borrow(), vec![View::GroupList]);
}

#[tokio::test]
async fn create_group_without_name_is_not_sent() {
    let transport = MockTransport::new();
    let inv = RecordingInvalidator::default();
    let req = CreateGroupRequest { group_name: "   ".to_owned(), description: None, vehicle_id: None };

    let result = create_group(&client(&transport), &inv, &req).await;

    assert!(!result.success);
    assert_eq!(result.message, messages::GROUP_NAME_REQUIRED);
    assert_eq!(transport.request_count(), 0);
    assert!(inv.views.borrow().is_empty());
}

#[tokio::test]
async fn join_group_validation_failure_is_reported_inline() {
    let transport = MockTransport::new();
    let inv = RecordingInvalidator::default();
    let req = JoinGroupRequest { proposed_ownership_percentage: 1.0, reason: "Cần xe đi làm mỗi ngày".to_owned() };

    let result = join_group(&client(&transport), &inv, "g-1", &req).await;

    assert!(!result.success);
    assert_eq!(result.message, messages::OWNERSHIP_BELOW_MINIMUM);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn review_join_request_reports_verdict() {
    let transport = MockTransport::new();
    transport.ok(json!({
        "requestId": "r-1",
        "groupId": "g-1",
        "userId": "u-1",
        "proposedOwnershipPercentage": 10.0,
        "reason": "Đi làm ở khu công nghệ cao",
        "status": "Rejected"
    }));
    let inv = RecordingInvalidator::default();

    let result = review_join_request(&client(&transport), &inv, "r-1", false, &ReviewNote::default()).await;

    assert!(result.success);
    assert_eq!(result.message, messages::JOIN_REQUEST_REJECTED);
    assert_eq!(*inv.views.borrow(), vec![View::JoinRequests, View::GroupList]);
}

#[test]
fn action_result_serializes_without_empty_data() {
    let result: ActionResult<()> = ActionResult::failed(&ApiError::Rejected { message: None });
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "success": false, "message": messages::GENERIC_ERROR })
    );
}
