//! Mutation actions invoked by forms.
//!
//! Each action delegates to one service call, invalidates the views that
//! depended on the mutated resource, and returns an [`ActionResult`] instead
//! of an error so the calling form can render inline feedback. This is the
//! only place mutation errors become display text.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::messages;
use crate::services::{group, member, schedule, vehicle};
use crate::transport::Transport;
use crate::types::{
    CreateGroupRequest, JoinGroupRequest, Member, MembershipRequest, OwnershipGroup, ReviewNote, Schedule,
    ScheduleRequest, Vehicle, VehicleCheck, VehicleRequest, VerificationDecision,
};

/// Uniform outcome handed back to forms.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Option<T>) -> Self {
        Self { success: true, message: message.into(), data }
    }

    #[must_use]
    pub fn failed(error: &ApiError) -> Self {
        Self { success: false, message: messages::describe(error), data: None }
    }
}

/// Views whose data can go stale after a mutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    VehicleList,
    VehicleDetail(String),
    GroupList,
    JoinRequests,
    MemberList,
    ScheduleList,
}

/// Marks views stale so their next render refetches.
pub trait Invalidate {
    fn invalidate(&self, view: &View);
}

fn settle<T, I>(result: Result<T, ApiError>, success: &str, views: &[View], invalidator: &I) -> ActionResult<T>
where
    I: Invalidate + ?Sized,
{
    match result {
        Ok(data) => {
            for view in views {
                invalidator.invalidate(view);
            }
            ActionResult::ok(success, Some(data))
        }
        Err(e) => {
            log::warn!("action failed: {e}");
            ActionResult::failed(&e)
        }
    }
}

// =============================================================================
// VEHICLES
// =============================================================================

pub async fn create_vehicle<T, I>(client: &ApiClient<T>, invalidator: &I, request: &VehicleRequest) -> ActionResult<Vehicle>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = vehicle::create_vehicle(client, request).await;
    settle(result, messages::VEHICLE_CREATED, &[View::VehicleList, View::Dashboard], invalidator)
}

pub async fn update_vehicle<T, I>(
    client: &ApiClient<T>,
    invalidator: &I,
    vehicle_id: &str,
    request: &VehicleRequest,
) -> ActionResult<Vehicle>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = vehicle::update_vehicle(client, vehicle_id, request).await;
    let views = [View::VehicleList, View::Dashboard, View::VehicleDetail(vehicle_id.to_owned())];
    settle(result, messages::VEHICLE_UPDATED, &views, invalidator)
}

pub async fn delete_vehicle<T, I>(client: &ApiClient<T>, invalidator: &I, vehicle_id: &str) -> ActionResult<()>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = vehicle::delete_vehicle(client, vehicle_id).await.map(|_| ());
    let views = [View::VehicleList, View::Dashboard, View::VehicleDetail(vehicle_id.to_owned())];
    settle(result, messages::VEHICLE_DELETED, &views, invalidator)
}

// =============================================================================
// GROUPS & MEMBERS
// =============================================================================

pub async fn create_group<T, I>(
    client: &ApiClient<T>,
    invalidator: &I,
    request: &CreateGroupRequest,
) -> ActionResult<OwnershipGroup>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = group::create_group(client, request).await;
    settle(result, messages::GROUP_CREATED, &[View::GroupList], invalidator)
}

pub async fn join_group<T, I>(
    client: &ApiClient<T>,
    invalidator: &I,
    group_id: &str,
    request: &JoinGroupRequest,
) -> ActionResult<MembershipRequest>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = group::request_to_join(client, group_id, request).await;
    settle(result, messages::JOIN_REQUEST_SENT, &[View::GroupList], invalidator)
}

pub async fn review_join_request<T, I>(
    client: &ApiClient<T>,
    invalidator: &I,
    request_id: &str,
    approve: bool,
    note: &ReviewNote,
) -> ActionResult<MembershipRequest>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let (result, message) = if approve {
        (group::approve_join_request(client, request_id, note).await, messages::JOIN_REQUEST_APPROVED)
    } else {
        (group::reject_join_request(client, request_id, note).await, messages::JOIN_REQUEST_REJECTED)
    };
    settle(result, message, &[View::JoinRequests, View::GroupList], invalidator)
}

pub async fn review_member<T, I>(
    client: &ApiClient<T>,
    invalidator: &I,
    user_id: &str,
    decision: &VerificationDecision,
) -> ActionResult<Member>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = member::review_verification(client, user_id, decision).await;
    settle(result, messages::MEMBER_REVIEWED, &[View::MemberList], invalidator)
}

// =============================================================================
// SCHEDULES
// =============================================================================

pub async fn book_schedule<T, I>(client: &ApiClient<T>, invalidator: &I, request: &ScheduleRequest) -> ActionResult<Schedule>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = schedule::create_schedule(client, request).await;
    settle(result, messages::SCHEDULE_BOOKED, &[View::ScheduleList, View::Dashboard], invalidator)
}

pub async fn cancel_schedule<T, I>(client: &ApiClient<T>, invalidator: &I, schedule_id: &str) -> ActionResult<()>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = schedule::cancel_schedule(client, schedule_id).await.map(|_| ());
    settle(result, messages::SCHEDULE_CANCELLED, &[View::ScheduleList, View::Dashboard], invalidator)
}

pub async fn check_in<T, I>(
    client: &ApiClient<T>,
    invalidator: &I,
    schedule_id: &str,
    check: &VehicleCheck,
) -> ActionResult<Schedule>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = schedule::check_in(client, schedule_id, check).await;
    let views = [View::ScheduleList, View::Dashboard, View::VehicleList];
    settle(result, messages::CHECKED_IN, &views, invalidator)
}

pub async fn check_out<T, I>(
    client: &ApiClient<T>,
    invalidator: &I,
    schedule_id: &str,
    check: &VehicleCheck,
) -> ActionResult<Schedule>
where
    T: Transport,
    I: Invalidate + ?Sized,
{
    let result = schedule::check_out(client, schedule_id, check).await;
    let views = [View::ScheduleList, View::Dashboard, View::VehicleList];
    settle(result, messages::CHECKED_OUT, &views, invalidator)
}
