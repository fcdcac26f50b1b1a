//! Ownership groups and membership requests.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use super::{precheck, segment};
use crate::client::{ApiClient, encode_body};
use crate::error::ApiError;
use crate::transport::{Method, Transport};
use crate::types::{CreateGroupRequest, JoinGroupRequest, MembershipRequest, OwnershipGroup, ReviewNote};

pub const GROUPS_PATH: &str = "/api/groups";
pub const JOIN_REQUESTS_PATH: &str = "/api/groups/join-requests";

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn list_groups<T: Transport>(client: &ApiClient<T>) -> Result<Vec<OwnershipGroup>, ApiError> {
    client.get(GROUPS_PATH).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn get_group<T: Transport>(client: &ApiClient<T>, group_id: &str) -> Result<OwnershipGroup, ApiError> {
    client.get(&format!("{GROUPS_PATH}/{}", segment(group_id))).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for a blank name (nothing is sent),
/// otherwise any round-trip failure.
pub async fn create_group<T: Transport>(
    client: &ApiClient<T>,
    request: &CreateGroupRequest,
) -> Result<OwnershipGroup, ApiError> {
    precheck(request)?;
    client.send_json(Method::Post, GROUPS_PATH, request).await
}

/// Ask to join `group_id` with a proposed ownership share.
///
/// The share and reason are checked locally first; a refused request never
/// reaches the network.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the share is below the minimum or
/// the reason is too short, otherwise any round-trip failure.
pub async fn request_to_join<T: Transport>(
    client: &ApiClient<T>,
    group_id: &str,
    request: &JoinGroupRequest,
) -> Result<MembershipRequest, ApiError> {
    precheck(request)?;
    let path = format!("{GROUPS_PATH}/{}/join-requests", segment(group_id));
    client.send_json(Method::Post, &path, request).await
}

/// Pending join requests awaiting admin review.
///
/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn list_join_requests<T: Transport>(client: &ApiClient<T>) -> Result<Vec<MembershipRequest>, ApiError> {
    client.get(JOIN_REQUESTS_PATH).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn approve_join_request<T: Transport>(
    client: &ApiClient<T>,
    request_id: &str,
    note: &ReviewNote,
) -> Result<MembershipRequest, ApiError> {
    review(client, request_id, "approve", note).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn reject_join_request<T: Transport>(
    client: &ApiClient<T>,
    request_id: &str,
    note: &ReviewNote,
) -> Result<MembershipRequest, ApiError> {
    review(client, request_id, "reject", note).await
}

async fn review<T: Transport>(
    client: &ApiClient<T>,
    request_id: &str,
    verdict: &str,
    note: &ReviewNote,
) -> Result<MembershipRequest, ApiError> {
    let path = format!("{JOIN_REQUESTS_PATH}/{}/{verdict}", segment(request_id));
    client.call(Method::Put, &path, Some(encode_body(note)?)).await
}
