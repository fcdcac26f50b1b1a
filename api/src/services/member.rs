//! Member directory and identity-verification review (admin).

#[cfg(test)]
#[path = "member_test.rs"]
mod member_test;

use super::segment;
use crate::client::{ApiClient, encode_body};
use crate::error::ApiError;
use crate::transport::{Method, Transport};
use crate::types::{Member, VerificationDecision};

pub const MEMBERS_PATH: &str = "/api/members";

/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn list_members<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Member>, ApiError> {
    client.get(MEMBERS_PATH).await
}

/// Full member record, including the fields the session probe omits.
///
/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn get_member<T: Transport>(client: &ApiClient<T>, user_id: &str) -> Result<Member, ApiError> {
    client.get(&format!("{MEMBERS_PATH}/{}", segment(user_id))).await
}

/// Record an admin verdict on a member's verification.
///
/// # Errors
///
/// Returns an [`ApiError`] if the round trip fails.
pub async fn review_verification<T: Transport>(
    client: &ApiClient<T>,
    user_id: &str,
    decision: &VerificationDecision,
) -> Result<Member, ApiError> {
    let path = format!("{MEMBERS_PATH}/{}/verification", segment(user_id));
    client.call(Method::Put, &path, Some(encode_body(decision)?)).await
}
