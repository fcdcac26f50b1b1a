use super::*;
use crate::test_support::{MockTransport, client, envelope, login_user_json};
use crate::types::{Role, VerificationStatus};
use serde_json::json;

fn manager(transport: &MockTransport) -> SessionManager<LocalSession, &MockTransport> {
    SessionManager::new(LocalSession::new(), client(transport))
}

fn state<T: Transport>(m: &SessionManager<LocalSession, T>) -> SessionState {
    m.store().snapshot().unwrap()
}

fn user(id: &str, name: &str) -> SessionUser {
    SessionUser {
        user_id: id.to_owned(),
        email: format!("{id}@example.com"),
        full_name: name.to_owned(),
        role: Role::CoOwner,
        verification_status: VerificationStatus::Verified,
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_loading_without_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn stale_probe_result_is_ignored() {
    let mut state = SessionState::default();
    let ticket = state.begin_probe();
    state.sign_in(user("u-1", "Mai"));

    assert!(!state.finish_probe(ticket, None));
    assert_eq!(state.user.as_ref().map(|u| u.user_id.as_str()), Some("u-1"));
}

#[test]
fn newer_probe_supersedes_older() {
    let mut state = SessionState::default();
    let first = state.begin_probe();
    let second = state.begin_probe();

    assert!(!state.finish_probe(first, Some(user("old", "Cũ"))));
    assert!(state.loading);
    assert!(state.finish_probe(second, None));
    assert!(!state.loading);
}

#[test]
fn sign_out_is_remembered_until_the_next_session() {
    let mut state = SessionState::default();
    assert!(!state.is_signed_out());

    state.sign_out();
    assert!(state.is_signed_out());

    state.sign_in(user("u-1", "Mai"));
    assert!(!state.is_signed_out());
}

#[test]
fn require_provider_fails_outside_provider() {
    assert_eq!(require_provider::<LocalSession>(None).unwrap_err(), MissingProvider);
    assert!(require_provider(Some(LocalSession::new())).is_ok());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_holds_exactly_the_login_response_fields() {
    let transport = MockTransport::new();
    let m = manager(&transport);
    m.login(user("u-1", "Người cũ"));

    let fresh: SessionUser = serde_json::from_value(login_user_json()).unwrap();
    assert_eq!(m.login(fresh.clone()), SessionTransition::SignedIn);

    let s = state(&m);
    assert_eq!(s.user, Some(fresh));
    assert!(!s.loading);
    assert_eq!(transport.request_count(), 0);
}

// =============================================================
// probe / refresh_user
// =============================================================

#[tokio::test]
async fn unauthenticated_probe_leaves_user_empty_and_clears_loading() {
    let transport = MockTransport::new();
    transport.ok(json!({ "isAuthenticated": false }));
    let m = manager(&transport);

    let outcome = m.probe(&Cancellation::new()).await;

    assert_eq!(outcome, ProbeOutcome::Anonymous);
    let s = state(&m);
    assert!(s.user.is_none());
    assert!(!s.loading);
}

#[tokio::test]
async fn authenticated_probe_populates_partial_user() {
    let transport = MockTransport::new();
    transport.ok(json!({ "isAuthenticated": true, "userId": "u-7", "email": "b@c.vn", "role": "Admin" }));
    let m = manager(&transport);

    let outcome = m.probe(&Cancellation::new()).await;

    let held = state(&m).user.unwrap();
    assert_eq!(outcome, ProbeOutcome::Authenticated(held.clone()));
    assert_eq!(held.role, Role::Admin);
    assert!(held.full_name.is_empty());
    assert_eq!(held.verification_status, VerificationStatus::Unknown);
}

#[tokio::test]
async fn failed_probe_leaves_user_empty_and_clears_loading() {
    let transport = MockTransport::new();
    transport.push(Err(ApiError::Transport("offline".to_owned())));
    let m = manager(&transport);

    let outcome = m.probe(&Cancellation::new()).await;

    assert!(matches!(outcome, ProbeOutcome::Failed(ApiError::Transport(_))));
    let s = state(&m);
    assert!(s.user.is_none());
    assert!(!s.loading);
}

#[tokio::test]
async fn cancelled_probe_applies_nothing() {
    let transport = MockTransport::new();
    transport.ok(json!({ "isAuthenticated": true, "userId": "u-7", "email": "b@c.vn" }));
    let m = manager(&transport);
    let cancel = Cancellation::new();
    cancel.cancel();

    assert_eq!(m.probe(&cancel).await, ProbeOutcome::Discarded);
    let s = state(&m);
    assert!(s.user.is_none());
    assert!(s.loading);
}

#[tokio::test]
async fn refresh_replaces_user_and_keeps_loading_cleared() {
    let transport = MockTransport::new();
    transport.ok(json!({ "isAuthenticated": true, "userId": "u-1", "email": "a@b.vn" }));
    transport.ok(json!({ "isAuthenticated": false }));
    let m = manager(&transport);
    let cancel = Cancellation::new();

    m.probe(&cancel).await;
    assert!(state(&m).user.is_some());

    assert_eq!(m.refresh_user(&cancel).await, ProbeOutcome::Anonymous);
    let s = state(&m);
    assert!(s.user.is_none());
    assert!(!s.loading);
}

#[tokio::test]
async fn unauthorized_error_rechecks_and_drops_expired_user() {
    let transport = MockTransport::new();
    transport.ok(json!({ "isAuthenticated": false }));
    let m = manager(&transport);
    m.login(user("u-1", "Mai"));
    let expired = ApiError::Status { status: 401, message: None };

    let outcome = m.revalidate_after(&expired, &Cancellation::new()).await;

    assert_eq!(outcome, Some(ProbeOutcome::Anonymous));
    assert!(state(&m).user.is_none());
    assert!(!state(&m).is_signed_out());
    assert!(transport.last_request().url.ends_with("/api/auth/check-session"));
}

#[tokio::test]
async fn other_errors_do_not_recheck_session() {
    let transport = MockTransport::new();
    let m = manager(&transport);
    m.login(user("u-1", "Mai"));
    let cancel = Cancellation::new();

    assert_eq!(m.revalidate_after(&ApiError::Status { status: 403, message: None }, &cancel).await, None);
    assert_eq!(m.revalidate_after(&ApiError::Transport("offline".to_owned()), &cancel).await, None);
    assert_eq!(transport.request_count(), 0);
    assert!(state(&m).user.is_some());
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn logout_clears_user_when_backend_succeeds() {
    let transport = MockTransport::new();
    transport.ok_empty();
    let m = manager(&transport);
    m.login(user("u-1", "Mai"));

    assert_eq!(m.logout().await, SessionTransition::SignedOut);
    assert!(state(&m).user.is_none());
    assert!(transport.last_request().url.ends_with("/api/auth/logout"));
}

#[tokio::test]
async fn logout_clears_user_when_backend_fails() {
    let transport = MockTransport::new();
    transport.push(Ok(envelope(500, false, Some("lỗi"), None)));
    let m = manager(&transport);
    m.login(user("u-1", "Mai"));

    assert_eq!(m.logout().await, SessionTransition::SignedOut);
    assert!(state(&m).user.is_none());
}

#[tokio::test]
async fn logout_clears_user_when_backend_unreachable() {
    let transport = MockTransport::new();
    transport.push(Err(ApiError::Transport("offline".to_owned())));
    let m = manager(&transport);
    m.login(user("u-1", "Mai"));

    assert_eq!(m.logout().await, SessionTransition::SignedOut);
    assert!(state(&m).user.is_none());
}
