use super::*;
use crate::error::ApiError;
use crate::session::{Cancellation, LocalSession};
use crate::test_support::{MockTransport, client};
use crate::types::{SessionUser, VerificationStatus};
use serde_json::json;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}

fn signed_in(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.sign_in(SessionUser {
        user_id: "u-1".to_owned(),
        email: "a@b.vn".to_owned(),
        full_name: "An".to_owned(),
        role,
        verification_status: VerificationStatus::Verified,
    });
    state
}

// =============================================================
// guard
// =============================================================

#[test]
fn guard_waits_while_loading() {
    let state = SessionState::default();
    assert_eq!(guard(&state, Area::Member), GuardDecision::Pending);
    assert_eq!(guard(&state, Area::Admin), GuardDecision::Pending);
}

#[test]
fn guard_redirects_anonymous_to_login() {
    let mut state = SessionState::default();
    state.sign_out();
    assert_eq!(guard(&state, Area::Member), GuardDecision::Redirect(LOGIN_ROUTE));
    assert_eq!(guard(&state, Area::Admin), GuardDecision::Redirect(LOGIN_ROUTE));
}

#[test]
fn guard_sends_non_admin_away_from_admin_area() {
    assert_eq!(guard(&signed_in(Role::CoOwner), Area::Admin), GuardDecision::Redirect(MEMBER_HOME_ROUTE));
    assert_eq!(guard(&signed_in(Role::CoOwner), Area::Member), GuardDecision::Allow);
    assert_eq!(guard(&signed_in(Role::Admin), Area::Admin), GuardDecision::Allow);
}

#[test]
fn home_route_depends_on_role() {
    assert_eq!(home_route(Role::Admin), ADMIN_HOME_ROUTE);
    assert_eq!(home_route(Role::Staff), MEMBER_HOME_ROUTE);
}

#[test]
fn only_sign_out_navigates() {
    let nav = RecordingNavigator::default();
    follow_transition(SessionTransition::SignedIn, &nav);
    follow_transition(SessionTransition::Unchanged, &nav);
    assert!(nav.visits.borrow().is_empty());
    follow_transition(SessionTransition::SignedOut, &nav);
    assert_eq!(*nav.visits.borrow(), vec![LOGIN_ROUTE.to_owned()]);
}

#[test]
fn guard_redirect_follows_guard_until_sign_out() {
    let mut state = SessionState::default();
    assert_eq!(guard_redirect(&state, Area::Member), None);

    let ticket = state.begin_probe();
    state.finish_probe(ticket, None);
    assert_eq!(guard_redirect(&state, Area::Member), Some(LOGIN_ROUTE));
    assert_eq!(guard_redirect(&signed_in(Role::CoOwner), Area::Admin), Some(MEMBER_HOME_ROUTE));

    state.sign_out();
    assert_eq!(guard(&state, Area::Member), GuardDecision::Redirect(LOGIN_ROUTE));
    assert_eq!(guard_redirect(&state, Area::Member), None);
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[tokio::test]
async fn anonymous_probe_makes_protected_layout_redirect_to_login() {
    let transport = MockTransport::new();
    transport.ok(json!({ "isAuthenticated": false }));
    let manager = SessionManager::new(LocalSession::new(), client(&transport));

    manager.probe(&Cancellation::new()).await;

    let state = manager.store().snapshot().unwrap();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(guard(&state, Area::Member), GuardDecision::Redirect(LOGIN_ROUTE));
}

#[tokio::test]
async fn logout_navigates_to_login_once_even_if_backend_fails() {
    let transport = MockTransport::new();
    transport.push(Err(ApiError::Transport("offline".to_owned())));
    let manager = SessionManager::new(LocalSession::new(), client(&transport));
    manager.store().with_mut(|s| *s = signed_in(Role::CoOwner));
    let nav = RecordingNavigator::default();

    logout_and_redirect(&manager, &nav).await;

    assert!(manager.store().snapshot().unwrap().user.is_none());
    assert_eq!(*nav.visits.borrow(), vec![LOGIN_ROUTE.to_owned()]);
}

#[tokio::test]
async fn logout_navigates_to_login_once_on_success() {
    let transport = MockTransport::new();
    transport.ok_empty();
    let manager = SessionManager::new(LocalSession::new(), client(&transport));
    let nav = RecordingNavigator::default();

    logout_and_redirect(&manager, &nav).await;

    assert_eq!(nav.visits.borrow().len(), 1);
}

#[tokio::test]
async fn logout_with_guarded_layout_navigates_once() {
    let transport = MockTransport::new();
    transport.ok_empty();
    let manager = SessionManager::new(LocalSession::new(), client(&transport));
    manager.store().with_mut(|s| *s = signed_in(Role::CoOwner));
    let nav = RecordingNavigator::default();

    // The layout re-evaluates after every session write, as its effect would.
    let layout_reacts = |nav: &RecordingNavigator| {
        let state = manager.store().snapshot().unwrap();
        if let Some(path) = guard_redirect(&state, Area::Member) {
            nav.navigate(path);
        }
    };

    layout_reacts(&nav);
    logout_and_redirect(&manager, &nav).await;
    layout_reacts(&nav);

    assert_eq!(*nav.visits.borrow(), vec![LOGIN_ROUTE.to_owned()]);
}

#[tokio::test]
async fn anonymous_probe_lets_layout_redirect_itself() {
    let transport = MockTransport::new();
    transport.ok(json!({ "isAuthenticated": false }));
    let manager = SessionManager::new(LocalSession::new(), client(&transport));

    manager.probe(&Cancellation::new()).await;

    let state = manager.store().snapshot().unwrap();
    assert_eq!(guard_redirect(&state, Area::Member), Some(LOGIN_ROUTE));
}
