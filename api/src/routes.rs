//! Route-level authorization for the admin and member layouts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layouts ask [`guard`] what to render for the current [`SessionState`] and
//! [`guard_redirect`] where to go. Sign-out navigates through
//! [`follow_transition`] only, so a logout lands on the login page once.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::session::{SessionManager, SessionState, SessionStore, SessionTransition};
use crate::transport::Transport;
use crate::types::Role;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const MEMBER_HOME_ROUTE: &str = "/dashboard";
pub const ADMIN_HOME_ROUTE: &str = "/admin";

/// Which layout is asking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    /// Any signed-in account.
    Member,
    /// Admin accounts only.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The first probe has not settled; render a placeholder, do not redirect.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Decide whether `area` may render for `state`.
#[must_use]
pub fn guard(state: &SessionState, area: Area) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    let Some(user) = &state.user else {
        return GuardDecision::Redirect(LOGIN_ROUTE);
    };
    match area {
        Area::Admin if !user.role.is_admin() => GuardDecision::Redirect(MEMBER_HOME_ROUTE),
        _ => GuardDecision::Allow,
    }
}

/// Where a layout should send the user itself, if anywhere.
///
/// After an explicit sign-out [`follow_transition`] has already left for the
/// login page, so the layout stays put.
#[must_use]
pub fn guard_redirect(state: &SessionState, area: Area) -> Option<&'static str> {
    match guard(state, area) {
        GuardDecision::Redirect(path) if !state.is_signed_out() => Some(path),
        _ => None,
    }
}

/// Landing route after sign-in.
#[must_use]
pub fn home_route(role: Role) -> &'static str {
    if role.is_admin() { ADMIN_HOME_ROUTE } else { MEMBER_HOME_ROUTE }
}

/// Performs navigation on behalf of the route layer.
pub trait Navigator {
    /// Leave the current page for `path`, discarding in-memory view state.
    fn navigate(&self, path: &str);
}

/// React to a session transition. Only sign-out navigates.
pub fn follow_transition<N: Navigator + ?Sized>(transition: SessionTransition, navigator: &N) {
    if transition == SessionTransition::SignedOut {
        navigator.navigate(LOGIN_ROUTE);
    }
}

/// Log out and land on the login page exactly once, whatever the backend says.
pub async fn logout_and_redirect<S, T, N>(manager: &SessionManager<S, T>, navigator: &N)
where
    S: SessionStore,
    T: Transport,
    N: Navigator + ?Sized,
{
    let transition = manager.logout().await;
    follow_transition(transition, navigator);
}
