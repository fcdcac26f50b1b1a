//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthProvider`] owns the session signal, runs the mount-time probe, and
//! provides an [`AuthContext`]. Route layouts and user-aware components read
//! it through [`use_session`]; login/logout go through [`AuthContext::manager`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api::session::{Cancellation, SessionManager, SessionState, SessionStore, require_provider};
use api::types::SessionUser;
use leptos::prelude::*;

use crate::net::api::{ApiHandle, BrowserTransport, use_api};

/// Session manager over the browser store and transport.
pub type WebSession = SessionManager<AuthContext, BrowserTransport>;

/// Copyable handle to the session signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthContext {
    state: RwSignal<SessionState>,
}

impl AuthContext {
    /// Tracked snapshot for views and effects.
    pub fn get(self) -> SessionState {
        self.state.get()
    }

    pub fn user(self) -> Option<SessionUser> {
        self.state.with(|s| s.user.clone())
    }

    pub fn manager(self, api: ApiHandle) -> WebSession {
        SessionManager::new(self, api.client())
    }
}

impl SessionStore for AuthContext {
    fn snapshot(&self) -> Option<SessionState> {
        self.state.try_get_untracked()
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.state.try_update(f)
    }
}

/// The session provided by the nearest [`AuthProvider`].
///
/// # Panics
///
/// Panics when called outside an [`AuthProvider`]; that is a wiring bug.
pub fn use_session() -> AuthContext {
    match require_provider(use_context::<AuthContext>()) {
        Ok(auth) => auth,
        Err(e) => panic!("{e}"),
    }
}

/// Provides the session and probes the backend once per mount.
///
/// The probe is cancelled when the provider unmounts so a late response
/// never writes into a disposed signal.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::default();
    provide_context(auth);

    let manager = auth.manager(use_api());
    let cancel = Cancellation::new();
    let probe_cancel = cancel.clone();
    leptos::task::spawn_local(async move {
        manager.probe(&probe_cancel).await;
    });
    on_cleanup(move || cancel.cancel());

    children()
}

/// Name to greet the user with; the probe does not return a full name.
pub fn display_name(user: &SessionUser) -> &str {
    if user.full_name.trim().is_empty() { &user.email } else { &user.full_name }
}
