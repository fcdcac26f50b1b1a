//! Client-held session: who is signed in for the current page lifetime.
//!
//! ARCHITECTURE
//! ============
//! [`SessionState`] is a plain value. It lives behind a [`SessionStore`]
//! handle injected by the view layer (a Leptos signal in the browser, a
//! [`LocalSession`] in tests and the CLI), so there is no ambient global.
//! [`SessionManager`] pairs a store with an [`ApiClient`] and implements
//! `login`, `logout`, `refresh_user` and the mount-time probe.
//!
//! Navigation is not a session concern: `logout` reports a
//! [`SessionTransition::SignedOut`] and the route layer reacts to it
//! (see [`crate::routes::follow_transition`]).
//!
//! STALENESS
//! =========
//! The held user reflects the last successful probe or explicit login. Each
//! probe takes a ticket; an explicit login/logout or a newer probe makes older
//! tickets stale, and a cancelled [`Cancellation`] discards the result.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::services::auth;
use crate::transport::Transport;
use crate::types::SessionUser;

// =============================================================================
// STATE
// =============================================================================

/// Session snapshot shared with views.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    /// True from mount until the first probe settles; cleared exactly once.
    pub loading: bool,
    /// Set by an explicit sign-out, which navigates on its own.
    signed_out: bool,
    probe_seq: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, signed_out: false, probe_seq: 0 }
    }
}

/// Identifies one probe so late results can be recognised as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeTicket(u64);

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the user went away through an explicit sign-out.
    #[must_use]
    pub fn is_signed_out(&self) -> bool {
        self.signed_out
    }

    /// Replace the held user outright. In-flight probes become stale.
    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.loading = false;
        self.signed_out = false;
        self.probe_seq += 1;
    }

    /// Drop the held user. In-flight probes become stale.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.signed_out = true;
        self.probe_seq += 1;
    }

    /// Start a probe; any earlier probe becomes stale.
    pub fn begin_probe(&mut self) -> ProbeTicket {
        self.probe_seq += 1;
        ProbeTicket(self.probe_seq)
    }

    /// Apply a probe result if `ticket` is still current.
    ///
    /// Returns `false` (and changes nothing) for a stale ticket.
    pub fn finish_probe(&mut self, ticket: ProbeTicket, user: Option<SessionUser>) -> bool {
        if ticket.0 != self.probe_seq {
            return false;
        }
        self.user = user;
        self.loading = false;
        self.signed_out = false;
        true
    }
}

// =============================================================================
// STORE SEAM
// =============================================================================

/// Owner of the live [`SessionState`].
pub trait SessionStore {
    /// Current state, or `None` once the owning view is gone.
    fn snapshot(&self) -> Option<SessionState>;

    /// Mutate the state in place, or `None` once the owning view is gone.
    fn with_mut<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;
}

/// Single-threaded in-memory store.
#[derive(Clone, Debug, Default)]
pub struct LocalSession(Rc<RefCell<SessionState>>);

impl LocalSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for LocalSession {
    fn snapshot(&self) -> Option<SessionState> {
        Some(self.0.borrow().clone())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        Some(f(&mut self.0.borrow_mut()))
    }
}

/// Error raised when session state is read outside its provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("session context used outside of its provider")]
pub struct MissingProvider;

/// Require a provided session handle.
///
/// # Errors
///
/// Returns [`MissingProvider`] when `provided` is `None`.
pub fn require_provider<S>(provided: Option<S>) -> Result<S, MissingProvider> {
    provided.ok_or(MissingProvider)
}

// =============================================================================
// CANCELLATION
// =============================================================================

/// Cancellation flag tied to a consuming view's lifetime.
#[derive(Clone, Debug, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// =============================================================================
// MANAGER
// =============================================================================

/// State change produced by a session operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTransition {
    SignedIn,
    SignedOut,
    Unchanged,
}

/// How a probe ended.
#[derive(Clone, Debug, PartialEq)]
pub enum ProbeOutcome {
    Authenticated(SessionUser),
    Anonymous,
    /// The probe failed; the held user is left `None`.
    Failed(ApiError),
    /// Cancelled, superseded, or the store is gone; nothing was applied.
    Discarded,
}

/// `login` / `logout` / `refresh_user` over an injected store.
#[derive(Clone, Debug)]
pub struct SessionManager<S, T> {
    store: S,
    client: ApiClient<T>,
}

impl<S: SessionStore, T: Transport> SessionManager<S, T> {
    pub fn new(store: S, client: ApiClient<T>) -> Self {
        Self { store, client }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Replace the held user with `user`.
    ///
    /// No backend check happens here; callers pass the record returned by a
    /// successful login.
    pub fn login(&self, user: SessionUser) -> SessionTransition {
        log::info!("session: signed in as {}", user.user_id);
        self.store.with_mut(|s| s.sign_in(user));
        SessionTransition::SignedIn
    }

    /// End the session on the backend, then clear it locally no matter what.
    ///
    /// A backend failure is logged and otherwise ignored.
    pub async fn logout(&self) -> SessionTransition {
        if let Err(e) = auth::logout(&self.client).await {
            log::error!("session: backend logout failed: {e}");
        }
        self.store.with_mut(SessionState::sign_out);
        SessionTransition::SignedOut
    }

    /// Re-run the session probe.
    pub async fn refresh_user(&self, cancel: &Cancellation) -> ProbeOutcome {
        self.probe(cancel).await
    }

    /// Re-check the session when `error` says the backend no longer knows the
    /// caller. Any other error returns `None` without a round trip.
    pub async fn revalidate_after(&self, error: &ApiError, cancel: &Cancellation) -> Option<ProbeOutcome> {
        if !error.is_unauthorized() {
            return None;
        }
        log::info!("session: request unauthorized, re-checking");
        Some(self.refresh_user(cancel).await)
    }

    /// Ask the backend who is signed in and mirror the answer.
    ///
    /// On failure the held user is set to `None`. The loading flag is cleared
    /// the first time any probe settles.
    pub async fn probe(&self, cancel: &Cancellation) -> ProbeOutcome {
        let Some(ticket) = self.store.with_mut(SessionState::begin_probe) else {
            return ProbeOutcome::Discarded;
        };

        let result = auth::check_session(&self.client).await;
        if cancel.is_cancelled() {
            log::debug!("session: probe cancelled");
            return ProbeOutcome::Discarded;
        }

        let (user, outcome) = match result {
            Ok(probe) => match probe.into_user() {
                Some(user) => (Some(user.clone()), ProbeOutcome::Authenticated(user)),
                None => (None, ProbeOutcome::Anonymous),
            },
            Err(e) => {
                log::warn!("session: probe failed: {e}");
                (None, ProbeOutcome::Failed(e))
            }
        };

        match self.store.with_mut(|s| s.finish_probe(ticket, user)) {
            Some(true) => outcome,
            _ => ProbeOutcome::Discarded,
        }
    }
}
