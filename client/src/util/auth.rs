//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded layouts apply identical redirect behavior, and every logout
//! button lands on the login page through the same navigator.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api::routes::{self, Area, GuardDecision, Navigator};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiHandle;
use crate::state::auth::AuthContext;

/// Navigate whenever the guard for `area` decides to redirect.
///
/// Logout is left to [`logout`], which already leaves for the login page.
pub fn install_route_guard<F>(auth: AuthContext, area: Area, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = routes::guard_redirect(&auth.get(), area) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Text shown in place of a guarded layout that is not allowed to render.
pub fn placeholder_text(decision: GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Pending => "Đang kiểm tra phiên đăng nhập...",
        GuardDecision::Redirect(_) => "Đang chuyển hướng...",
        GuardDecision::Allow => "",
    }
}

/// Full-page navigation. Reloading drops every in-memory view so nothing
/// from the previous session survives logout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// Log out and land on `/login`, whatever the backend answers.
pub fn logout(auth: AuthContext, api: ApiHandle) {
    let manager = auth.manager(api);
    leptos::task::spawn_local(async move {
        routes::logout_and_redirect(&manager, &BrowserNavigator).await;
    });
}
