//! Guarded layouts for the member and admin areas.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside one of these. They consult
//! `api::routes::guard` on each session change: while the first probe is
//! pending they show a placeholder, otherwise they redirect or render the
//! nested route.

use api::routes::{self, Area, GuardDecision};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::auth::use_session;
use crate::util::auth::{install_route_guard, placeholder_text};

#[component]
fn GuardedLayout(area: Area) -> impl IntoView {
    let auth = use_session();
    install_route_guard(auth, area, use_navigate());
    let decision = move || routes::guard(&auth.get(), area);

    view! {
        <Show
            when=move || decision() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="layout layout--placeholder">
                        <p>{move || placeholder_text(decision())}</p>
                    </div>
                }
            }
        >
            <div class="layout">
                <NavBar area=area/>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}

/// Layout for any signed-in account.
#[component]
pub fn UserLayout() -> impl IntoView {
    view! { <GuardedLayout area=Area::Member/> }
}

/// Layout for admin accounts; others are sent to their dashboard.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! { <GuardedLayout area=Area::Admin/> }
}

/// `/`: forward to the role's landing page once the session is known.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = use_session();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = state.user.map_or(routes::LOGIN_ROUTE, |u| routes::home_route(u.role));
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <p class="layout__placeholder">"Đang chuyển hướng..."</p> }
}
