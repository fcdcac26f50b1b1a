//! Login page: email + password against the backend session endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api::messages;
use api::routes::{self, REGISTER_ROUTE};
use api::services::auth;
use api::types::LoginRequest;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::use_api;
use crate::state::auth::use_session;

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest { email: email.trim().to_owned(), password: password.to_owned() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed in (already, or just now): go to the role's landing page.
    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if let Some(user) = state.user {
            navigate(routes::home_route(user.role), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = login_request(&email.get_untracked(), &password.get_untracked());
        busy.set(true);
        info.set(String::new());

        let manager = session.manager(api);
        leptos::task::spawn_local(async move {
            match auth::login(manager.client(), &request).await {
                Ok(user) => {
                    manager.login(user);
                }
                Err(e) => {
                    info.set(messages::describe(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EV Share"</h1>
                <p class="login-card__subtitle">"Đăng nhập"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="ban@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Mật khẩu"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Đang đăng nhập..." } else { "Đăng nhập" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Chưa có tài khoản? "
                    <A href=REGISTER_ROUTE>"Đăng ký"</A>
                </p>
            </div>
        </div>
    }
}
