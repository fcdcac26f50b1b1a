//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use api::messages;
use api::routes::LOGIN_ROUTE;
use api::services::auth;
use api::types::RegisterRequest;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::flash::{Feedback, FlashMessage};
use crate::net::api::use_api;
use crate::util::format::optional_text;

fn register_request(full_name: &str, email: &str, password: &str, phone: &str) -> RegisterRequest {
    RegisterRequest {
        full_name: full_name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        phone_number: optional_text(phone),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = register_request(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &phone.get_untracked(),
        );
        busy.set(true);
        let client = api.client();
        leptos::task::spawn_local(async move {
            let outcome = match auth::register(&client, &request).await {
                Ok(_) => Feedback { success: true, text: messages::REGISTERED.to_owned() },
                Err(e) => Feedback::error(messages::describe(&e)),
            };
            if outcome.success {
                password.set(String::new());
            }
            feedback.set(Some(outcome));
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EV Share"</h1>
                <p class="login-card__subtitle">"Tạo tài khoản"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Họ và tên"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
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
                        placeholder="Mật khẩu (tối thiểu 6 ký tự)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Số điện thoại (không bắt buộc)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Đăng ký"
                    </button>
                </form>
                <FlashMessage feedback=feedback/>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Đã có tài khoản? "
                    <A href=LOGIN_ROUTE>"Đăng nhập"</A>
                </p>
            </div>
        </div>
    }
}
