//! Inline feedback for forms and failed loads.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use api::ApiError;
use api::actions::ActionResult;
use api::messages;
use api::session::Cancellation;
use leptos::prelude::*;

use crate::net::api::use_api;
use crate::state::auth::use_session;

/// One message shown after an action settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub success: bool,
    pub text: String,
}

impl Feedback {
    pub fn error(text: impl Into<String>) -> Self {
        Self { success: false, text: text.into() }
    }
}

impl<T> From<&ActionResult<T>> for Feedback {
    fn from(result: &ActionResult<T>) -> Self {
        Self { success: result.success, text: result.message.clone() }
    }
}

fn flash_class(success: bool) -> &'static str {
    if success { "flash flash--success" } else { "flash flash--error" }
}

#[component]
pub fn FlashMessage(feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|f| {
            view! {
                <p class=flash_class(f.success) role="status">
                    {f.text}
                </p>
            }
        })
    }
}

/// Replaces a list whose load failed.
///
/// A 401 means the backend session expired under us, so the session is
/// re-checked and the route guard takes over from there.
#[component]
pub fn LoadError(error: ApiError) -> impl IntoView {
    let text = messages::describe(&error);
    if error.is_unauthorized() {
        recheck_session(error);
    }
    view! { <p class="page__error">{text}</p> }
}

fn recheck_session(error: ApiError) {
    let manager = use_session().manager(use_api());
    let cancel = Cancellation::new();
    let pending = cancel.clone();
    leptos::task::spawn_local(async move {
        manager.revalidate_after(&error, &pending).await;
    });
    on_cleanup(move || cancel.cancel());
}
