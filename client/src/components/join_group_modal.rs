//! Modal for requesting to join an ownership group.
//!
//! The percentage minimum and reason length are enforced by the join action
//! before anything is sent; this module only parses the raw fields.

#[cfg(test)]
#[path = "join_group_modal_test.rs"]
mod join_group_modal_test;

use api::actions;
use api::types::{JoinGroupRequest, OwnershipGroup};
use api::validate::{MAX_OWNERSHIP_PERCENTAGE, MIN_OWNERSHIP_PERCENTAGE};
use leptos::prelude::*;

use crate::components::flash::{Feedback, FlashMessage};
use crate::net::api::use_api;
use crate::state::revisions::use_revisions;
use crate::util::format::{format_percentage, parse_number};

fn build_join_request(percentage: &str, reason: &str) -> Result<JoinGroupRequest, &'static str> {
    Ok(JoinGroupRequest { proposed_ownership_percentage: parse_number(percentage)?, reason: reason.trim().to_owned() })
}

#[component]
pub fn JoinGroupModal(group: OwnershipGroup, on_close: Callback<()>) -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let percentage = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let remaining = (100.0 - group.allocated_percentage()).max(0.0);
    let group_id = group.group_id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match build_join_request(&percentage.get_untracked(), &reason.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                feedback.set(Some(Feedback::error(message)));
                return;
            }
        };
        busy.set(true);
        let client = api.client();
        let group_id = group_id.clone();
        leptos::task::spawn_local(async move {
            let result = actions::join_group(&client, &revisions, &group_id, &request).await;
            if result.success {
                percentage.set(String::new());
                reason.set(String::new());
            }
            feedback.set(Some(Feedback::from(&result)));
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Tham gia nhóm {}", group.group_name)}</h2>
                <p class="dialog__hint">{format!("Tỷ lệ còn trống: {}", format_percentage(remaining))}</p>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Tỷ lệ sở hữu đề xuất (%)"
                        <input
                            class="dialog__input"
                            type="number"
                            step="0.1"
                            min=MIN_OWNERSHIP_PERCENTAGE.to_string()
                            max=MAX_OWNERSHIP_PERCENTAGE.to_string()
                            prop:value=move || percentage.get()
                            on:input=move |ev| percentage.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Lý do tham gia"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <FlashMessage feedback=feedback/>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Đóng"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            "Gửi yêu cầu"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
