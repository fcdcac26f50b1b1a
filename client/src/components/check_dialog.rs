//! Check-in / check-out dialog recording odometer and battery readings.

#[cfg(test)]
#[path = "check_dialog_test.rs"]
mod check_dialog_test;

use api::actions;
use api::messages;
use api::types::VehicleCheck;
use leptos::prelude::*;

use crate::components::flash::{Feedback, FlashMessage};
use crate::net::api::use_api;
use crate::state::revisions::use_revisions;
use crate::util::format::{optional_text, parse_optional_number};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckKind {
    CheckIn,
    CheckOut,
}

impl CheckKind {
    fn title(self) -> &'static str {
        match self {
            Self::CheckIn => "Nhận xe",
            Self::CheckOut => "Trả xe",
        }
    }
}

fn build_vehicle_check(odometer: &str, battery: &str, notes: &str) -> Result<VehicleCheck, &'static str> {
    Ok(VehicleCheck {
        odometer_km: parse_optional_number(odometer)?,
        battery_level: parse_optional_number(battery).map_err(|_| messages::BATTERY_LEVEL_INVALID)?,
        notes: optional_text(notes),
    })
}

/// Calls `on_done` with the success feedback; failures stay inline.
#[component]
pub fn CheckDialog(
    schedule_id: String,
    kind: CheckKind,
    on_done: Callback<Feedback>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let odometer = RwSignal::new(String::new());
    let battery = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let check = match build_vehicle_check(&odometer.get_untracked(), &battery.get_untracked(), &notes.get_untracked()) {
            Ok(check) => check,
            Err(message) => {
                feedback.set(Some(Feedback::error(message)));
                return;
            }
        };
        busy.set(true);
        let client = api.client();
        let schedule_id = schedule_id.clone();
        leptos::task::spawn_local(async move {
            let result = match kind {
                CheckKind::CheckIn => actions::check_in(&client, &revisions, &schedule_id, &check).await,
                CheckKind::CheckOut => actions::check_out(&client, &revisions, &schedule_id, &check).await,
            };
            busy.set(false);
            if result.success {
                on_done.run(Feedback::from(&result));
            } else {
                feedback.set(Some(Feedback::from(&result)));
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{kind.title()}</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Số km trên đồng hồ"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || odometer.get()
                            on:input=move |ev| odometer.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Mức pin (%)"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            max="100"
                            prop:value=move || battery.get()
                            on:input=move |ev| battery.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Ghi chú"
                        <textarea
                            class="dialog__input"
                            rows="2"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <FlashMessage feedback=feedback/>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Hủy"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {kind.title()}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
