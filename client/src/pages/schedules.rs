//! Schedule list with booking, cancellation and check-in/check-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Conflict detection and vehicle state transitions are backend rules. This
//! page only offers the actions that make sense for a row's current status
//! and refetches after each one.

#[cfg(test)]
#[path = "schedules_test.rs"]
mod schedules_test;

use api::actions::{self, View};
use api::messages;
use api::services::{schedule, vehicle};
use api::types::{Schedule, ScheduleRequest, ScheduleStatus, Vehicle};
use leptos::prelude::*;

use crate::components::check_dialog::{CheckDialog, CheckKind};
use crate::components::flash::{Feedback, FlashMessage, LoadError};
use crate::net::api::use_api;
use crate::state::revisions::use_revisions;
use crate::util::busy::try_begin;
use crate::util::format::{format_datetime, optional_text, parse_datetime_local, schedule_status_label};

/// What a user may do with a schedule in a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowAction {
    CheckIn,
    CheckOut,
    Cancel,
}

fn row_actions(status: ScheduleStatus) -> &'static [RowAction] {
    match status {
        ScheduleStatus::Booked => &[RowAction::CheckIn, RowAction::Cancel],
        ScheduleStatus::CheckedIn => &[RowAction::CheckOut],
        ScheduleStatus::Completed | ScheduleStatus::Cancelled => &[],
    }
}

fn build_schedule_request(vehicle_id: &str, start: &str, end: &str, purpose: &str) -> Result<ScheduleRequest, &'static str> {
    let vehicle_id = vehicle_id.trim();
    if vehicle_id.is_empty() {
        return Err(messages::VEHICLE_REQUIRED);
    }
    Ok(ScheduleRequest {
        vehicle_id: vehicle_id.to_owned(),
        start_time: parse_datetime_local(start)?,
        end_time: parse_datetime_local(end)?,
        purpose: optional_text(purpose),
    })
}

/// Plate for `vehicle_id`, or the id itself when the vehicle is not listed.
pub(crate) fn vehicle_label(vehicles: &[Vehicle], vehicle_id: &str) -> String {
    vehicles
        .iter()
        .find(|v| v.vehicle_id == vehicle_id)
        .map_or_else(|| vehicle_id.to_owned(), |v| format!("{} {} · {}", v.brand, v.model, v.license_plate))
}

/// Booked and in-progress schedules, earliest first.
pub(crate) fn active_schedules(mut schedules: Vec<Schedule>) -> Vec<Schedule> {
    schedules.retain(|s| matches!(s.status, ScheduleStatus::Booked | ScheduleStatus::CheckedIn));
    schedules.sort_by_key(|s| s.start_time);
    schedules
}

#[component]
pub fn ScheduleListPage() -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let feedback = RwSignal::new(None::<Feedback>);
    let checking = RwSignal::new(None::<(String, CheckKind)>);

    let vehicles = LocalResource::new(move || {
        revisions.track(&View::VehicleList);
        let client = api.client();
        async move { vehicle::list_vehicles(&client).await.unwrap_or_default() }
    });
    let schedules = LocalResource::new(move || {
        revisions.track(&View::ScheduleList);
        let client = api.client();
        async move { schedule::list_schedules(&client, None).await }
    });

    let cancelling = RwSignal::new(false);
    let on_cancel = Callback::new(move |schedule_id: String| {
        if !try_begin(cancelling) {
            return;
        }
        let client = api.client();
        leptos::task::spawn_local(async move {
            let result = actions::cancel_schedule(&client, &revisions, &schedule_id).await;
            feedback.set(Some(Feedback::from(&result)));
            cancelling.set(false);
        });
    });
    let on_check_done = Callback::new(move |done: Feedback| {
        checking.set(None);
        feedback.set(Some(done));
    });
    let on_check_close = Callback::new(move |()| checking.set(None));

    view! {
        <div class="schedules-page">
            <header class="page__header">
                <h1>"Lịch sử dụng xe"</h1>
            </header>
            <FlashMessage feedback=feedback/>
            <BookingForm vehicles=vehicles feedback=feedback/>
            <Suspense fallback=move || view! { <p>"Đang tải lịch..."</p> }>
                {move || {
                    schedules
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"Chưa có lịch nào."</p> }.into_any()
                            }
                            Ok(list) => {
                                let known = vehicles.get().unwrap_or_default();
                                view! {
                                    <table class="schedules-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Xe"</th>
                                                <th>"Bắt đầu"</th>
                                                <th>"Kết thúc"</th>
                                                <th>"Mục đích"</th>
                                                <th>"Trạng thái"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|s| {
                                                    view! {
                                                        <ScheduleRow
                                                            vehicle=vehicle_label(&known, &s.vehicle_id)
                                                            schedule=s
                                                            checking=checking
                                                            cancelling=cancelling
                                                            on_cancel=on_cancel
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <LoadError error=e/> }.into_any(),
                        })
                }}
            </Suspense>
            {move || {
                checking
                    .get()
                    .map(|(schedule_id, kind)| {
                        view! {
                            <CheckDialog
                                schedule_id=schedule_id
                                kind=kind
                                on_done=on_check_done
                                on_close=on_check_close
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ScheduleRow(
    schedule: Schedule,
    vehicle: String,
    checking: RwSignal<Option<(String, CheckKind)>>,
    cancelling: RwSignal<bool>,
    on_cancel: Callback<String>,
) -> impl IntoView {
    let buttons = row_actions(schedule.status)
        .iter()
        .map(|action| {
            let id = schedule.schedule_id.clone();
            match action {
                RowAction::CheckIn => view! {
                    <button class="btn" on:click=move |_| checking.set(Some((id.clone(), CheckKind::CheckIn)))>
                        "Nhận xe"
                    </button>
                }
                .into_any(),
                RowAction::CheckOut => view! {
                    <button class="btn" on:click=move |_| checking.set(Some((id.clone(), CheckKind::CheckOut)))>
                        "Trả xe"
                    </button>
                }
                .into_any(),
                RowAction::Cancel => view! {
                    <button
                        class="btn btn--danger"
                        disabled=move || cancelling.get()
                        on:click=move |_| on_cancel.run(id.clone())
                    >
                        "Hủy lịch"
                    </button>
                }
                .into_any(),
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr>
            <td>{vehicle}</td>
            <td>{format_datetime(schedule.start_time)}</td>
            <td>{format_datetime(schedule.end_time)}</td>
            <td>{schedule.purpose.unwrap_or_default()}</td>
            <td>{schedule_status_label(schedule.status)}</td>
            <td class="schedules-page__actions">{buttons}</td>
        </tr>
    }
}

#[component]
fn BookingForm(vehicles: LocalResource<Vec<Vehicle>>, feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let vehicle_id = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let purpose = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match build_schedule_request(
            &vehicle_id.get_untracked(),
            &start.get_untracked(),
            &end.get_untracked(),
            &purpose.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                feedback.set(Some(Feedback::error(message)));
                return;
            }
        };
        busy.set(true);
        let client = api.client();
        leptos::task::spawn_local(async move {
            let result = actions::book_schedule(&client, &revisions, &request).await;
            if result.success {
                purpose.set(String::new());
            }
            feedback.set(Some(Feedback::from(&result)));
            busy.set(false);
        });
    };

    let options = move || {
        vehicles
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|v| {
                let label = format!("{} {} · {}", v.brand, v.model, v.license_plate);
                view! { <option value=v.vehicle_id>{label}</option> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <form class="booking-form" on:submit=on_submit>
            <h2>"Đặt lịch mới"</h2>
            <label class="booking-form__label">
                "Xe"
                <select
                    class="booking-form__input"
                    prop:value=move || vehicle_id.get()
                    on:change=move |ev| vehicle_id.set(event_target_value(&ev))
                >
                    <option value="">"-- Chọn xe --"</option>
                    {options}
                </select>
            </label>
            <label class="booking-form__label">
                "Bắt đầu"
                <input
                    class="booking-form__input"
                    type="datetime-local"
                    prop:value=move || start.get()
                    on:input=move |ev| start.set(event_target_value(&ev))
                />
            </label>
            <label class="booking-form__label">
                "Kết thúc"
                <input
                    class="booking-form__input"
                    type="datetime-local"
                    prop:value=move || end.get()
                    on:input=move |ev| end.set(event_target_value(&ev))
                />
            </label>
            <label class="booking-form__label">
                "Mục đích"
                <input
                    class="booking-form__input"
                    type="text"
                    prop:value=move || purpose.get()
                    on:input=move |ev| purpose.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Đặt lịch"
            </button>
        </form>
    }
}
