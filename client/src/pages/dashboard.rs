//! Member dashboard: verification status, fleet summary and upcoming trips.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route for non-admin accounts. Both lists refetch when
//! a vehicle or schedule mutation invalidates the dashboard. The greeting and
//! verification badge come from the member record, since the session check
//! may omit the name and verification fields.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use api::actions::View;
use api::services::{member, schedule, vehicle};
use api::types::{Member, SessionUser, Vehicle, VehicleStatus, VerificationStatus};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::flash::LoadError;
use crate::net::api::use_api;
use crate::pages::schedules::{active_schedules, vehicle_label};
use crate::state::auth::{display_name, use_session};
use crate::state::revisions::use_revisions;
use crate::util::format::{format_datetime, schedule_status_label, verification_label};

const UPCOMING_LIMIT: usize = 5;

/// Who the dashboard greets and which verification state it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Profile {
    name: String,
    verification: VerificationStatus,
}

/// Merge the session user with its member record; the record wins when it
/// carries the field.
fn profile(user: &SessionUser, record: Option<&Member>) -> Profile {
    let name = record
        .map(|m| m.full_name.trim())
        .filter(|name| !name.is_empty())
        .map_or_else(|| display_name(user).to_owned(), str::to_owned);
    let verification = record
        .map(|m| m.verification_status)
        .filter(|status| *status != VerificationStatus::Unknown)
        .unwrap_or(user.verification_status);
    Profile { name, verification }
}

fn available_count(vehicles: &[Vehicle]) -> usize {
    vehicles.iter().filter(|v| v.status == VehicleStatus::Available).count()
}

/// Hint shown under the greeting; `None` once verified.
fn verification_hint(status: VerificationStatus) -> Option<&'static str> {
    match status {
        VerificationStatus::Verified | VerificationStatus::Unknown => None,
        VerificationStatus::Pending => Some("Hồ sơ của bạn đang chờ quản trị viên xác minh."),
        VerificationStatus::Rejected => Some("Hồ sơ của bạn bị từ chối. Vui lòng liên hệ quản trị viên."),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let revisions = use_revisions();

    let vehicles = LocalResource::new(move || {
        revisions.track(&View::Dashboard);
        revisions.track(&View::VehicleList);
        let client = api.client();
        async move { vehicle::list_vehicles(&client).await }
    });
    let schedules = LocalResource::new(move || {
        revisions.track(&View::Dashboard);
        revisions.track(&View::ScheduleList);
        let client = api.client();
        async move { schedule::list_schedules(&client, None).await }
    });

    let record = LocalResource::new(move || {
        revisions.track(&View::MemberList);
        let user_id = session.user().map(|u| u.user_id);
        let client = api.client();
        async move {
            let Some(user_id) = user_id else {
                return None;
            };
            match member::get_member(&client, &user_id).await {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("dashboard profile: {e}");
                    None
                }
            }
        }
    });

    let current = move || {
        let record = record.get().flatten();
        session.user().map(|u| profile(&u, record.as_ref()))
    };
    let greeting = move || current().map(|p| format!("Xin chào, {}", p.name)).unwrap_or_default();
    let verification = move || current().map(|p| p.verification).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="page__header">
                <h1>{greeting}</h1>
                <span class="dashboard-page__verification">
                    {move || verification_label(verification())}
                </span>
            </header>
            {move || verification_hint(verification()).map(|hint| view! { <p class="dashboard-page__hint">{hint}</p> })}

            <section class="dashboard-page__section">
                <h2>"Xe"</h2>
                <Suspense fallback=move || view! { <p>"Đang tải xe..."</p> }>
                    {move || {
                        vehicles
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <p>
                                            {format!("{} xe, {} xe sẵn sàng.", list.len(), available_count(&list))}
                                            " "
                                            <A href="/vehicles">"Xem danh sách"</A>
                                        </p>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <LoadError error=e/> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__section">
                <h2>"Lịch sắp tới"</h2>
                <Suspense fallback=move || view! { <p>"Đang tải lịch..."</p> }>
                    {move || {
                        schedules
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let known = vehicles.get().and_then(Result::ok).unwrap_or_default();
                                    let upcoming = active_schedules(list);
                                    if upcoming.is_empty() {
                                        return view! {
                                            <p class="page__empty">
                                                "Bạn chưa có lịch nào. "
                                                <A href="/schedules">"Đặt lịch"</A>
                                            </p>
                                        }
                                            .into_any();
                                    }
                                    view! {
                                        <ul class="dashboard-page__upcoming">
                                            {upcoming
                                                .into_iter()
                                                .take(UPCOMING_LIMIT)
                                                .map(|s| {
                                                    view! {
                                                        <li>
                                                            <span>{vehicle_label(&known, &s.vehicle_id)}</span>
                                                            " · "
                                                            <span>{format_datetime(s.start_time)}</span>
                                                            " · "
                                                            <span>{schedule_status_label(s.status)}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <LoadError error=e/> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
