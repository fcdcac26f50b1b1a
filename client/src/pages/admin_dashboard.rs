//! Admin landing page: counts of work waiting for review.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use api::actions::View;
use api::services::{group, member, vehicle};
use api::types::{Member, MembershipRequest, RequestStatus, Vehicle, VehicleStatus, VerificationStatus};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::use_api;
use crate::state::revisions::use_revisions;

fn pending_verifications(members: &[Member]) -> usize {
    members.iter().filter(|m| m.verification_status == VerificationStatus::Pending).count()
}

fn pending_requests(requests: &[MembershipRequest]) -> usize {
    requests.iter().filter(|r| r.status == RequestStatus::Pending).count()
}

fn vehicles_in_use(vehicles: &[Vehicle]) -> usize {
    vehicles.iter().filter(|v| v.status == VehicleStatus::InUse).count()
}

/// Count text for a stat tile: `…` while loading, `-` when the load failed.
fn stat_text<T>(loaded: Option<Result<Vec<T>, api::ApiError>>, count: fn(&[T]) -> usize) -> String {
    match loaded {
        None => "…".to_owned(),
        Some(Ok(items)) => count(&items).to_string(),
        Some(Err(e)) => {
            log::warn!("admin dashboard: {e}");
            "-".to_owned()
        }
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();

    let members = LocalResource::new(move || {
        revisions.track(&View::MemberList);
        let client = api.client();
        async move { member::list_members(&client).await }
    });
    let requests = LocalResource::new(move || {
        revisions.track(&View::JoinRequests);
        let client = api.client();
        async move { group::list_join_requests(&client).await }
    });
    let vehicles = LocalResource::new(move || {
        revisions.track(&View::Dashboard);
        revisions.track(&View::VehicleList);
        let client = api.client();
        async move { vehicle::list_vehicles(&client).await }
    });

    view! {
        <div class="admin-dashboard">
            <header class="page__header">
                <h1>"Bảng điều khiển quản trị"</h1>
            </header>
            <div class="admin-dashboard__stats">
                <A href="/admin/members">
                    <div class="stat-tile">
                        <span class="stat-tile__value">
                            {move || stat_text(members.get(), pending_verifications)}
                        </span>
                        <span class="stat-tile__label">"Hồ sơ chờ xác minh"</span>
                    </div>
                </A>
                <A href="/admin/requests">
                    <div class="stat-tile">
                        <span class="stat-tile__value">{move || stat_text(requests.get(), pending_requests)}</span>
                        <span class="stat-tile__label">"Yêu cầu tham gia chờ duyệt"</span>
                    </div>
                </A>
                <A href="/admin/vehicles">
                    <div class="stat-tile">
                        <span class="stat-tile__value">{move || stat_text(vehicles.get(), <[Vehicle]>::len)}</span>
                        <span class="stat-tile__label">"Tổng số xe"</span>
                    </div>
                </A>
                <div class="stat-tile">
                    <span class="stat-tile__value">{move || stat_text(vehicles.get(), vehicles_in_use)}</span>
                    <span class="stat-tile__label">"Xe đang sử dụng"</span>
                </div>
            </div>
        </div>
    }
}
