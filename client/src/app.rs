//! Root application component with routing and context providers.

use api::ApiConfig;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::net::api::ApiHandle;
use crate::pages::{
    admin_dashboard::AdminDashboardPage,
    admin_members::MemberReviewPage,
    admin_requests::JoinRequestReviewPage,
    dashboard::DashboardPage,
    groups::GroupListPage,
    layout::{AdminLayout, HomeRedirect, UserLayout},
    login::LoginPage,
    register::RegisterPage,
    schedules::ScheduleListPage,
    vehicle_form::VehicleFormPage,
    vehicles::{AdminVehiclesPage, MemberVehiclesPage},
};
use crate::state::auth::AuthProvider;
use crate::state::revisions::Revisions;

/// Root application component.
///
/// Provides the API handle and view revisions, mounts the session provider,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    log::info!("backend: {}", config.base_url());
    provide_context(ApiHandle::new(config));
    provide_context(Revisions::default());

    view! {
        <Title text="EV Share"/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| view! { <p class="page__empty">"Không tìm thấy trang."</p> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                        <Route path=StaticSegment("") view=AdminDashboardPage/>
                        <Route path=StaticSegment("members") view=MemberReviewPage/>
                        <Route path=StaticSegment("requests") view=JoinRequestReviewPage/>
                        <Route path=StaticSegment("vehicles") view=AdminVehiclesPage/>
                        <Route path=(StaticSegment("vehicles"), StaticSegment("new")) view=VehicleFormPage/>
                        <Route
                            path=(StaticSegment("vehicles"), ParamSegment("id"), StaticSegment("edit"))
                            view=VehicleFormPage
                        />
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("") view=UserLayout>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("vehicles") view=MemberVehiclesPage/>
                        <Route path=StaticSegment("groups") view=GroupListPage/>
                        <Route path=StaticSegment("schedules") view=ScheduleListPage/>
                        <Route path=StaticSegment("") view=HomeRedirect/>
                    </ParentRoute>
                </Routes>
            </AuthProvider>
        </Router>
    }
}
