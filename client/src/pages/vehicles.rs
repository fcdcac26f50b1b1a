//! Vehicle list for members (read-only) and admins (manage).

use api::actions::{self, View};
use api::services::vehicle;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::flash::{Feedback, FlashMessage, LoadError};
use crate::components::vehicle_card::VehicleCard;
use crate::net::api::use_api;
use crate::state::revisions::use_revisions;
use crate::util::busy::try_begin;

#[component]
pub fn VehicleListPage(#[prop(optional)] manage: bool) -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let feedback = RwSignal::new(None::<Feedback>);
    let deleting = RwSignal::new(false);

    let vehicles = LocalResource::new(move || {
        revisions.track(&View::VehicleList);
        let client = api.client();
        async move { vehicle::list_vehicles(&client).await }
    });

    let on_delete = Callback::new(move |vehicle_id: String| {
        if !try_begin(deleting) {
            return;
        }
        let client = api.client();
        leptos::task::spawn_local(async move {
            let result = actions::delete_vehicle(&client, &revisions, &vehicle_id).await;
            feedback.set(Some(Feedback::from(&result)));
            deleting.set(false);
        });
    });

    view! {
        <div class="vehicles-page">
            <header class="page__header">
                <h1>{if manage { "Quản lý xe" } else { "Danh sách xe" }}</h1>
                {manage.then(|| view! { <A href="/admin/vehicles/new">"+ Thêm xe"</A> })}
            </header>
            <FlashMessage feedback=feedback/>
            <Suspense fallback=move || view! { <p>"Đang tải xe..."</p> }>
                {move || {
                    vehicles
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"Chưa có xe nào."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="vehicles-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|v| {
                                                view! { <VehicleCard vehicle=v manage=manage busy=deleting on_delete=on_delete/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <LoadError error=e/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// `/vehicles`
#[component]
pub fn MemberVehiclesPage() -> impl IntoView {
    view! { <VehicleListPage/> }
}

/// `/admin/vehicles`
#[component]
pub fn AdminVehiclesPage() -> impl IntoView {
    view! { <VehicleListPage manage=true/> }
}
