//! Card for one vehicle in the member and admin vehicle lists.
//!
//! DESIGN
//! ======
//! Keeps vehicle presentation identical in both areas; management
//! affordances only render when `manage` is set.

#[cfg(test)]
#[path = "vehicle_card_test.rs"]
mod vehicle_card_test;

use api::types::{Vehicle, VehicleStatus};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::use_api;
use crate::util::format::vehicle_status_label;

fn vehicle_title(vehicle: &Vehicle) -> String {
    format!("{} {} ({})", vehicle.brand, vehicle.model, vehicle.year)
}

fn status_class(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Available => "vehicle-card__status vehicle-card__status--available",
        VehicleStatus::InUse => "vehicle-card__status vehicle-card__status--in-use",
        VehicleStatus::Maintenance => "vehicle-card__status vehicle-card__status--maintenance",
        VehicleStatus::Inactive | VehicleStatus::Unknown => "vehicle-card__status",
    }
}

#[component]
pub fn VehicleCard(
    vehicle: Vehicle,
    #[prop(optional)] manage: bool,
    #[prop(optional)] busy: RwSignal<bool>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let image = use_api().image_url(vehicle.image_url.as_deref());
    let title = vehicle_title(&vehicle);
    let edit_href = format!("/admin/vehicles/{}/edit", vehicle.vehicle_id);
    let id = vehicle.vehicle_id.clone();
    let on_delete_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id.clone());
        }
    };

    view! {
        <article class="vehicle-card">
            {(!image.is_empty())
                .then(|| view! { <img class="vehicle-card__image" src=image alt=title.clone()/> })}
            <h3 class="vehicle-card__title">{title.clone()}</h3>
            <span class="vehicle-card__plate">{vehicle.license_plate}</span>
            <span class=status_class(vehicle.status)>{vehicle_status_label(vehicle.status)}</span>
            <span class="vehicle-card__battery">{format!("Pin {} kWh", vehicle.battery_capacity_kwh)}</span>
            {manage
                .then(|| {
                    view! {
                        <div class="vehicle-card__actions">
                            <A href=edit_href>"Sửa"</A>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=on_delete_click
                                title="Xóa xe"
                            >
                                "Xóa"
                            </button>
                        </div>
                    }
                })}
        </article>
    }
}
