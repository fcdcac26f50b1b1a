//! Admin create/edit form for a vehicle.
//!
//! `/admin/vehicles/new` creates; `/admin/vehicles/:id/edit` loads the vehicle
//! first and updates it. Both return to the admin vehicle list on success.

#[cfg(test)]
#[path = "vehicle_form_test.rs"]
mod vehicle_form_test;

use api::actions::{self, View};
use api::services::vehicle;
use api::types::{Vehicle, VehicleRequest};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::flash::{Feedback, FlashMessage};
use crate::net::api::use_api;
use crate::state::revisions::use_revisions;
use crate::util::format::{optional_text, parse_number};

const LIST_ROUTE: &str = "/admin/vehicles";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldKey {
    Plate,
    Brand,
    Model,
    Year,
    Battery,
    ImageUrl,
    GroupId,
}

/// `(field, label, input type)` in render order.
const FIELDS: [(FieldKey, &str, &str); 7] = [
    (FieldKey::Plate, "Biển số", "text"),
    (FieldKey::Brand, "Hãng xe", "text"),
    (FieldKey::Model, "Mẫu xe", "text"),
    (FieldKey::Year, "Năm sản xuất", "number"),
    (FieldKey::Battery, "Dung lượng pin (kWh)", "number"),
    (FieldKey::ImageUrl, "Đường dẫn ảnh", "text"),
    (FieldKey::GroupId, "Mã nhóm sở hữu", "text"),
];

/// Raw form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct VehicleFields {
    plate: String,
    brand: String,
    model: String,
    year: String,
    battery: String,
    image_url: String,
    group_id: String,
}

impl VehicleFields {
    fn from_vehicle(v: &Vehicle) -> Self {
        Self {
            plate: v.license_plate.clone(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            year: v.year.to_string(),
            battery: v.battery_capacity_kwh.to_string(),
            image_url: v.image_url.clone().unwrap_or_default(),
            group_id: v.group_id.clone().unwrap_or_default(),
        }
    }

    fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Plate => &self.plate,
            FieldKey::Brand => &self.brand,
            FieldKey::Model => &self.model,
            FieldKey::Year => &self.year,
            FieldKey::Battery => &self.battery,
            FieldKey::ImageUrl => &self.image_url,
            FieldKey::GroupId => &self.group_id,
        }
    }

    fn set(&mut self, key: FieldKey, value: String) {
        let slot = match key {
            FieldKey::Plate => &mut self.plate,
            FieldKey::Brand => &mut self.brand,
            FieldKey::Model => &mut self.model,
            FieldKey::Year => &mut self.year,
            FieldKey::Battery => &mut self.battery,
            FieldKey::ImageUrl => &mut self.image_url,
            FieldKey::GroupId => &mut self.group_id,
        };
        *slot = value;
    }

    /// Parse numbers; required-field and range checks belong to the action.
    fn to_request(&self) -> Result<VehicleRequest, &'static str> {
        Ok(VehicleRequest {
            license_plate: self.plate.trim().to_owned(),
            brand: self.brand.trim().to_owned(),
            model: self.model.trim().to_owned(),
            year: parse_number(&self.year)?,
            battery_capacity_kwh: parse_number(&self.battery)?,
            image_url: optional_text(&self.image_url),
            group_id: optional_text(&self.group_id),
        })
    }
}

#[component]
pub fn VehicleFormPage() -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let navigate = use_navigate();
    let params = use_params_map();
    let vehicle_id = params.with_untracked(|p| p.get("id").map(|id| id.to_string()));
    let editing = vehicle_id.is_some();

    let fields = RwSignal::new(VehicleFields::default());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    if let Some(id) = vehicle_id.clone() {
        let detail = LocalResource::new(move || {
            let id = id.clone();
            revisions.track(&View::VehicleDetail(id.clone()));
            let client = api.client();
            async move { vehicle::get_vehicle(&client, &id).await }
        });
        Effect::new(move || match detail.get() {
            Some(Ok(v)) => fields.set(VehicleFields::from_vehicle(&v)),
            Some(Err(e)) => feedback.set(Some(Feedback::error(api::messages::describe(&e)))),
            None => {}
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match fields.with_untracked(VehicleFields::to_request) {
            Ok(request) => request,
            Err(message) => {
                feedback.set(Some(Feedback::error(message)));
                return;
            }
        };
        busy.set(true);
        let client = api.client();
        let vehicle_id = vehicle_id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match vehicle_id {
                Some(id) => actions::update_vehicle(&client, &revisions, &id, &request).await,
                None => actions::create_vehicle(&client, &revisions, &request).await,
            };
            busy.set(false);
            if result.success {
                navigate(LIST_ROUTE, NavigateOptions::default());
            } else {
                feedback.set(Some(Feedback::from(&result)));
            }
        });
    };

    let inputs = FIELDS
        .iter()
        .map(|&(key, label, kind)| {
            view! {
                <label class="vehicle-form__label">
                    {label}
                    <input
                        class="vehicle-form__input"
                        type=kind
                        prop:value=move || fields.with(|f| f.get(key).to_owned())
                        on:input=move |ev| fields.update(|f| f.set(key, event_target_value(&ev)))
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="vehicle-form-page">
            <header class="page__header">
                <h1>{if editing { "Sửa thông tin xe" } else { "Thêm xe mới" }}</h1>
            </header>
            <form class="vehicle-form" on:submit=on_submit>
                {inputs}
                <FlashMessage feedback=feedback/>
                <div class="vehicle-form__actions">
                    <a class="btn" href=LIST_ROUTE>"Hủy"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {if editing { "Lưu thay đổi" } else { "Thêm xe" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
