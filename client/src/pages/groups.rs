//! Ownership groups with their members, a join-request modal and a form to
//! start a new group.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use api::actions::{self, View};
use api::services::{group, vehicle};
use api::types::{CreateGroupRequest, OwnershipGroup};
use leptos::prelude::*;

use crate::components::flash::{Feedback, FlashMessage, LoadError};
use crate::components::join_group_modal::JoinGroupModal;
use crate::net::api::use_api;
use crate::state::auth::use_session;
use crate::state::revisions::use_revisions;
use crate::util::busy::try_begin;
use crate::util::format::{format_percentage, optional_text};

fn is_member(group: &OwnershipGroup, user_id: &str) -> bool {
    group.members.iter().any(|m| m.user_id == user_id)
}

/// Blank name is left for the action to refuse.
fn build_group_request(name: &str, description: &str, vehicle_id: &str) -> CreateGroupRequest {
    CreateGroupRequest {
        group_name: name.trim().to_owned(),
        description: optional_text(description),
        vehicle_id: optional_text(vehicle_id),
    }
}

#[component]
pub fn GroupListPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let revisions = use_revisions();
    let joining = RwSignal::new(None::<OwnershipGroup>);
    let feedback = RwSignal::new(None::<Feedback>);

    let groups = LocalResource::new(move || {
        revisions.track(&View::GroupList);
        let client = api.client();
        async move { group::list_groups(&client).await }
    });
    let on_close = Callback::new(move |()| joining.set(None));

    view! {
        <div class="groups-page">
            <header class="page__header">
                <h1>"Nhóm đồng sở hữu"</h1>
            </header>
            <FlashMessage feedback=feedback/>
            <CreateGroupForm feedback=feedback/>
            <Suspense fallback=move || view! { <p>"Đang tải nhóm..."</p> }>
                {move || {
                    let user_id = session.user().map(|u| u.user_id).unwrap_or_default();
                    groups
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"Chưa có nhóm nào."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="groups-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|g| {
                                                let member = is_member(&g, &user_id);
                                                view! { <GroupCard group=g member=member joining=joining/> }
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
            {move || joining.get().map(|g| view! { <JoinGroupModal group=g on_close=on_close/> })}
        </div>
    }
}

#[component]
fn GroupCard(group: OwnershipGroup, member: bool, joining: RwSignal<Option<OwnershipGroup>>) -> impl IntoView {
    let allocated = format!("Đã phân bổ: {}", format_percentage(group.allocated_percentage()));
    let members = group
        .members
        .iter()
        .map(|m| {
            view! {
                <li>
                    <span>{m.full_name.clone()}</span>
                    " · "
                    <span>{format_percentage(m.ownership_percentage)}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let name = group.group_name.clone();
    let description = group.description.clone().unwrap_or_default();

    view! {
        <article class="group-card">
            <h3 class="group-card__name">{name}</h3>
            <p class="group-card__description">{description}</p>
            <p class="group-card__allocated">{allocated}</p>
            <ul class="group-card__members">{members}</ul>
            {if member {
                view! { <span class="group-card__badge">"Bạn là thành viên"</span> }.into_any()
            } else {
                view! {
                    <button class="btn btn--primary" on:click=move |_| joining.set(Some(group.clone()))>
                        "Xin tham gia"
                    </button>
                }
                    .into_any()
            }}
        </article>
    }
}

#[component]
fn CreateGroupForm(feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let vehicle_id = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let vehicles = LocalResource::new(move || {
        revisions.track(&View::VehicleList);
        let client = api.client();
        async move { vehicle::list_vehicles(&client).await.unwrap_or_default() }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !try_begin(busy) {
            return;
        }
        let request =
            build_group_request(&name.get_untracked(), &description.get_untracked(), &vehicle_id.get_untracked());
        let client = api.client();
        leptos::task::spawn_local(async move {
            let result = actions::create_group(&client, &revisions, &request).await;
            if result.success {
                name.set(String::new());
                description.set(String::new());
                vehicle_id.set(String::new());
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
        <form class="group-form" on:submit=on_submit>
            <h2>"Tạo nhóm mới"</h2>
            <label class="group-form__label">
                "Tên nhóm"
                <input
                    class="group-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="group-form__label">
                "Mô tả"
                <textarea
                    class="group-form__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="group-form__label">
                "Xe"
                <select
                    class="group-form__input"
                    prop:value=move || vehicle_id.get()
                    on:change=move |ev| vehicle_id.set(event_target_value(&ev))
                >
                    <option value="">"-- Chưa gắn xe --"</option>
                    {options}
                </select>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Tạo nhóm"
            </button>
        </form>
    }
}
