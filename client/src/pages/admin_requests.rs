//! Admin review of requests to join ownership groups.

use api::actions::{self, View};
use api::services::group;
use api::types::{MembershipRequest, RequestStatus, ReviewNote};
use leptos::prelude::*;

use crate::components::flash::{Feedback, FlashMessage, LoadError};
use crate::net::api::use_api;
use crate::state::revisions::use_revisions;
use crate::util::busy::try_begin;
use crate::util::format::{format_percentage, request_status_label};

#[component]
pub fn JoinRequestReviewPage() -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let feedback = RwSignal::new(None::<Feedback>);
    let busy = RwSignal::new(false);

    let requests = LocalResource::new(move || {
        revisions.track(&View::JoinRequests);
        let client = api.client();
        async move { group::list_join_requests(&client).await }
    });

    let on_review = Callback::new(move |(request_id, approve): (String, bool)| {
        if !try_begin(busy) {
            return;
        }
        let client = api.client();
        leptos::task::spawn_local(async move {
            let result =
                actions::review_join_request(&client, &revisions, &request_id, approve, &ReviewNote::default()).await;
            feedback.set(Some(Feedback::from(&result)));
            busy.set(false);
        });
    });

    view! {
        <div class="admin-requests">
            <header class="page__header">
                <h1>"Yêu cầu tham gia nhóm"</h1>
            </header>
            <FlashMessage feedback=feedback/>
            <Suspense fallback=move || view! { <p>"Đang tải yêu cầu..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"Không có yêu cầu nào."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="admin-requests__table">
                                        <thead>
                                            <tr>
                                                <th>"Người gửi"</th>
                                                <th>"Nhóm"</th>
                                                <th>"Tỷ lệ đề xuất"</th>
                                                <th>"Lý do"</th>
                                                <th>"Trạng thái"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|r| view! { <RequestRow request=r busy=busy on_review=on_review/> })
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
        </div>
    }
}

#[component]
fn RequestRow(
    request: MembershipRequest,
    busy: RwSignal<bool>,
    on_review: Callback<(String, bool)>,
) -> impl IntoView {
    let pending = request.status == RequestStatus::Pending;
    let approve_id = request.request_id.clone();
    let reject_id = request.request_id.clone();
    let requester = request.full_name.unwrap_or(request.user_id);

    view! {
        <tr>
            <td>{requester}</td>
            <td>{request.group_id}</td>
            <td>{format_percentage(request.proposed_ownership_percentage)}</td>
            <td>{request.reason}</td>
            <td>{request_status_label(request.status)}</td>
            <td class="admin-requests__actions">
                {pending
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| on_review.run((approve_id.clone(), true))
                            >
                                "Duyệt"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| on_review.run((reject_id.clone(), false))
                            >
                                "Từ chối"
                            </button>
                        }
                    })}
            </td>
        </tr>
    }
}
