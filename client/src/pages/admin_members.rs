//! Admin review of member identity verification.

use api::actions::{self, View};
use api::services::member;
use api::types::{Member, VerificationDecision, VerificationStatus};
use leptos::prelude::*;

use crate::components::flash::{Feedback, FlashMessage, LoadError};
use crate::net::api::use_api;
use crate::state::revisions::use_revisions;
use crate::util::busy::try_begin;
use crate::util::format::{role_label, verification_label};

#[component]
pub fn MemberReviewPage() -> impl IntoView {
    let api = use_api();
    let revisions = use_revisions();
    let feedback = RwSignal::new(None::<Feedback>);
    let busy = RwSignal::new(false);

    let members = LocalResource::new(move || {
        revisions.track(&View::MemberList);
        let client = api.client();
        async move { member::list_members(&client).await }
    });

    let on_review = Callback::new(move |(user_id, status): (String, VerificationStatus)| {
        if !try_begin(busy) {
            return;
        }
        let client = api.client();
        leptos::task::spawn_local(async move {
            let decision = VerificationDecision { status, note: None };
            let result = actions::review_member(&client, &revisions, &user_id, &decision).await;
            feedback.set(Some(Feedback::from(&result)));
            busy.set(false);
        });
    });

    view! {
        <div class="admin-members">
            <header class="page__header">
                <h1>"Xác minh thành viên"</h1>
            </header>
            <FlashMessage feedback=feedback/>
            <Suspense fallback=move || view! { <p>"Đang tải thành viên..."</p> }>
                {move || {
                    members
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="admin-members__table">
                                        <thead>
                                            <tr>
                                                <th>"Họ tên"</th>
                                                <th>"Email"</th>
                                                <th>"Số điện thoại"</th>
                                                <th>"Vai trò"</th>
                                                <th>"Xác minh"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|m| view! { <MemberRow member=m busy=busy on_review=on_review/> })
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
fn MemberRow(
    member: Member,
    busy: RwSignal<bool>,
    on_review: Callback<(String, VerificationStatus)>,
) -> impl IntoView {
    let pending = member.verification_status == VerificationStatus::Pending;
    let approve_id = member.user_id.clone();
    let reject_id = member.user_id.clone();

    view! {
        <tr>
            <td>{member.full_name}</td>
            <td>{member.email}</td>
            <td>{member.phone_number.unwrap_or_default()}</td>
            <td>{role_label(member.role)}</td>
            <td>{verification_label(member.verification_status)}</td>
            <td class="admin-members__actions">
                {pending
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| on_review.run((approve_id.clone(), VerificationStatus::Verified))
                            >
                                "Xác minh"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| on_review.run((reject_id.clone(), VerificationStatus::Rejected))
                            >
                                "Từ chối"
                            </button>
                        }
                    })}
            </td>
        </tr>
    }
}
