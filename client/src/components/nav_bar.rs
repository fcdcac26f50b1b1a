//! Top navigation for the member and admin layouts.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use api::routes::Area;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::use_api;
use crate::state::auth::{display_name, use_session};
use crate::util::format::role_label;

const MEMBER_LINKS: [(&str, &str); 4] = [
    ("/dashboard", "Tổng quan"),
    ("/vehicles", "Xe"),
    ("/groups", "Nhóm sở hữu"),
    ("/schedules", "Lịch sử dụng"),
];

const ADMIN_LINKS: [(&str, &str); 4] = [
    ("/admin", "Bảng điều khiển"),
    ("/admin/members", "Thành viên"),
    ("/admin/requests", "Yêu cầu tham gia"),
    ("/admin/vehicles", "Quản lý xe"),
];

/// Links for `area`; admins get a shortcut into the other area.
fn nav_links(area: Area, is_admin: bool) -> Vec<(&'static str, &'static str)> {
    match area {
        Area::Member => {
            let mut links = MEMBER_LINKS.to_vec();
            if is_admin {
                links.push(("/admin", "Quản trị"));
            }
            links
        }
        Area::Admin => {
            let mut links = ADMIN_LINKS.to_vec();
            links.push(("/dashboard", "Trang thành viên"));
            links
        }
    }
}

#[component]
pub fn NavBar(area: Area) -> impl IntoView {
    let auth = use_session();
    let api = use_api();

    let links = move || {
        let is_admin = auth.user().is_some_and(|u| u.role.is_admin());
        nav_links(area, is_admin)
            .into_iter()
            .map(|(href, label)| view! { <A href=href>{label}</A> })
            .collect::<Vec<_>>()
    };
    let identity = move || {
        auth.user()
            .map(|u| format!("{} ({})", display_name(&u), role_label(u.role)))
            .unwrap_or_default()
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"EV Share"</span>
            <nav class="nav-bar__links">{links}</nav>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__self">{identity}</span>
            <button class="btn nav-bar__logout" on:click=move |_| crate::util::auth::logout(auth, api)>
                "Đăng xuất"
            </button>
        </header>
    }
}
