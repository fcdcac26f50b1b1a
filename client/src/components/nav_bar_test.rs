use super::*;

#[test]
fn member_links_for_regular_user() {
    let links = nav_links(Area::Member, false);
    assert_eq!(links.len(), 4);
    assert!(links.iter().all(|(href, _)| !href.starts_with("/admin")));
}

#[test]
fn admin_sees_admin_shortcut_in_member_area() {
    let links = nav_links(Area::Member, true);
    assert_eq!(links.last(), Some(&("/admin", "Quản trị")));
}

#[test]
fn admin_area_links_back_to_member_area() {
    let links = nav_links(Area::Admin, true);
    assert_eq!(links.first(), Some(&("/admin", "Bảng điều khiển")));
    assert_eq!(links.last(), Some(&("/dashboard", "Trang thành viên")));
}
