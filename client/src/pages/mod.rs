//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and form orchestration and delegates
//! rendering details to `components`. `layout` holds the guarded shells the
//! protected pages render inside.

pub mod admin_dashboard;
pub mod admin_members;
pub mod admin_requests;
pub mod dashboard;
pub mod groups;
pub mod layout;
pub mod login;
pub mod register;
pub mod schedules;
pub mod vehicle_form;
pub mod vehicles;
