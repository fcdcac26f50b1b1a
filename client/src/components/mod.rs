//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome, cards and modal forms while reading the
//! session, API handle and view revisions from Leptos context.

pub mod check_dialog;
pub mod flash;
pub mod join_group_modal;
pub mod nav_bar;
pub mod vehicle_card;
