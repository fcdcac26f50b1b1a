//! Per-view revision counters that drive refetch after mutations.
//!
//! DESIGN
//! ======
//! Page resources read their view's counter inside the fetcher, so a bump
//! reruns that fetch and nothing else. No response data is kept between
//! revisions.

#[cfg(test)]
#[path = "revisions_test.rs"]
mod revisions_test;

use api::actions::{Invalidate, View};
use leptos::prelude::*;

/// Counter a [`View`] is tracked by. Every vehicle detail shares one slot;
/// at most one is mounted at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Dashboard,
    Vehicles,
    VehicleDetail,
    Groups,
    JoinRequests,
    Members,
    Schedules,
}

impl Slot {
    pub fn of(view: &View) -> Self {
        match view {
            View::Dashboard => Self::Dashboard,
            View::VehicleList => Self::Vehicles,
            View::VehicleDetail(_) => Self::VehicleDetail,
            View::GroupList => Self::Groups,
            View::JoinRequests => Self::JoinRequests,
            View::MemberList => Self::Members,
            View::ScheduleList => Self::Schedules,
        }
    }
}

/// Revision signals, provided once by the app shell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Revisions {
    dashboard: RwSignal<u64>,
    vehicles: RwSignal<u64>,
    vehicle_detail: RwSignal<u64>,
    groups: RwSignal<u64>,
    join_requests: RwSignal<u64>,
    members: RwSignal<u64>,
    schedules: RwSignal<u64>,
}

impl Revisions {
    fn signal(self, slot: Slot) -> RwSignal<u64> {
        match slot {
            Slot::Dashboard => self.dashboard,
            Slot::Vehicles => self.vehicles,
            Slot::VehicleDetail => self.vehicle_detail,
            Slot::Groups => self.groups,
            Slot::JoinRequests => self.join_requests,
            Slot::Members => self.members,
            Slot::Schedules => self.schedules,
        }
    }

    /// Subscribe the running reactive scope to `view`.
    pub fn track(self, view: &View) -> u64 {
        self.signal(Slot::of(view)).get()
    }
}

impl Invalidate for Revisions {
    fn invalidate(&self, view: &View) {
        log::debug!("invalidate {view:?}");
        self.signal(Slot::of(view)).update(|n| *n = n.wrapping_add(1));
    }
}

pub fn use_revisions() -> Revisions {
    expect_context::<Revisions>()
}
