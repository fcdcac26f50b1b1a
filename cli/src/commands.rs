//! Command dispatch over the shared services and actions.
//!
//! Reads go straight to the services and print their `data`; mutations go
//! through the action layer so the printed result carries the same message a
//! form would show.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use api::actions::{self, ActionResult, Invalidate, View};
use api::services::{auth, group, member, schedule, vehicle};
use api::types::{
    CreateGroupRequest, JoinGroupRequest, ReviewNote, ScheduleRequest, VehicleCheck, VehicleRequest, VerificationDecision,
};
use api::{ApiClient, Transport};
use serde::Serialize;

use crate::{
    CheckArgs, CliError, Command, GroupsSubcommand, MembersSubcommand, RequestsSubcommand, SchedulesSubcommand,
    VehicleArgs, VehiclesSubcommand,
};

/// The CLI has no cached views; invalidations are only traced.
struct NoViews;

impl Invalidate for NoViews {
    fn invalidate(&self, view: &View) {
        tracing::debug!(?view, "view invalidated");
    }
}

pub async fn dispatch<T: Transport>(client: &ApiClient<T>, command: Command) -> Result<(), CliError> {
    match command {
        Command::Session => print_json(&auth::check_session(client).await?),
        Command::Vehicles(cmd) => run_vehicles(client, cmd.command).await,
        Command::Groups(cmd) => run_groups(client, cmd.command).await,
        Command::Requests(cmd) => run_requests(client, cmd.command).await,
        Command::Members(cmd) => run_members(client, cmd.command).await,
        Command::Schedules(cmd) => run_schedules(client, cmd.command).await,
    }
}

async fn run_vehicles<T: Transport>(client: &ApiClient<T>, command: VehiclesSubcommand) -> Result<(), CliError> {
    match command {
        VehiclesSubcommand::List => print_json(&vehicle::list_vehicles(client).await?),
        VehiclesSubcommand::Get { vehicle_id } => print_json(&vehicle::get_vehicle(client, &vehicle_id).await?),
        VehiclesSubcommand::Create(fields) => {
            report(actions::create_vehicle(client, &NoViews, &vehicle_request(fields)).await)
        }
        VehiclesSubcommand::Update { vehicle_id, fields } => {
            report(actions::update_vehicle(client, &NoViews, &vehicle_id, &vehicle_request(fields)).await)
        }
        VehiclesSubcommand::Delete { vehicle_id } => {
            report(actions::delete_vehicle(client, &NoViews, &vehicle_id).await)
        }
    }
}

async fn run_groups<T: Transport>(client: &ApiClient<T>, command: GroupsSubcommand) -> Result<(), CliError> {
    match command {
        GroupsSubcommand::List => print_json(&group::list_groups(client).await?),
        GroupsSubcommand::Get { group_id } => print_json(&group::get_group(client, &group_id).await?),
        GroupsSubcommand::Create { name, description, vehicle_id } => {
            report(actions::create_group(client, &NoViews, &group_request(name, description, vehicle_id)).await)
        }
        GroupsSubcommand::Join { group_id, percentage, reason } => {
            let request = JoinGroupRequest { proposed_ownership_percentage: percentage, reason: reason.trim().to_owned() };
            report(actions::join_group(client, &NoViews, &group_id, &request).await)
        }
    }
}

async fn run_requests<T: Transport>(client: &ApiClient<T>, command: RequestsSubcommand) -> Result<(), CliError> {
    match command {
        RequestsSubcommand::List => print_json(&group::list_join_requests(client).await?),
        RequestsSubcommand::Approve { request_id, note } => {
            report(actions::review_join_request(client, &NoViews, &request_id, true, &ReviewNote { note }).await)
        }
        RequestsSubcommand::Reject { request_id, note } => {
            report(actions::review_join_request(client, &NoViews, &request_id, false, &ReviewNote { note }).await)
        }
    }
}

async fn run_members<T: Transport>(client: &ApiClient<T>, command: MembersSubcommand) -> Result<(), CliError> {
    match command {
        MembersSubcommand::List => print_json(&member::list_members(client).await?),
        MembersSubcommand::Verify { user_id, decision, note } => {
            let decision = VerificationDecision { status: decision.into(), note };
            report(actions::review_member(client, &NoViews, &user_id, &decision).await)
        }
    }
}

async fn run_schedules<T: Transport>(client: &ApiClient<T>, command: SchedulesSubcommand) -> Result<(), CliError> {
    match command {
        SchedulesSubcommand::List { vehicle_id } => {
            print_json(&schedule::list_schedules(client, vehicle_id.as_deref()).await?)
        }
        SchedulesSubcommand::Book { vehicle_id, start, end, purpose } => {
            let request = ScheduleRequest { vehicle_id, start_time: start, end_time: end, purpose };
            report(actions::book_schedule(client, &NoViews, &request).await)
        }
        SchedulesSubcommand::Cancel { schedule_id } => {
            report(actions::cancel_schedule(client, &NoViews, &schedule_id).await)
        }
        SchedulesSubcommand::CheckIn { schedule_id, reading } => {
            report(actions::check_in(client, &NoViews, &schedule_id, &vehicle_check(reading)).await)
        }
        SchedulesSubcommand::CheckOut { schedule_id, reading } => {
            report(actions::check_out(client, &NoViews, &schedule_id, &vehicle_check(reading)).await)
        }
    }
}

fn vehicle_request(fields: VehicleArgs) -> VehicleRequest {
    VehicleRequest {
        license_plate: fields.plate.trim().to_owned(),
        brand: fields.brand.trim().to_owned(),
        model: fields.model.trim().to_owned(),
        year: fields.year,
        battery_capacity_kwh: fields.battery_capacity,
        image_url: fields.image_url,
        group_id: fields.group_id,
    }
}

fn group_request(name: String, description: Option<String>, vehicle_id: Option<String>) -> CreateGroupRequest {
    CreateGroupRequest {
        group_name: name.trim().to_owned(),
        description: description.filter(|d| !d.trim().is_empty()),
        vehicle_id: vehicle_id.filter(|v| !v.trim().is_empty()),
    }
}

fn vehicle_check(reading: CheckArgs) -> VehicleCheck {
    VehicleCheck {
        odometer_km: reading.odometer,
        battery_level: reading.battery,
        notes: reading.notes.filter(|n| !n.trim().is_empty()),
    }
}

/// Print an action outcome; a failed action becomes the command's error.
fn report<D: Serialize>(result: ActionResult<D>) -> Result<(), CliError> {
    if !result.success {
        return Err(CliError::Action(result.message));
    }
    print_json(&result)
}

fn print_json<V: Serialize + ?Sized>(value: &V) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
