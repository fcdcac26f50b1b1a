//! `evshare`: command-line access to the EV co-ownership backend.
//!
//! Every command runs through the shared `api` services, so validation and
//! error wording match the web client. With `--email`/`--password` the CLI
//! signs in first; the cookie store carries the session to the command.

mod commands;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::process::ExitCode;

use api::types::{LoginRequest, VerificationStatus};
use api::{ApiClient, ApiConfig, ApiError, messages};
use clap::{Args, Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", messages::describe(.0))]
    Api(#[from] ApiError),
    #[error("{0}")]
    Action(String),
    #[error("sign-in needs both --email and --password")]
    PartialCredentials,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "evshare", about = "EV co-ownership backend CLI")]
pub struct Cli {
    #[arg(long, env = api::config::BASE_URL_ENV, default_value = api::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "EV_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "EV_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show what the backend reports for the current session.
    Session,
    Vehicles(VehiclesCommand),
    Groups(GroupsCommand),
    /// Group join requests (admin).
    Requests(RequestsCommand),
    /// Member verification (admin).
    Members(MembersCommand),
    Schedules(SchedulesCommand),
}

// =============================================================================
// VEHICLES
// =============================================================================

#[derive(Args, Debug)]
pub struct VehiclesCommand {
    #[command(subcommand)]
    command: VehiclesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum VehiclesSubcommand {
    List,
    Get { vehicle_id: String },
    Create(VehicleArgs),
    Update {
        vehicle_id: String,
        #[command(flatten)]
        fields: VehicleArgs,
    },
    Delete { vehicle_id: String },
}

#[derive(Args, Debug, Clone)]
pub struct VehicleArgs {
    #[arg(long)]
    plate: String,
    #[arg(long)]
    brand: String,
    #[arg(long)]
    model: String,
    #[arg(long)]
    year: u16,
    #[arg(long)]
    battery_capacity: f64,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    group_id: Option<String>,
}

// =============================================================================
// GROUPS & MEMBERS
// =============================================================================

#[derive(Args, Debug)]
pub struct GroupsCommand {
    #[command(subcommand)]
    command: GroupsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GroupsSubcommand {
    List,
    Get {
        group_id: String,
    },
    /// Start a new ownership group.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        vehicle_id: Option<String>,
    },
    /// Ask to join a group with a proposed ownership share.
    Join {
        group_id: String,
        #[arg(long)]
        percentage: f64,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Args, Debug)]
pub struct RequestsCommand {
    #[command(subcommand)]
    command: RequestsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RequestsSubcommand {
    List,
    Approve {
        request_id: String,
        #[arg(long)]
        note: Option<String>,
    },
    Reject {
        request_id: String,
        #[arg(long)]
        note: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct MembersCommand {
    #[command(subcommand)]
    command: MembersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MembersSubcommand {
    List,
    Verify {
        user_id: String,
        #[arg(long, value_enum)]
        decision: Decision,
        #[arg(long)]
        note: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Decision {
    Verified,
    Rejected,
}

impl From<Decision> for VerificationStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Verified => Self::Verified,
            Decision::Rejected => Self::Rejected,
        }
    }
}

// =============================================================================
// SCHEDULES
// =============================================================================

#[derive(Args, Debug)]
pub struct SchedulesCommand {
    #[command(subcommand)]
    command: SchedulesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SchedulesSubcommand {
    List {
        #[arg(long)]
        vehicle_id: Option<String>,
    },
    Book {
        #[arg(long)]
        vehicle_id: String,
        /// RFC 3339, e.g. 2025-03-01T08:00:00+07:00
        #[arg(long, value_parser = parse_timestamp)]
        start: OffsetDateTime,
        #[arg(long, value_parser = parse_timestamp)]
        end: OffsetDateTime,
        #[arg(long)]
        purpose: Option<String>,
    },
    Cancel {
        schedule_id: String,
    },
    CheckIn {
        schedule_id: String,
        #[command(flatten)]
        reading: CheckArgs,
    },
    CheckOut {
        schedule_id: String,
        #[command(flatten)]
        reading: CheckArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[arg(long)]
    odometer: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    battery: Option<u8>,
    #[arg(long)]
    notes: Option<String>,
}

fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

/// Pair `--email` and `--password` into a login body.
///
/// # Errors
///
/// Returns [`CliError::PartialCredentials`] when only one of them is set.
fn login_request(email: Option<String>, password: Option<String>) -> Result<Option<LoginRequest>, CliError> {
    match (email, password) {
        (Some(email), Some(password)) => Ok(Some(LoginRequest { email: email.trim().to_owned(), password })),
        (None, None) => Ok(None),
        _ => Err(CliError::PartialCredentials),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ApiConfig::new(cli.base_url);
    let client = ApiClient::new(config, ReqwestTransport::new()?);

    if let Some(request) = login_request(cli.email, cli.password)? {
        let user = api::services::auth::login(&client, &request).await?;
        tracing::info!(user_id = %user.user_id, role = ?user.role, "signed in");
    }

    commands::dispatch(&client, cli.command).await
}
