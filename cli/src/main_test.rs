use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("evshare").chain(args.iter().copied())).unwrap()
}

#[test]
fn base_url_defaults_to_local_backend() {
    let cli = parse(&["session"]);
    assert_eq!(cli.base_url, api::config::DEFAULT_BASE_URL);
    assert!(matches!(cli.command, Command::Session));
}

#[test]
fn join_takes_percentage_and_reason() {
    let cli = parse(&["groups", "join", "g-1", "--percentage", "25", "--reason", "Đi làm hằng ngày"]);
    let Command::Groups(GroupsCommand { command: GroupsSubcommand::Join { group_id, percentage, reason } }) = cli.command
    else {
        panic!("expected groups join");
    };
    assert_eq!(group_id, "g-1");
    assert!((percentage - 25.0).abs() < f64::EPSILON);
    assert_eq!(reason, "Đi làm hằng ngày");
}

#[test]
fn group_create_takes_name_description_and_vehicle() {
    let cli = parse(&["groups", "create", "--name", "Nhóm VF 8", "--description", "Đi chung", "--vehicle-id", "v-1"]);
    let Command::Groups(GroupsCommand { command: GroupsSubcommand::Create { name, description, vehicle_id } }) =
        cli.command
    else {
        panic!("expected groups create");
    };
    assert_eq!(name, "Nhóm VF 8");
    assert_eq!(description.as_deref(), Some("Đi chung"));
    assert_eq!(vehicle_id.as_deref(), Some("v-1"));
}

#[test]
fn group_create_requires_name() {
    assert!(Cli::try_parse_from(["evshare", "groups", "create"]).is_err());
}

#[test]
fn booking_parses_rfc3339_bounds() {
    let cli = parse(&[
        "schedules",
        "book",
        "--vehicle-id",
        "v-1",
        "--start",
        "2025-03-01T08:00:00+07:00",
        "--end",
        "2025-03-01T12:00:00+07:00",
    ]);
    let Command::Schedules(SchedulesCommand { command: SchedulesSubcommand::Book { start, end, purpose, .. } }) =
        cli.command
    else {
        panic!("expected schedules book");
    };
    assert_eq!((end - start).whole_hours(), 4);
    assert!(purpose.is_none());
}

#[test]
fn booking_rejects_malformed_timestamp() {
    let result = Cli::try_parse_from([
        "evshare",
        "schedules",
        "book",
        "--vehicle-id",
        "v-1",
        "--start",
        "01/03/2025 08:00",
        "--end",
        "2025-03-01T12:00:00+07:00",
    ]);
    assert!(result.is_err());
}

#[test]
fn battery_reading_above_hundred_is_refused() {
    let result = Cli::try_parse_from(["evshare", "schedules", "check-out", "s-1", "--battery", "120"]);
    assert!(result.is_err());
}

#[test]
fn verify_decision_maps_to_status() {
    let cli = parse(&["members", "verify", "u-1", "--decision", "rejected"]);
    let Command::Members(MembersCommand { command: MembersSubcommand::Verify { decision, .. } }) = cli.command else {
        panic!("expected members verify");
    };
    assert_eq!(VerificationStatus::from(decision), VerificationStatus::Rejected);
}

#[test]
fn credentials_must_come_in_pairs() {
    assert!(login_request(None, None).unwrap().is_none());
    assert!(matches!(login_request(Some("a@b.vn".to_owned()), None), Err(CliError::PartialCredentials)));

    let request = login_request(Some(" a@b.vn ".to_owned()), Some("secret".to_owned())).unwrap().unwrap();
    assert_eq!(request.email, "a@b.vn");
    assert_eq!(request.password, "secret");
}

#[test]
fn api_errors_print_localized_text() {
    let err = CliError::from(ApiError::Status { status: 403, message: None });
    assert_eq!(err.to_string(), messages::FORBIDDEN);
}
