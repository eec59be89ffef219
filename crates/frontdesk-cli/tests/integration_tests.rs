use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that sets up a temporary frontdesk data directory
struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".frontdesk");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Run frontdesk with this fixture's data directory
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("frontdesk").expect("Failed to find frontdesk binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    fn init(&self) {
        self.command().arg("init").assert().success();
    }

    /// Seed one room, one client and return the client's id.
    fn seed_room_and_client(&self) -> String {
        self.command()
            .args(["room", "add", "101", "--type", "double", "--price", "100"])
            .assert()
            .success();

        self.command()
            .args([
                "client", "add", "Martin", "Sophie", "--email",
                "sophie@example.com", "--phone", "0601020304",
            ])
            .assert()
            .success();

        self.client_id("Martin")
    }

    /// Look up a client id from `client list --format json`.
    fn client_id(&self, last_name: &str) -> String {
        let output = self
            .command()
            .args(["--format", "json", "client", "list"])
            .output()
            .expect("client list runs");
        let clients: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("client list emits JSON");
        clients
            .as_array()
            .expect("JSON array")
            .iter()
            .find(|c| c["last_name"] == last_name)
            .expect("client present")["id"]
            .as_str()
            .expect("id is a string")
            .to_string()
    }

    /// Look up a reservation id from `reservation list --format json`.
    fn first_reservation_id(&self) -> String {
        let output = self
            .command()
            .args(["--format", "json", "reservation", "list"])
            .output()
            .expect("reservation list runs");
        let reservations: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("reservation list emits JSON");
        reservations[0]["id"]
            .as_str()
            .expect("id is a string")
            .to_string()
    }
}

#[test]
fn test_init_creates_config_and_dataset() {
    let fixture = TestFixture::new();
    fixture.init();

    assert!(fixture.data_dir.join("config.toml").exists());
    assert!(fixture.data_dir.join("hotel.json").exists());
}

#[test]
fn test_init_sample_seeds_demo_hotel() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded sample hotel"));

    fixture
        .command()
        .args(["room", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("101"))
        .stdout(predicate::str::contains("202"));
}

#[test]
fn test_room_add_and_list() {
    let fixture = TestFixture::new();
    fixture.init();

    fixture
        .command()
        .args([
            "room", "add", "101", "--type", "double", "--price", "100",
            "--capacity", "2", "--feature", "Sea view",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created room 101"));

    fixture
        .command()
        .args(["room", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("101"))
        .stdout(predicate::str::contains("Double"))
        .stdout(predicate::str::contains("Sea view"));
}

#[test]
fn test_duplicate_room_number_fails() {
    let fixture = TestFixture::new();
    fixture.init();
    fixture.seed_room_and_client();

    fixture
        .command()
        .args(["room", "add", "101", "--type", "suite", "--price", "250"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_reservation_price_is_derived_from_room_and_dates() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    // 3 nights at 100/night
    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-10", "--departure", "2024-03-13",
            "--status", "confirmed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 night(s)"))
        .stdout(predicate::str::contains("300.00 EUR"));
}

#[test]
fn test_reservation_manual_price_override_wins() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-10", "--departure", "2024-03-13",
            "--total-price", "250",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("250.00 EUR"));
}

#[test]
fn test_reservation_rejects_inverted_dates() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-13", "--departure", "2024-03-10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be after arrival"));
}

#[test]
fn test_client_deletion_guard() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-10", "--departure", "2024-03-13",
        ])
        .assert()
        .success();

    // Blocked while the reservation references the client
    fixture
        .command()
        .args(["client", "rm", client_id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reservation"));

    // Client and reservation are both still there
    fixture
        .command()
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sophie Martin"));

    let reservation_id = fixture.first_reservation_id();
    fixture
        .command()
        .args(["reservation", "rm", reservation_id.as_str()])
        .assert()
        .success();

    // Now the delete goes through
    fixture
        .command()
        .args(["client", "rm", client_id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted client"));
}

#[test]
fn test_room_deletion_is_unguarded_but_warns() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-10", "--departure", "2024-03-13",
        ])
        .assert()
        .success();

    fixture
        .command()
        .args(["room", "rm", "101"])
        .assert()
        .success()
        .stderr(predicate::str::contains("still reference"));

    // The reservation survives with a dangling room, shown as N/A
    fixture
        .command()
        .args(["reservation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn test_calendar_renders_occupancy() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-12", "--departure", "2024-03-14",
        ])
        .assert()
        .success();

    fixture
        .command()
        .args(["calendar", "--date", "2024-03-13", "--view", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("101 Double"))
        // Arrival-day marker somewhere in the grid
        .stdout(predicate::str::contains("▸"))
        .stdout(predicate::str::contains("Legend:"));
}

#[test]
fn test_calendar_json_includes_arrival_flag() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-12", "--departure", "2024-03-14",
        ])
        .assert()
        .success();

    let output = fixture
        .command()
        .args([
            "--format", "json", "calendar", "--date", "2024-03-13", "--view", "week",
        ])
        .output()
        .expect("calendar runs");
    let grid: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("calendar emits JSON");

    assert_eq!(grid["start"], "2024-03-11");
    assert_eq!(grid["days"].as_array().unwrap().len(), 7);

    let cells = grid["rows"][0]["cells"].as_array().unwrap();
    let arrival_cell = cells
        .iter()
        .find(|c| c["day"] == "2024-03-12")
        .expect("arrival day cell");
    assert_eq!(arrival_cell["entries"][0]["is_arrival"], true);

    let checkout_cell = cells
        .iter()
        .find(|c| c["day"] == "2024-03-14")
        .expect("checkout day cell");
    assert!(checkout_cell["entries"].as_array().unwrap().is_empty());
}

#[test]
fn test_calendar_offset_moves_window_one_week() {
    let fixture = TestFixture::new();
    fixture.init();
    fixture.seed_room_and_client();

    let output = fixture
        .command()
        .args([
            "--format", "json", "calendar", "--date", "2024-03-13",
            "--view", "week", "--offset", "1",
        ])
        .output()
        .expect("calendar runs");
    let grid: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("calendar emits JSON");

    assert_eq!(grid["start"], "2024-03-18");
}

#[test]
fn test_export_reservations_csv() {
    let fixture = TestFixture::new();
    fixture.init();
    let client_id = fixture.seed_room_and_client();

    fixture
        .command()
        .args([
            "reservation", "add", "--room", "101", "--client", client_id.as_str(),
            "--arrival", "2024-03-10", "--departure", "2024-03-13",
        ])
        .assert()
        .success();

    fixture
        .command()
        .args(["export", "reservations"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "id,room,client,arrival,departure,nights,party_size,status,total_price,created_at",
        ))
        .stdout(predicate::str::contains("Sophie Martin"))
        .stdout(predicate::str::contains("2024-03-10"));
}

#[test]
fn test_bare_command_shows_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("frontdesk init"));
}

#[test]
fn test_unknown_room_reference_fails_cleanly() {
    let fixture = TestFixture::new();
    fixture.init();

    fixture
        .command()
        .args(["room", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("room not found: 999"));
}
