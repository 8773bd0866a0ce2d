use httpmock::prelude::*;
use predicates::prelude::*;

mod common;
use common::{entry, pc_at, setup_dir, user_record, write_session};

fn two_users_body() -> String {
    let alice = user_record(
        "u1",
        "alice",
        "user",
        false,
        &[
            entry("clockIn", "2024-03-01T09:00:00Z"),
            entry("clockOut", "2024-03-01T17:00:00Z"),
        ],
    );
    let bob = user_record(
        "u2",
        "bob",
        "user",
        true,
        &[entry("clockIn", "2024-03-02T08:00:00Z")],
    );
    format!("[{},{}]", alice, bob)
}

#[test]
fn users_table_shows_aggregate_hours() {
    let dir = setup_dir("users_table");
    let server = MockServer::start();
    write_session(&dir, "root", "admin");

    let get_users = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(two_users_body());
    });

    pc_at(&dir, &server.base_url())
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("8.00"))
        .stdout(predicate::str::contains("bob"))
        .stdout(predicate::str::contains("0.00"));

    get_users.assert();
}

#[test]
fn users_requires_admin_role() {
    let dir = setup_dir("users_not_admin");
    let server = MockServer::start();
    write_session(&dir, "alice", "user");

    pc_at(&dir, &server.base_url())
        .arg("users")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Admin privileges required"));
}

#[test]
fn list_other_user_resolves_by_username() {
    let dir = setup_dir("list_other");
    let server = MockServer::start();
    write_session(&dir, "root", "admin");

    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(two_users_body());
    });

    pc_at(&dir, &server.base_url())
        .args(["list", "--user", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== bob ==="));
}

#[test]
fn unknown_user_argument_fails() {
    let dir = setup_dir("list_unknown");
    let server = MockServer::start();
    write_session(&dir, "root", "admin");

    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(two_users_body());
    });

    pc_at(&dir, &server.base_url())
        .args(["list", "--user", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown user: nobody"));
}

#[test]
fn edit_other_user_targets_their_record() {
    let dir = setup_dir("edit_other");
    let server = MockServer::start();
    write_session(&dir, "root", "admin");

    let get_users = server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(two_users_body());
    });

    let put_entries = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/users/u2/time-entries")
            .json_body_partial(
                r#"{"date":"2024-03-02","clockIn":"2024-03-02T09:00:00Z","clockOut":"2024-03-02T17:00:00Z"}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(user_record("u2", "bob", "user", false, &[]));
    });

    pc_at(&dir, &server.base_url())
        .args(["edit", "2024-03-02", "--in", "09:00", "--out", "17:00", "--user", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time entries updated for 2024-03-02"));

    put_entries.assert();
    // Resolve before the write plus the refetch after it.
    get_users.assert_hits(2);
}

#[test]
fn edit_own_day_creates_both_sides() {
    let dir = setup_dir("edit_own");
    let server = MockServer::start();
    write_session(&dir, "alice", "user");

    let put_entries = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/users/current-user/time-entries")
            .json_body_partial(
                r#"{"date":"2024-03-05","clockIn":"2024-03-05T09:00:00Z","clockOut":"2024-03-05T17:00:00Z"}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(user_record("u1", "alice", "user", false, &[]));
    });

    // After the write the record holds the freshly upserted pair.
    let get_user = server.mock(|when, then| {
        when.method(GET).path("/api/users/current-user");
        then.status(200)
            .header("content-type", "application/json")
            .body(user_record(
                "u1",
                "alice",
                "user",
                false,
                &[
                    entry("clockIn", "2024-03-05T09:00:00Z"),
                    entry("clockOut", "2024-03-05T17:00:00Z"),
                ],
            ));
    });

    pc_at(&dir, &server.base_url())
        .args(["edit", "2024-03-05", "--in", "09:00", "--out", "17:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.00"));

    put_entries.assert();
    get_user.assert();
}

#[test]
fn edit_without_changes_is_rejected() {
    let dir = setup_dir("edit_noop");
    let server = MockServer::start();
    write_session(&dir, "alice", "user");

    pc_at(&dir, &server.base_url())
        .args(["edit", "2024-03-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn register_posts_new_account() {
    let dir = setup_dir("register");
    let server = MockServer::start();
    write_session(&dir, "root", "admin");

    let post_register = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/register")
            .json_body_partial(r#"{"username":"carol","password":"pw","role":"user","phone":""}"#);
        then.status(201)
            .header("content-type", "application/json")
            .body(user_record("u3", "carol", "user", false, &[]));
    });

    pc_at(&dir, &server.base_url())
        .args(["register", "carol", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User 'carol' added"));

    post_register.assert();
}

#[test]
fn register_rejects_bad_role() {
    let dir = setup_dir("register_role");
    let server = MockServer::start();
    write_session(&dir, "root", "admin");

    pc_at(&dir, &server.base_url())
        .args(["register", "carol", "pw", "--role", "boss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role: boss"));
}

#[test]
fn profile_update_puts_merged_fields() {
    let dir = setup_dir("profile_update");
    let server = MockServer::start();
    write_session(&dir, "alice", "user");

    server.mock(|when, then| {
        when.method(GET).path("/api/users/current-user");
        then.status(200)
            .header("content-type", "application/json")
            .body(user_record("u1", "alice", "user", false, &[]));
    });

    let put_user = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/users/u1")
            .json_body_partial(r#"{"username":"alice","role":"user","phone":"555-0100"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(user_record("u1", "alice", "user", false, &[]));
    });

    pc_at(&dir, &server.base_url())
        .args(["profile", "--phone", "555-0100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile updated"));

    put_user.assert();
}

#[test]
fn chart_uses_server_work_hours_for_self() {
    let dir = setup_dir("chart_self");
    let server = MockServer::start();
    write_session(&dir, "alice", "user");

    let get_hours = server.mock(|when, then| {
        when.method(GET).path("/api/users/current-user/work-hours");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"dailyHours":{"2024-03-01":8.5,"2024-03-02":4.0},"weekTotal":12.5,"biweekTotal":20.25}"#);
    });

    pc_at(&dir, &server.base_url())
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("█"))
        .stdout(predicate::str::contains("8.50"))
        .stdout(predicate::str::contains("Total hours worked this week:   12.50"))
        .stdout(predicate::str::contains("Total hours worked this biweek: 20.25"));

    get_hours.assert();
}

#[test]
fn chart_all_users_plots_totals() {
    let dir = setup_dir("chart_all");
    let server = MockServer::start();
    write_session(&dir, "root", "admin");

    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(two_users_body());
    });

    pc_at(&dir, &server.base_url())
        .args(["chart", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hours per user"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("bob"));
}
