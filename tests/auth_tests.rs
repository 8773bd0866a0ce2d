use httpmock::prelude::*;
use predicates::prelude::*;
use std::path::Path;

mod common;
use common::{pc_at, setup_dir, write_session};

#[test]
fn login_success_stores_session() {
    let dir = setup_dir("login_success");
    let server = MockServer::start();

    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body_partial(r#"{"username":"alice","password":"secret"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"token":"tok-123","_id":"u1","username":"alice","role":"user"}"#);
    });

    pc_at(&dir, &server.base_url())
        .args(["login", "alice", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as 'alice'"));

    login.assert();

    let session = std::fs::read_to_string(Path::new(&dir).join("session.json"))
        .expect("session file written at login");
    assert!(session.contains("tok-123"));
}

#[test]
fn login_failure_surfaces_server_message() {
    let dir = setup_dir("login_bad");
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"Unknown account"}"#);
    });

    pc_at(&dir, &server.base_url())
        .args(["login", "alice", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown account"));

    assert!(!Path::new(&dir).join("session.json").exists());
}

#[test]
fn login_failure_without_body_uses_generic_message() {
    let dir = setup_dir("login_generic");
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401);
    });

    pc_at(&dir, &server.base_url())
        .args(["login", "alice", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn logout_clears_session() {
    let dir = setup_dir("logout");
    let server = MockServer::start();
    write_session(&dir, "alice", "user");

    pc_at(&dir, &server.base_url())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(!Path::new(&dir).join("session.json").exists());

    // A second logout has nothing to clear.
    pc_at(&dir, &server.base_url())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session"));
}

#[test]
fn authenticated_command_without_session_fails() {
    let dir = setup_dir("no_session");
    let server = MockServer::start();

    pc_at(&dir, &server.base_url())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn bearer_token_is_attached_to_authenticated_calls() {
    let dir = setup_dir("bearer");
    let server = MockServer::start();
    write_session(&dir, "alice", "user");

    let get_user = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/current-user")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::user_record("u1", "alice", "user", false, &[]));
    });

    pc_at(&dir, &server.base_url())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked Out"));

    get_user.assert();
}
