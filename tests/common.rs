#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchcard")
}

/// Create a unique, empty config/session directory inside the system temp dir
pub fn setup_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcard", name));
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).expect("create test dir");
    path.to_string_lossy().to_string()
}

/// Command pre-wired with the test dir, the mock server URL and a fixed
/// time zone so day grouping is deterministic.
pub fn pc_at(dir: &str, server: &str) -> Command {
    let mut cmd = pc();
    cmd.env("TZ", "UTC").args(["--dir", dir, "--server", server]);
    cmd
}

/// Drop a ready-made session file into the test dir, skipping the login
/// round-trip for tests that exercise authenticated commands.
pub fn write_session(dir: &str, username: &str, role: &str) {
    let json = format!(
        r#"{{"token":"test-token","username":"{username}","role":"{role}","logged_in_at":"2024-01-01T00:00:00Z"}}"#
    );
    fs::write(PathBuf::from(dir).join("session.json"), json).expect("write session");
}

/// One clock entry in wire form.
pub fn entry(kind: &str, timestamp: &str) -> String {
    format!(r#"{{"type":"{kind}","timestamp":"{timestamp}"}}"#)
}

/// One user record in wire form.
pub fn user_record(
    id: &str,
    username: &str,
    role: &str,
    clocked_in: bool,
    entries: &[String],
) -> String {
    format!(
        r#"{{"_id":"{id}","username":"{username}","role":"{role}","clockedIn":{clocked_in},"clockEntries":[{}]}}"#,
        entries.join(",")
    )
}
