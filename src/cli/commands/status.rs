use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

use super::authed_client;
use chrono::Local;

/// Show the current clock status as the server last recorded it.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (client, session) = authed_client(cfg)?;
    let record = client.fetch_current_user()?;

    let detail = record
        .clock_entries
        .last()
        .map(|e| {
            format!(
                "(last event: {} at {})",
                e.kind.label(),
                e.timestamp
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
            )
        })
        .unwrap_or_default();

    println!("👤 {} [{}]", record.username, record.role);
    messages::clock_status(record.clocked_in, &detail);

    if session.username != record.username {
        messages::warning("Stored session username differs from the server record");
    }

    Ok(())
}
