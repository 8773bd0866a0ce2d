use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::parse_instant;
use chrono::Utc;

use super::authed_client;

/// Clock in or out.
///
/// The last fetched `clocked_in` flag guards the redundant action (the
/// CLI analogue of the disabled button); the backend stays authoritative
/// for the actual transition. Every successful write is followed by a
/// re-fetch before anything is reported.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (client, _session) = authed_client(cfg)?;

    let (clocking_in, at) = match cmd {
        Commands::In { at } => (true, at),
        Commands::Out { at } => (false, at),
        _ => return Ok(()),
    };

    let record = client.fetch_current_user()?;

    if clocking_in && record.clocked_in {
        messages::warning("Already clocked in — nothing to do");
        return Ok(());
    }
    if !clocking_in && !record.clocked_in {
        messages::warning("Already clocked out — nothing to do");
        return Ok(());
    }

    let time = match at {
        Some(s) => parse_instant(s)?,
        None => Utc::now(),
    };

    if clocking_in {
        client.clock_in(time)?;
    } else {
        client.clock_out(time)?;
    }

    // Refetch: the server record is the source of truth for the new state.
    let updated = client.fetch_current_user()?;
    messages::success(if clocking_in { "Clocked in" } else { "Clocked out" });
    messages::clock_status(updated.clocked_in, "");

    Ok(())
}
