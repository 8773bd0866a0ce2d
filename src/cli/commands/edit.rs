use crate::api::client::TimeEntryEdit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::{local_to_instant, parse_clock_time, parse_date};
use crate::utils::formatting::{fmt_hours_colored, fmt_optional_time};

use super::{authed_client, fetch_target_record};

/// Correct the clock-in/out pair of one day, for the current user or
/// (admin) another one. The edit bypasses the clock state machine: the
/// backend upserts the given sides directly, so a day with no prior
/// entries ends up with whatever sides were submitted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date,
        clock_in,
        clock_out,
        user,
    } = cmd
    {
        if clock_in.is_none() && clock_out.is_none() {
            return Err(AppError::Other(
                "nothing to change: pass --in and/or --out".to_string(),
            ));
        }

        let day = parse_date(date)?;

        let edit = TimeEntryEdit {
            // The one date-only field of the API.
            date: day.format("%Y-%m-%d").to_string(),
            clock_in: clock_in
                .as_deref()
                .map(|t| parse_clock_time(t).and_then(|t| local_to_instant(day, t)))
                .transpose()?,
            clock_out: clock_out
                .as_deref()
                .map(|t| parse_clock_time(t).and_then(|t| local_to_instant(day, t)))
                .transpose()?,
        };

        let (client, _session) = authed_client(cfg)?;

        let target = user
            .as_deref()
            .map(|key| fetch_target_record(&client, Some(key)))
            .transpose()?;

        match &target {
            Some(record) => client.update_time_entries(&record.id, &edit)?,
            None => client.update_own_time_entries(&edit)?,
        };

        // Refetch before reporting: the stored entries, not the request,
        // decide what the day now looks like.
        let updated = fetch_target_record(&client, user.as_deref())?;
        messages::success(format!("Time entries updated for {}", edit.date));

        if let Some(row) = Core::build_day_rows(&updated.clock_entries)
            .into_iter()
            .find(|r| r.date == day)
        {
            println!(
                "{}  in: {}  out: {}  hours: {}",
                row.date,
                fmt_optional_time(row.clock_in),
                fmt_optional_time(row.clock_out),
                fmt_hours_colored(row.hours),
            );
        }
    }
    Ok(())
}
