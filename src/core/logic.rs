use crate::core::calculator::{daily, day_groups, months};
use crate::models::{day_row::DayRow, event::ClockEvent};
use chrono::Local;

pub struct Core;

impl Core {
    /// Build one renderable row per day, ascending by date.
    /// The displayed clock-in/out instants are the same ones the
    /// daily-hours policy selects, so table and hour column never
    /// disagree.
    pub fn build_day_rows(entries: &[ClockEvent]) -> Vec<DayRow> {
        day_groups::group_by_day(entries)
            .into_iter()
            .map(|(date, bucket)| DayRow {
                date,
                clock_in: daily::earliest_clock_in(&bucket)
                    .map(|t| t.with_timezone(&Local)),
                clock_out: daily::latest_clock_out(&bucket)
                    .map(|t| t.with_timezone(&Local)),
                hours: daily::daily_hours(&bucket),
            })
            .collect()
    }

    /// Apply the optional month filter before building day rows.
    pub fn build_filtered_day_rows(entries: &[ClockEvent], month: Option<&str>) -> Vec<DayRow> {
        match month {
            Some(m) => Self::build_day_rows(&months::filter_by_month(entries, m)),
            None => Self::build_day_rows(entries),
        }
    }
}
