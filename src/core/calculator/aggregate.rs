//! Aggregate hours across a user's full entry set.

use super::{daily::daily_hours, day_groups::group_by_day};
use crate::models::event::ClockEvent;

/// Sum of the daily-hours figure over every day bucket in the given
/// entries. No date-range filter is applied here; callers pre-filter
/// when a narrower window is wanted.
pub fn total_hours(entries: &[ClockEvent]) -> f64 {
    group_by_day(entries)
        .values()
        .map(|bucket| daily_hours(bucket))
        .sum()
}
