//! Partition clock events into calendar-day buckets.

use crate::models::event::ClockEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Group events by the calendar day of their timestamp in the viewer's
/// local time zone. Pure function: every event lands in exactly one
/// bucket, no filtering by kind happens here, and an empty input yields
/// an empty map. Order within a bucket follows input order and carries
/// no meaning; consumers sort by timestamp where it matters.
pub fn group_by_day(entries: &[ClockEvent]) -> BTreeMap<NaiveDate, Vec<ClockEvent>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<ClockEvent>> = BTreeMap::new();

    for entry in entries {
        grouped.entry(entry.local_date()).or_default().push(entry.clone());
    }

    grouped
}
