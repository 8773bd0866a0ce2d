//! Daily worked-hours calculation.

use crate::models::event::ClockEvent;
use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Earliest clock-in instant of a bucket, if any.
pub fn earliest_clock_in(bucket: &[ClockEvent]) -> Option<DateTime<Utc>> {
    bucket
        .iter()
        .filter(|e| e.kind.is_in())
        .map(|e| e.timestamp)
        .min()
}

/// Latest clock-out instant of a bucket, if any.
pub fn latest_clock_out(bucket: &[ClockEvent]) -> Option<DateTime<Utc>> {
    bucket
        .iter()
        .filter(|e| e.kind.is_out())
        .map(|e| e.timestamp)
        .max()
}

/// Reduce one day's bucket to a worked-hours figure using the
/// earliest-in / latest-out policy:
///
/// 1. split the bucket into clock-ins and clock-outs;
/// 2. if either side is empty there is no computable session → 0;
/// 3. otherwise take the minimum clock-in and the maximum clock-out;
/// 4. return (latest out − earliest in) in fractional hours,
///    millisecond-exact (duration / 3,600,000).
///
/// The bucket does not have to be sorted and may hold several events of
/// the same kind (manual edits). The result is unrounded and may be
/// negative when the selected clock-out precedes the clock-in; callers
/// display it as-is rather than clamping.
pub fn daily_hours(bucket: &[ClockEvent]) -> f64 {
    match (earliest_clock_in(bucket), latest_clock_out(bucket)) {
        (Some(clock_in), Some(clock_out)) => {
            (clock_out - clock_in).num_milliseconds() as f64 / MILLIS_PER_HOUR
        }
        _ => 0.0,
    }
}
