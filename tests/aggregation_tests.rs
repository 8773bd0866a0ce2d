//! Properties of the aggregation core, tested against the library
//! directly (no server involved).

use chrono::{DateTime, Utc};
use punchcard::core::calculator::aggregate::total_hours;
use punchcard::core::calculator::daily::daily_hours;
use punchcard::core::calculator::day_groups::group_by_day;
use punchcard::core::calculator::months::{available_months, filter_by_month, is_month_key};
use punchcard::core::logic::Core;
use punchcard::models::event::ClockEvent;
use punchcard::models::event_kind::EventKind;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("test timestamp")
        .with_timezone(&Utc)
}

fn clock_in(s: &str) -> ClockEvent {
    ClockEvent::new(EventKind::ClockIn, at(s))
}

fn clock_out(s: &str) -> ClockEvent {
    ClockEvent::new(EventKind::ClockOut, at(s))
}

#[test]
fn empty_bucket_yields_zero_hours() {
    assert_eq!(daily_hours(&[]), 0.0);
}

#[test]
fn bucket_missing_one_side_yields_zero_hours() {
    let only_in = vec![clock_in("2024-03-01T09:00:00Z")];
    let only_out = vec![clock_out("2024-03-01T17:00:00Z")];

    assert_eq!(daily_hours(&only_in), 0.0);
    assert_eq!(daily_hours(&only_out), 0.0);
}

#[test]
fn single_pair_is_millisecond_exact() {
    // 09:00 -> 17:30 is exactly 8.5 hours.
    let bucket = vec![
        clock_in("2024-03-01T09:00:00Z"),
        clock_out("2024-03-01T17:30:00Z"),
    ];
    assert_eq!(daily_hours(&bucket), 8.5);
}

#[test]
fn earliest_in_and_latest_out_win_regardless_of_order() {
    let bucket = vec![
        clock_out("2024-03-01T12:00:00Z"),
        clock_in("2024-03-01T10:30:00Z"),
        clock_out("2024-03-01T18:00:00Z"),
        clock_in("2024-03-01T08:00:00Z"),
        clock_in("2024-03-01T09:15:00Z"),
    ];
    // 08:00 -> 18:00
    assert_eq!(daily_hours(&bucket), 10.0);
}

#[test]
fn clock_out_before_clock_in_goes_negative_unclamped() {
    let bucket = vec![
        clock_in("2024-03-01T17:00:00Z"),
        clock_out("2024-03-01T09:00:00Z"),
    ];
    assert_eq!(daily_hours(&bucket), -8.0);
}

#[test]
fn grouping_partitions_without_loss_or_duplication() {
    // Midday timestamps on well-separated days keep the local-day key
    // stable in any time zone.
    let entries = vec![
        clock_in("2024-03-05T12:00:00Z"),
        clock_out("2024-03-05T12:30:00Z"),
        clock_in("2024-03-15T12:00:00Z"),
        clock_in("2024-04-10T12:00:00Z"),
        clock_out("2024-04-10T12:15:00Z"),
    ];

    let grouped = group_by_day(&entries);
    let bucketed: usize = grouped.values().map(|b| b.len()).sum();
    assert_eq!(bucketed, entries.len());

    for entry in &entries {
        let count = grouped
            .values()
            .flatten()
            .filter(|e| e.timestamp == entry.timestamp && e.kind == entry.kind)
            .count();
        assert_eq!(count, 1, "each event belongs to exactly one bucket");
    }
}

#[test]
fn grouping_empty_input_yields_empty_map() {
    assert!(group_by_day(&[]).is_empty());
}

#[test]
fn aggregate_sums_daily_buckets() {
    let entries = vec![
        // 0.5 h
        clock_in("2024-03-05T12:00:00Z"),
        clock_out("2024-03-05T12:30:00Z"),
        // dangling clock-in, contributes 0
        clock_in("2024-03-15T12:00:00Z"),
    ];
    assert_eq!(total_hours(&entries), 0.5);
}

#[test]
fn available_months_are_distinct_and_ascending() {
    let entries = vec![
        clock_in("2024-04-15T12:00:00Z"),
        clock_in("2024-03-15T12:00:00Z"),
        clock_out("2024-03-15T12:30:00Z"),
        clock_in("2024-03-16T12:00:00Z"),
        clock_out("2024-05-15T12:00:00Z"),
    ];
    assert_eq!(available_months(&entries), vec!["2024-03", "2024-04", "2024-05"]);
}

#[test]
fn month_filter_keeps_only_matching_entries() {
    let entries = vec![
        clock_in("2024-03-15T12:00:00Z"),
        clock_out("2024-03-15T12:30:00Z"),
        clock_in("2024-04-15T12:00:00Z"),
    ];
    let filtered = filter_by_month(&entries, "2024-03");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|e| e.month_key() == "2024-03"));
}

#[test]
fn month_key_validation() {
    assert!(is_month_key("2024-03"));
    assert!(!is_month_key("2024-13"));
    assert!(!is_month_key("2024-3"));
    assert!(!is_month_key("march"));
}

#[test]
fn day_rows_are_ascending_and_match_policy() {
    let entries = vec![
        clock_in("2024-03-15T12:00:00Z"),
        clock_out("2024-03-15T12:30:00Z"),
        clock_in("2024-03-05T12:00:00Z"),
        clock_out("2024-03-05T13:00:00Z"),
    ];

    let rows = Core::build_day_rows(&entries);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].date < rows[1].date);
    assert_eq!(rows[0].hours, 1.0);
    assert_eq!(rows[1].hours, 0.5);
}
