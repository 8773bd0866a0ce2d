//! Month keys for the entry filter.

use crate::models::event::ClockEvent;
use std::collections::BTreeSet;

/// Distinct `YYYY-MM` keys present in the entries, ascending.
/// Lexicographic order equals chronological order for ISO month keys.
pub fn available_months(entries: &[ClockEvent]) -> Vec<String> {
    let months: BTreeSet<String> = entries.iter().map(|e| e.month_key()).collect();
    months.into_iter().collect()
}

/// Keep only entries whose local `YYYY-MM` key equals `month`.
pub fn filter_by_month(entries: &[ClockEvent], month: &str) -> Vec<ClockEvent> {
    entries
        .iter()
        .filter(|e| e.month_key() == month)
        .cloned()
        .collect()
}

/// Validate a user-supplied `YYYY-MM` filter value.
pub fn is_month_key(s: &str) -> bool {
    s.len() == 7
        && chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").is_ok()
}
