use chrono::{DateTime, Local, NaiveDate};

/// One renderable per-day row: the day, the clock-in/out instants the
/// daily-hours policy selected, and the resulting hour count.
/// `hours` is unrounded and may be negative for malformed days.
#[derive(Debug, Clone)]
pub struct DayRow {
    pub date: NaiveDate,
    pub clock_in: Option<DateTime<Local>>,
    pub clock_out: Option<DateTime<Local>>,
    pub hours: f64,
}
