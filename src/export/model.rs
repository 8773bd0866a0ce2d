// src/export/model.rs

use crate::models::day_row::DayRow;
use crate::utils::formatting::fmt_hours;
use serde::Serialize;

/// Flat per-day record for export files.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub hours: String,
}

impl From<&DayRow> for DayExport {
    fn from(row: &DayRow) -> Self {
        Self {
            date: row.date.format("%Y-%m-%d").to_string(),
            clock_in: row
                .clock_in
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            clock_out: row
                .clock_out
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            hours: fmt_hours(row.hours),
        }
    }
}

/// Header row for CSV output.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "clock_in", "clock_out", "hours"]
}

pub(crate) fn day_to_record(d: &DayExport) -> Vec<String> {
    vec![
        d.date.clone(),
        d.clock_in.clone(),
        d.clock_out.clone(),
        d.hours.clone(),
    ]
}
