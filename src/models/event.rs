use super::event_kind::EventKind;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped clock record, immutable once created.
/// The backend stores these as a flat append-only sequence per user;
/// several events may share the same calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
}

impl ClockEvent {
    pub fn new(kind: EventKind, timestamp: DateTime<Utc>) -> Self {
        Self { kind, timestamp }
    }

    /// Calendar day of the event in the viewer's local time zone.
    /// Day buckets and month keys both use this zone.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    /// `YYYY-MM` key of the event in the viewer's local time zone.
    pub fn month_key(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%Y-%m").to_string()
    }

    pub fn local_time_str(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}
