use serde::{Deserialize, Serialize};

/// Kind of a single clock event, matching the wire names used by the
/// backend (`clockIn` / `clockOut`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    #[serde(rename = "clockIn")]
    ClockIn,
    #[serde(rename = "clockOut")]
    ClockOut,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "clockIn",
            EventKind::ClockOut => "clockOut",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "Clock In",
            EventKind::ClockOut => "Clock Out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventKind::ClockOut)
    }
}
