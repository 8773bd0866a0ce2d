use super::event::ClockEvent;
use serde::{Deserialize, Serialize};

/// One user record as returned by the backend, including the full
/// clock-entry history. `clocked_in` is a cached flag maintained by the
/// server; the client only reads it to disable the redundant action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTimeRecord {
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    #[serde(default)]
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(rename = "clockedIn", default)]
    pub clocked_in: bool,

    #[serde(rename = "clockEntries", default)]
    pub clock_entries: Vec<ClockEvent>,
}

impl UserTimeRecord {
    pub fn status_label(&self) -> &'static str {
        if self.clocked_in { "Clocked In" } else { "Clocked Out" }
    }
}
