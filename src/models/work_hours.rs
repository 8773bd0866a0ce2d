use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Server-computed work-hours summary for the current user.
/// `daily_hours` is keyed by date string; week and biweek totals are
/// computed by the backend, not by this client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHours {
    #[serde(default)]
    pub daily_hours: BTreeMap<String, f64>,

    #[serde(default)]
    pub week_total: f64,

    #[serde(default)]
    pub biweek_total: f64,
}
