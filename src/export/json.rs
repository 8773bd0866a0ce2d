use super::model::DayExport;
use crate::errors::{AppError, AppResult};

/// Write per-day rows as pretty-printed JSON.
pub fn write_json(path: &str, days: &[DayExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(days)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
