use super::model::{day_to_record, get_headers, DayExport};
use crate::errors::{AppError, AppResult};

/// Write per-day rows as CSV with a header line.
pub fn write_csv(path: &str, days: &[DayExport]) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(e.to_string()))?;

    writer
        .write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for day in days {
        writer
            .write_record(day_to_record(day))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
