use super::{csv, json, model::DayExport, notify_export_success, ExportFormat};
use crate::errors::{AppError, AppResult};
use crate::models::day_row::DayRow;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the per-day rows to `file` in the requested format.
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn run(format: &ExportFormat, file: &str, rows: &[DayRow], force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "file '{}' already exists (use --force to overwrite)",
                file
            )));
        }

        let days: Vec<DayExport> = rows.iter().map(DayExport::from).collect();

        match format {
            ExportFormat::Csv => csv::write_csv(file, &days)?,
            ExportFormat::Json => json::write_json(file, &days)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
