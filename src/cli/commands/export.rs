use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::months::is_month_key;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;

use super::{authed_client, fetch_target_record};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        user,
        force,
    } = cmd
    {
        if let Some(m) = month
            && !is_month_key(m)
        {
            return Err(AppError::InvalidMonth(m.clone()));
        }

        let (client, _session) = authed_client(cfg)?;
        let record = fetch_target_record(&client, user.as_deref())?;
        let rows = Core::build_filtered_day_rows(&record.clock_entries, month.as_deref());

        ExportLogic::run(format, file, &rows, *force)?;
    }
    Ok(())
}
