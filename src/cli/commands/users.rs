use crate::config::Config;
use crate::core::calculator::aggregate::total_hours;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::fmt_hours_colored;
use crate::utils::table::Table;

use super::authed_client;

/// Admin overview: one row per user with the aggregate of their full
/// entry history.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (client, session) = authed_client(cfg)?;

    // The backend rejects non-admins too; failing early reads better.
    if !session.is_admin() {
        return Err(AppError::AdminRequired("users".to_string()));
    }

    let users = client.fetch_users()?;

    if users.is_empty() {
        println!("No user data available.");
        return Ok(());
    }

    let mut table = Table::new(&["Username", "Role", "Phone", "Status", "Total Hours"]);

    for user in &users {
        table.add_row(vec![
            user.username.clone(),
            user.role.clone(),
            user.phone.clone().unwrap_or_default(),
            user.status_label().to_string(),
            fmt_hours_colored(total_hours(&user.clock_entries)),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
