use crate::api::client::UserUpdate;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

use super::{authed_client, fetch_target_record};

/// Show a profile, or update it when any of the change flags is given.
/// Updates go through `PUT /api/users/:id`; changing someone else's
/// profile needs an admin session (enforced by the backend).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        user,
        username,
        role,
        phone,
    } = cmd
    {
        if let Some(r) = role
            && r != "user"
            && r != "admin"
        {
            return Err(AppError::InvalidRole(r.clone()));
        }

        let (client, _session) = authed_client(cfg)?;
        let record = fetch_target_record(&client, user.as_deref())?;

        let wants_update = username.is_some() || role.is_some() || phone.is_some();

        if wants_update {
            let update = UserUpdate {
                username: username.clone().unwrap_or_else(|| record.username.clone()),
                role: role.clone().unwrap_or_else(|| record.role.clone()),
                phone: phone.clone().or_else(|| record.phone.clone()),
            };

            client.update_user(&record.id, &update)?;
            messages::success("Profile updated");
        }

        // Always re-fetch so the printed profile reflects the stored state.
        let current = fetch_target_record(&client, user.as_deref())?;

        println!("👤 Username : {}", current.username);
        println!("🔑 Role     : {}", current.role);
        println!(
            "📞 Phone    : {}",
            current.phone.as_deref().unwrap_or("-")
        );
        println!("⏱️  Status   : {}", current.status_label());
        println!("🗂️  Entries  : {}", current.clock_entries.len());
    }
    Ok(())
}
