use crate::api::client::RegisterRequest;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

use super::authed_client;

/// Create a new account. Admin only: the stored role gates the command
/// up front, the backend checks the caller again.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        username,
        password,
        role,
        phone,
    } = cmd
    {
        if role != "user" && role != "admin" {
            return Err(AppError::InvalidRole(role.clone()));
        }

        let (client, session) = authed_client(cfg)?;

        if !session.is_admin() {
            return Err(AppError::AdminRequired("register".to_string()));
        }

        let created = client.register(&RegisterRequest {
            username: username.clone(),
            password: password.clone(),
            role: role.clone(),
            phone: phone.clone().unwrap_or_default(),
        })?;

        messages::success(format!(
            "User '{}' added with role '{}'",
            created.username, created.role
        ));
    }
    Ok(())
}
