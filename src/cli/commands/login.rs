use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;

/// Log in against the backend and persist the resulting session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let client = ApiClient::new(cfg);
        let resp = client.login(username, password)?;

        let session = Session::new(resp.token, resp.username, resp.role);
        session.save(cfg)?;

        messages::success(format!("Logged in as '{}'", session.username));
        if session.is_admin() {
            messages::info("Admin commands are available (users, register, --user flags)");
        }
    }
    Ok(())
}
