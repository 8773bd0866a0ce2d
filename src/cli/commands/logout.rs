use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;

/// Discard the stored session. The token is never revoked server-side;
/// forgetting it locally ends the session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if Session::clear(cfg)? {
        messages::success("Logged out");
    } else {
        messages::info("No active session");
    }
    Ok(())
}
