pub mod chart;
pub mod clock;
pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod status;
pub mod users;

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::user::UserTimeRecord;
use crate::session::Session;

/// Open the stored session and build an authenticated client from it.
/// Every authenticated command goes through here, so the token is read
/// fresh on each invocation.
pub(crate) fn authed_client(cfg: &Config) -> AppResult<(ApiClient, Session)> {
    let session = Session::load(cfg)?;
    let client = ApiClient::with_session(cfg, &session);
    Ok((client, session))
}

/// Resolve a `--user` argument against the admin user list, matching by
/// id first, then by username.
pub(crate) fn resolve_user<'a>(
    users: &'a [UserTimeRecord],
    key: &str,
) -> AppResult<&'a UserTimeRecord> {
    users
        .iter()
        .find(|u| u.id == key)
        .or_else(|| users.iter().find(|u| u.username == key))
        .ok_or_else(|| AppError::UnknownUser(key.to_string()))
}

/// Fetch the record to operate on: another user via the admin list when
/// `--user` is given, the current user otherwise.
pub(crate) fn fetch_target_record(
    client: &ApiClient,
    user: Option<&str>,
) -> AppResult<UserTimeRecord> {
    match user {
        Some(key) => {
            let users = client.fetch_users()?;
            Ok(resolve_user(&users, key)?.clone())
        }
        None => client.fetch_current_user(),
    }
}
