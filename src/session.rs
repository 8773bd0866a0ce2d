//! Login session handling.
//!
//! The bearer token lives in an explicit Session object with a defined
//! lifecycle: written at login, read before every authenticated call,
//! removed at logout. Stored as JSON next to the config file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, username: String, role: String) -> Self {
        Self {
            token,
            username,
            role,
            logged_in_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Read the stored session. A missing file means nobody is logged in.
    pub fn load(cfg: &Config) -> AppResult<Self> {
        let path = cfg.session_file();
        if !path.exists() {
            return Err(AppError::NotLoggedIn);
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Session(format!("corrupted session file: {}", e)))
    }

    /// Persist the session after a successful login.
    pub fn save(&self, cfg: &Config) -> AppResult<()> {
        fs::create_dir_all(cfg.dir())?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(cfg.session_file(), json)?;
        Ok(())
    }

    /// Remove the stored session. Returns whether one existed.
    pub fn clear(cfg: &Config) -> AppResult<bool> {
        let path = cfg.session_file();
        if path.exists() {
            fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
