//! HTTP client for the timeclock backend.
//!
//! Thin wrapper around a blocking reqwest client: attaches the bearer
//! token from the session, sends JSON bodies, and maps non-success
//! responses to AppError::Api. Error bodies are expected as
//! `{"error": ...}` or `{"message": ...}`; anything else falls back to
//! a generic "Failed to ..." string. No retries, no timeouts: every
//! failure is terminal for the command that triggered it.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{user::UserTimeRecord, work_hours::WorkHours};
use crate::session::Session;
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

/// Response of the login endpoint: the token plus the user fields the
/// server chooses to echo back.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "_id", default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
struct ClockRequest {
    time: DateTime<Utc>,
}

/// Time-entry correction payload. `date` is the only date-only field on
/// the wire (`YYYY-MM-DD`); the instants are ISO-8601. Omitted sides are
/// left untouched by the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryEdit {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct UserUpdate {
    pub username: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiClient {
    /// Client without a token, for the login endpoint.
    pub fn new(cfg: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: cfg.server.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client carrying the bearer token of an existing session.
    pub fn with_session(cfg: &Config, session: &Session) -> Self {
        Self {
            http: Client::new(),
            base_url: cfg.server.trim_end_matches('/').to_string(),
            token: Some(session.token.clone()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, attaching the bearer token when present, and map
    /// non-success responses to AppError::Api with the best available
    /// message.
    fn send(&self, req: RequestBuilder, fallback: &str) -> AppResult<Response> {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send()?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<ApiErrorBody>()
            .ok()
            .and_then(|body| body.error.or(body.message))
            .unwrap_or_else(|| fallback.to_string());

        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // ---------------------------
    // Auth
    // ---------------------------

    pub fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let req = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&LoginRequest { username, password });

        Ok(self.send(req, "Invalid username or password")?.json()?)
    }

    pub fn register(&self, payload: &RegisterRequest) -> AppResult<UserTimeRecord> {
        let req = self.http.post(self.url("/api/auth/register")).json(payload);
        Ok(self.send(req, "Failed to add user.")?.json()?)
    }

    // ---------------------------
    // User records
    // ---------------------------

    pub fn fetch_users(&self) -> AppResult<Vec<UserTimeRecord>> {
        let req = self.http.get(self.url("/api/users"));
        Ok(self.send(req, "Failed to fetch users.")?.json()?)
    }

    pub fn fetch_current_user(&self) -> AppResult<UserTimeRecord> {
        let req = self.http.get(self.url("/api/users/current-user"));
        Ok(self.send(req, "Failed to fetch user status.")?.json()?)
    }

    pub fn update_user(&self, user_id: &str, update: &UserUpdate) -> AppResult<UserTimeRecord> {
        let req = self
            .http
            .put(self.url(&format!("/api/users/{}", user_id)))
            .json(update);
        Ok(self.send(req, "Failed to update profile.")?.json()?)
    }

    // ---------------------------
    // Clocking
    // ---------------------------

    pub fn clock_in(&self, time: DateTime<Utc>) -> AppResult<UserTimeRecord> {
        let req = self
            .http
            .put(self.url("/api/users/current-user/clock-in"))
            .json(&ClockRequest { time });
        Ok(self.send(req, "Failed to clock in.")?.json()?)
    }

    pub fn clock_out(&self, time: DateTime<Utc>) -> AppResult<UserTimeRecord> {
        let req = self
            .http
            .put(self.url("/api/users/current-user/clock-out"))
            .json(&ClockRequest { time });
        Ok(self.send(req, "Failed to clock out.")?.json()?)
    }

    // ---------------------------
    // Time-entry corrections
    // ---------------------------

    pub fn update_own_time_entries(&self, edit: &TimeEntryEdit) -> AppResult<UserTimeRecord> {
        let req = self
            .http
            .put(self.url("/api/users/current-user/time-entries"))
            .json(edit);
        Ok(self.send(req, "Failed to update time entries.")?.json()?)
    }

    pub fn update_time_entries(
        &self,
        user_id: &str,
        edit: &TimeEntryEdit,
    ) -> AppResult<UserTimeRecord> {
        let req = self
            .http
            .put(self.url(&format!("/api/users/{}/time-entries", user_id)))
            .json(edit);
        Ok(self.send(req, "Failed to update time entries.")?.json()?)
    }

    // ---------------------------
    // Server-side aggregates
    // ---------------------------

    pub fn fetch_work_hours(&self) -> AppResult<WorkHours> {
        let req = self.http.get(self.url("/api/users/current-user/work-hours"));
        Ok(self.send(req, "Failed to fetch work hours.")?.json()?)
    }
}
