// ABOUTME: WorkoutBackend implementation for the hosted REST API (PostgREST dialect)
// ABOUTME: Builds filtered table queries, retries on rate limits, and normalizes rows once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::time::Duration;

use async_trait::async_trait;
use gymr8_core::models::{
    normalize_exercises, normalize_sessions, AppUserRow, AuthenticatedUser, ExerciseRow,
    PerformedExercise, Session, SessionRow,
};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, error, warn};
use url::Url;

use super::http_client::shared_client;
use super::WorkoutBackend;
use crate::auth::AuthContext;
use crate::config::environment::BackendConfig;
use crate::constants::backend::{
    APP_USER_TABLE, AUTH_PATH, PERFORMED_EXERCISE_TABLE, PERFORMED_SESSION_TABLE, REST_PATH,
};
use crate::constants::retry::{INITIAL_BACKOFF_MS, MAX_RETRIES};
use crate::constants::service_names::HOSTED_BACKEND;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Columns selected for sessions, with the schedule name embedded
const SESSION_SELECT: &str = "performed_session_id,started_at,completed_at,note,app_user_id,\
session_schedule:session_schedule_id(session_schedule_id,name)";

/// Columns selected for exercises, with the owning session and catalog entry embedded
const EXERCISE_SELECT: &str = "performed_exercise_id,name,reps,sets,weight,started_at,note,\
performed_session:performed_session_id(performed_session_id,started_at,app_user_id),\
exercise:exercise_id(base_exercise:base_exercise_id(name,description))";

/// Retry behavior for rate-limited requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up
    pub max_retries: u32,
    /// Delay before the first retry; doubled on each subsequent one
    pub initial_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            initial_backoff_ms: INITIAL_BACKOFF_MS,
        }
    }
}

/// Backend talking to the hosted REST and auth endpoints
///
/// Every request carries the project's anon key plus the caller's bearer token,
/// so row-level security on the hosted side applies in addition to the
/// explicit `app_user_id` filters below.
#[derive(Debug, Clone)]
pub struct RestBackend {
    config: BackendConfig,
    client: Client,
    retry: RetryPolicy,
}

impl RestBackend {
    /// Create a backend using the shared HTTP client
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a backend with an explicit client
    #[must_use]
    pub fn with_client(config: BackendConfig, client: Client) -> Self {
        Self {
            config,
            client,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy
    #[must_use]
    pub const fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// URL of a REST table with query parameters applied
    ///
    /// # Errors
    ///
    /// Returns a config error if the base URL cannot be joined
    pub fn table_url(&self, table: &str, params: &[(&str, &str)]) -> AppResult<Url> {
        let mut url = self
            .config
            .url
            .join(&format!("{REST_PATH}/{table}"))
            .map_err(|e| AppError::config(format!("Invalid backend URL: {e}")))?;
        url.query_pairs_mut().extend_pairs(params.iter().copied());
        Ok(url)
    }

    fn auth_url(&self, path: &str) -> AppResult<Url> {
        self.config
            .url
            .join(&format!("{AUTH_PATH}/{path}"))
            .map_err(|e| AppError::config(format!("Invalid backend URL: {e}")))
    }

    async fn get_json<T>(&self, url: Url, token: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(path = url.path(), "Requesting {HOSTED_BACKEND}");

        let mut attempt = 0;
        loop {
            let response = self
                .client
                .get(url.clone())
                .header("apikey", &self.config.anon_key)
                .header(ACCEPT, "application/json")
                .bearer_auth(token)
                .send()
                .await?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                attempt += 1;
                let max_retries = self.retry.max_retries;
                if attempt >= max_retries {
                    warn!("{HOSTED_BACKEND} rate limit exceeded - max retries ({max_retries}) reached");
                    return Err(status_error(status, ""));
                }

                let backoff_ms = self.retry.initial_backoff_ms * 2_u64.pow(attempt - 1);
                warn!(
                    "{HOSTED_BACKEND} rate limit hit - retry {attempt}/{max_retries} after {backoff_ms}ms backoff"
                );
                sleep(Duration::from_millis(backoff_ms)).await;
                continue;
            }

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                if status.is_server_error() {
                    error!("{HOSTED_BACKEND} request failed - status: {status}, body: {text}");
                }
                return Err(status_error(status, &text));
            }

            return response.json::<T>().await.map_err(AppError::from);
        }
    }
}

/// Map a non-success status from the hosted API to an application error
#[must_use]
pub fn status_error(status: StatusCode, body: &str) -> AppError {
    let detail = if body.trim().is_empty() {
        status.to_string()
    } else {
        format!("{status}: {}", body.trim())
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::auth_invalid("Invalid or expired token")
        }
        StatusCode::NOT_FOUND => AppError::not_found("Resource"),
        StatusCode::BAD_REQUEST => AppError::invalid_input(format!("Rejected query ({detail})")),
        StatusCode::TOO_MANY_REQUESTS => AppError::new(
            ErrorCode::ExternalRateLimited,
            format!("{HOSTED_BACKEND} rate limit exceeded, please retry later"),
        ),
        _ => AppError::external_service(HOSTED_BACKEND, detail),
    }
}

#[async_trait]
impl WorkoutBackend for RestBackend {
    fn name(&self) -> &'static str {
        "rest"
    }

    async fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let url = self.auth_url("user")?;
        self.get_json(url, token).await
    }

    async fn fetch_sessions(&self, ctx: &AuthContext) -> AppResult<Vec<Session>> {
        let owner = format!("eq.{}", ctx.user.id);
        let url = self.table_url(
            PERFORMED_SESSION_TABLE,
            &[
                ("select", SESSION_SELECT),
                ("app_user_id", owner.as_str()),
                ("order", "started_at.asc"),
            ],
        )?;
        let rows: Vec<SessionRow> = self.get_json(url, &ctx.token).await?;
        Ok(normalize_sessions(rows))
    }

    async fn fetch_exercises(&self, ctx: &AuthContext) -> AppResult<Vec<PerformedExercise>> {
        let url = self.table_url(
            PERFORMED_EXERCISE_TABLE,
            &[("select", EXERCISE_SELECT), ("order", "started_at.asc")],
        )?;
        let rows: Vec<ExerciseRow> = self.get_json(url, &ctx.token).await?;
        Ok(normalize_owned(rows, ctx))
    }

    async fn fetch_session(
        &self,
        ctx: &AuthContext,
        session_id: &str,
    ) -> AppResult<Option<Session>> {
        let id_filter = format!("eq.{session_id}");
        let owner = format!("eq.{}", ctx.user.id);
        let url = self.table_url(
            PERFORMED_SESSION_TABLE,
            &[
                ("select", SESSION_SELECT),
                ("performed_session_id", id_filter.as_str()),
                ("app_user_id", owner.as_str()),
            ],
        )?;

        // Malformed identifiers are rejected by the column type; treat them as absent
        let rows: Vec<SessionRow> = match self.get_json(url, &ctx.token).await {
            Ok(rows) => rows,
            Err(e) if e.code == ErrorCode::InvalidInput => return Ok(None),
            Err(e) => return Err(e),
        };
        Ok(normalize_sessions(rows).into_iter().next())
    }

    async fn fetch_session_exercises(
        &self,
        ctx: &AuthContext,
        session_id: &str,
    ) -> AppResult<Vec<PerformedExercise>> {
        let id_filter = format!("eq.{session_id}");
        let url = self.table_url(
            PERFORMED_EXERCISE_TABLE,
            &[
                ("select", EXERCISE_SELECT),
                ("performed_session_id", id_filter.as_str()),
                ("order", "started_at.asc"),
            ],
        )?;
        let rows: Vec<ExerciseRow> = self.get_json(url, &ctx.token).await?;
        Ok(normalize_owned(rows, ctx))
    }

    async fn fetch_profile(&self, ctx: &AuthContext) -> AppResult<Option<AppUserRow>> {
        let owner = format!("eq.{}", ctx.user.id);
        let url = self.table_url(
            APP_USER_TABLE,
            &[("select", "*"), ("app_user_id", owner.as_str())],
        )?;
        let rows: Vec<AppUserRow> = self.get_json(url, &ctx.token).await?;
        Ok(rows.into_iter().next())
    }
}

/// Keep only rows whose embedded session belongs to the caller, then normalize
fn normalize_owned(rows: Vec<ExerciseRow>, ctx: &AuthContext) -> Vec<PerformedExercise> {
    let user_id = ctx.user.id.to_string();
    let total = rows.len();
    let owned: Vec<ExerciseRow> = rows
        .into_iter()
        .filter(|row| row.belongs_to(&user_id))
        .collect();
    if owned.len() < total {
        debug!(
            dropped = total - owned.len(),
            "Dropped exercise rows not owned by the caller"
        );
    }
    normalize_exercises(owned)
}
