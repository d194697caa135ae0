// ABOUTME: Workout history route handlers
// ABOUTME: Searchable, cursor-paginated session list and single-session detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use gymr8_core::pagination::{Cursor, PaginationParams, SortOrder};
use gymr8_stats::history::{list_workouts, WorkoutDetail, WorkoutQuery};
use serde::Deserialize;
use tokio::try_join;
use tracing::debug;

use crate::auth::authenticate;
use crate::errors::AppError;
use crate::server::ServerResources;

/// Query parameters for the workout list
#[derive(Debug, Default, Deserialize)]
struct WorkoutsParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    cursor: Option<String>,
    #[serde(default)]
    limit: Option<String>,
}

impl WorkoutsParams {
    fn into_query(self) -> Result<WorkoutQuery, AppError> {
        let limit = self
            .limit
            .map(|raw| {
                raw.trim().parse::<usize>().map_err(|_| {
                    AppError::invalid_input(format!("limit must be a positive integer, got '{raw}'"))
                })
            })
            .transpose()?;

        let sort = self
            .sort
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(WorkoutQuery {
            search: self.q,
            sort,
            pagination: PaginationParams {
                cursor: self
                    .cursor
                    .filter(|cursor| !cursor.is_empty())
                    .map(Cursor::from_string),
                limit,
            },
        })
    }
}

/// Workout history routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::handle_list))
            .route("/api/workouts/:id", get(Self::handle_detail))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<WorkoutsParams>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let query = params.into_query()?;

        let (sessions, exercises) = try_join!(
            resources.backend.fetch_sessions(&auth),
            resources.backend.fetch_exercises(&auth)
        )?;

        let page = list_workouts(&sessions, &exercises, &query)?;
        Ok((StatusCode::OK, Json(page)).into_response())
    }

    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(session_id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;

        let Some(session) = resources.backend.fetch_session(&auth, &session_id).await? else {
            debug!(session_id = %session_id, "Workout not found for caller");
            return Err(AppError::not_found("Workout").with_resource_id(session_id));
        };
        let exercises = resources
            .backend
            .fetch_session_exercises(&auth, &session.id)
            .await?;

        let detail = WorkoutDetail::new(&session, &exercises);
        Ok((StatusCode::OK, Json(detail)).into_response())
    }
}
