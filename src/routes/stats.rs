// ABOUTME: Stats dashboard route handlers
// ABOUTME: Fetches the caller's workout data and returns overview, series, and personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! Stats dashboard routes
//!
//! `GET /api/stats?range=ytd|1y|3y|5y|all&formula=adaptive|epley|brzycki|mayhew`
//! returns one [`gymr8_stats::StatsDashboard`]. Aggregation runs inline on the request
//! task; `now` is read once per request so every part of the response agrees.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use gymr8_core::models::TimeRange;
use gymr8_stats::{compute_dashboard_with, OneRepMaxFormula};
use serde::{Deserialize, Serialize};
use tokio::try_join;
use tracing::info;

use crate::auth::authenticate;
use crate::errors::AppError;
use crate::server::ServerResources;

/// Query parameters for the dashboard
#[derive(Debug, Default, Deserialize)]
struct StatsQuery {
    #[serde(default)]
    range: Option<String>,
    #[serde(default)]
    formula: Option<String>,
}

/// One entry of the range selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRangeOption {
    /// Query-string value
    pub value: TimeRange,
    /// Display label
    pub label: String,
    /// Whether this is the default selection
    pub default: bool,
}

/// Stats routes
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all stats routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stats", get(Self::handle_stats))
            .route("/api/stats/time-ranges", get(Self::handle_time_ranges))
            .with_state(resources)
    }

    /// Available time ranges in selector order
    #[must_use]
    pub fn time_range_options() -> Vec<TimeRangeOption> {
        TimeRange::ALL_RANGES
            .iter()
            .map(|&range| TimeRangeOption {
                value: range,
                label: range.label().to_owned(),
                default: range == TimeRange::default(),
            })
            .collect()
    }

    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<StatsQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;

        let range = params
            .range
            .as_deref()
            .map_or(Ok(TimeRange::default()), str::parse)?;
        let formula = params
            .formula
            .as_deref()
            .map_or(Ok(OneRepMaxFormula::default()), str::parse)?;

        let (sessions, exercises) = try_join!(
            resources.backend.fetch_sessions(&auth),
            resources.backend.fetch_exercises(&auth)
        )?;

        let dashboard = compute_dashboard_with(&sessions, &exercises, range, Utc::now(), formula);

        info!(
            user_id = %auth.user.id,
            range = %range,
            sessions = dashboard.overview.total_sessions,
            "Served stats dashboard"
        );

        Ok((StatusCode::OK, Json(dashboard)).into_response())
    }

    async fn handle_time_ranges() -> Json<Vec<TimeRangeOption>> {
        Json(Self::time_range_options())
    }
}
