// ABOUTME: Profile route handler
// ABOUTME: Merges the authenticated identity with the optional app_user row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use gymr8_core::models::UserProfile;

use crate::auth::authenticate;
use crate::errors::AppError;
use crate::server::ServerResources;

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", get(Self::handle_profile))
            .with_state(resources)
    }

    async fn handle_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let app_user = resources.backend.fetch_profile(&auth).await?;

        let profile = UserProfile::from_parts(&auth.user, app_user);
        Ok((StatusCode::OK, Json(profile)).into_response())
    }
}
