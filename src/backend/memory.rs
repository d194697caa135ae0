// ABOUTME: In-memory WorkoutBackend for tests, benches, and offline demos
// ABOUTME: Maps bearer tokens to users and holds each user's sessions, exercises, and profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::collections::HashMap;

use async_trait::async_trait;
use gymr8_core::models::{AppUserRow, AuthenticatedUser, PerformedExercise, Session};
use uuid::Uuid;

use super::WorkoutBackend;
use crate::auth::AuthContext;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
struct UserData {
    sessions: Vec<Session>,
    exercises: Vec<PerformedExercise>,
    profile: Option<AppUserRow>,
}

/// Backend holding fixed data in memory
///
/// Built once with the `with_*` methods, then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    tokens: HashMap<String, AuthenticatedUser>,
    users: HashMap<Uuid, UserData>,
}

impl InMemoryBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as the credentials of `user`
    #[must_use]
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.entry(user.id).or_default();
        self.tokens.insert(token.into(), user);
        self
    }

    /// Add sessions owned by `user_id`
    #[must_use]
    pub fn with_sessions(mut self, user_id: Uuid, sessions: Vec<Session>) -> Self {
        let data = self.users.entry(user_id).or_default();
        data.sessions.extend(sessions);
        data.sessions
            .sort_by(|a, b| a.started_at.cmp(&b.started_at).then_with(|| a.id.cmp(&b.id)));
        self
    }

    /// Add exercises whose sessions are owned by `user_id`
    #[must_use]
    pub fn with_exercises(mut self, user_id: Uuid, exercises: Vec<PerformedExercise>) -> Self {
        let data = self.users.entry(user_id).or_default();
        data.exercises.extend(exercises);
        data.exercises
            .sort_by(|a, b| a.started_at.cmp(&b.started_at).then_with(|| a.id.cmp(&b.id)));
        self
    }

    /// Set the profile row of `user_id`
    #[must_use]
    pub fn with_profile(mut self, user_id: Uuid, profile: AppUserRow) -> Self {
        self.users.entry(user_id).or_default().profile = Some(profile);
        self
    }

    fn data(&self, ctx: &AuthContext) -> Option<&UserData> {
        self.users.get(&ctx.user.id)
    }
}

#[async_trait]
impl WorkoutBackend for InMemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::auth_invalid("Invalid or expired token"))
    }

    async fn fetch_sessions(&self, ctx: &AuthContext) -> AppResult<Vec<Session>> {
        Ok(self
            .data(ctx)
            .map(|data| data.sessions.clone())
            .unwrap_or_default())
    }

    async fn fetch_exercises(&self, ctx: &AuthContext) -> AppResult<Vec<PerformedExercise>> {
        Ok(self
            .data(ctx)
            .map(|data| data.exercises.clone())
            .unwrap_or_default())
    }

    async fn fetch_session(
        &self,
        ctx: &AuthContext,
        session_id: &str,
    ) -> AppResult<Option<Session>> {
        Ok(self.data(ctx).and_then(|data| {
            data.sessions
                .iter()
                .find(|session| session.id == session_id)
                .cloned()
        }))
    }

    async fn fetch_session_exercises(
        &self,
        ctx: &AuthContext,
        session_id: &str,
    ) -> AppResult<Vec<PerformedExercise>> {
        Ok(self
            .data(ctx)
            .map(|data| {
                data.exercises
                    .iter()
                    .filter(|exercise| {
                        exercise
                            .session
                            .as_ref()
                            .is_some_and(|session| session.id == session_id)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn fetch_profile(&self, ctx: &AuthContext) -> AppResult<Option<AppUserRow>> {
        Ok(self.data(ctx).and_then(|data| data.profile.clone()))
    }
}
