// ABOUTME: Data access abstraction over the hosted workout API
// ABOUTME: WorkoutBackend trait with REST and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! # Workout Backends
//!
//! Every read the HTTP layer performs goes through [`WorkoutBackend`]. The
//! production implementation talks to the hosted REST API; the in-memory one
//! backs tests and local demos. Both return already-normalized
//! [`Session`] and [`PerformedExercise`] values scoped to the caller.

/// Shared outbound HTTP client
pub mod http_client;
/// In-memory backend for tests and demos
pub mod memory;
/// Hosted REST API backend
pub mod rest;

use async_trait::async_trait;
use gymr8_core::models::{AppUserRow, AuthenticatedUser, PerformedExercise, Session};

use crate::auth::AuthContext;
use crate::errors::AppResult;

pub use memory::InMemoryBackend;
pub use rest::RestBackend;

/// Read-only access to a user's workout data
///
/// Sessions and exercises are returned sorted by start time, oldest first.
#[async_trait]
pub trait WorkoutBackend: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Resolve a bearer token to a user
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` when the token is rejected
    async fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser>;

    /// All sessions owned by the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails
    async fn fetch_sessions(&self, ctx: &AuthContext) -> AppResult<Vec<Session>>;

    /// All exercises whose session is owned by the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails
    async fn fetch_exercises(&self, ctx: &AuthContext) -> AppResult<Vec<PerformedExercise>>;

    /// One session, `None` if it does not exist or belongs to someone else
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails
    async fn fetch_session(&self, ctx: &AuthContext, session_id: &str)
        -> AppResult<Option<Session>>;

    /// Exercises of one session
    ///
    /// Callers must check ownership with [`WorkoutBackend::fetch_session`] first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails
    async fn fetch_session_exercises(
        &self,
        ctx: &AuthContext,
        session_id: &str,
    ) -> AppResult<Vec<PerformedExercise>>;

    /// Application profile row, `None` when the user never filled one in
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails
    async fn fetch_profile(&self, ctx: &AuthContext) -> AppResult<Option<AppUserRow>>;
}
