// ABOUTME: HTTP route modules for the GymR8 API
// ABOUTME: Health checks, stats dashboard, workout history, and profile endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! Route modules
//!
//! Each module exposes a `XRoutes::routes(resources)` constructor returning an
//! axum `Router` with state already applied, merged by [`crate::server::build_router`].

/// Health and readiness probes
pub mod health;
/// Profile page data
pub mod profile;
/// Stats dashboard
pub mod stats;
/// Workout history and detail
pub mod workouts;

pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use stats::StatsRoutes;
pub use workouts::WorkoutRoutes;
