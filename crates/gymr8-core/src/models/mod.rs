// ABOUTME: Workout domain models and the raw row shapes of the hosted data API
// ABOUTME: Re-exports Session, PerformedExercise, TimeRange, and user profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! # Data Models
//!
//! - `Session`: one workout instance
//! - `PerformedExercise`: one exercise entry inside a session
//! - `TimeRange`: dashboard time window
//! - `rows`: raw API shapes, normalized once at the boundary
//! - `UserProfile`: identity plus application profile

mod rows;
mod time_range;
mod user;
mod workout;

pub use rows::{
    normalize_exercises, normalize_sessions, parse_timestamp, BaseExerciseRow, ExerciseLinkRow,
    ExerciseRow, OneOrMany, RowError, ScheduleRow, SessionRefRow, SessionRow,
};
pub use time_range::TimeRange;
pub use user::{AppUserRow, AuthenticatedUser, UserProfile};
pub use workout::{PerformedExercise, Session, SessionRef};
