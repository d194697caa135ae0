// ABOUTME: Applies a TimeRange cutoff to sessions and performed exercises
// ABOUTME: Exercises are dated by their owning session's start when the join is present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use chrono::{DateTime, Utc};
use gymr8_core::models::{PerformedExercise, Session, TimeRange};
use tracing::debug;

/// Sessions and exercises that survived the time range cutoff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredData {
    /// Sessions with `started_at >= cutoff`, input order preserved
    pub sessions: Vec<Session>,
    /// Exercises with effective date `>= cutoff`, input order preserved
    pub exercises: Vec<PerformedExercise>,
}

/// Keep only the records inside `range` as of `now`
///
/// [`TimeRange::All`] returns clones of both inputs unchanged.
#[must_use]
pub fn filter_by_range(
    sessions: &[Session],
    exercises: &[PerformedExercise],
    range: TimeRange,
    now: DateTime<Utc>,
) -> FilteredData {
    let filtered = FilteredData {
        sessions: filter_sessions(sessions, range, now),
        exercises: filter_exercises(exercises, range, now),
    };

    debug!(
        range = %range,
        sessions_in = sessions.len(),
        sessions_out = filtered.sessions.len(),
        exercises_in = exercises.len(),
        exercises_out = filtered.exercises.len(),
        "Applied time range filter"
    );

    filtered
}

/// Sessions started inside `range`
#[must_use]
pub fn filter_sessions(sessions: &[Session], range: TimeRange, now: DateTime<Utc>) -> Vec<Session> {
    sessions
        .iter()
        .filter(|session| range.contains(session.started_at, now))
        .cloned()
        .collect()
}

/// Exercises whose effective date falls inside `range`
#[must_use]
pub fn filter_exercises(
    exercises: &[PerformedExercise],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<PerformedExercise> {
    exercises
        .iter()
        .filter(|exercise| range.contains(exercise.effective_date(), now))
        .cloned()
        .collect()
}
