// ABOUTME: Workout history: per-session summaries, searchable paginated listing, and detail views
// ABOUTME: Shapes sessions and their exercises for the workout list and workout detail pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! Workout history views
//!
//! Listing sorts by `(started_at, id)` so pagination stays stable when two
//! sessions share a start time. Cursors are minted by
//! [`Cursor::new`](gymr8_core::pagination::Cursor::new) and are only valid
//! for the sort order that produced them.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use gymr8_core::constants::units::{MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use gymr8_core::errors::{AppError, AppResult};
use gymr8_core::models::{PerformedExercise, Session};
use gymr8_core::pagination::{Cursor, CursorPage, PaginationParams, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::overview::gram_reps_to_kg;
use crate::records::format_weight;

/// Duration label for a session without a completion time
pub const IN_PROGRESS_LABEL: &str = "In progress";

/// One row of the workout history list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Session identifier
    pub id: String,
    /// Schedule name or "Workout Session"
    pub name: String,
    /// Session start
    pub started_at: DateTime<Utc>,
    /// Session completion, if finished
    pub completed_at: Option<DateTime<Utc>>,
    /// Session note
    pub note: Option<String>,
    /// Elapsed seconds, `None` while in progress
    pub duration_seconds: Option<i64>,
    /// "1h 5m", "45m", "Less than a minute", or "In progress"
    pub duration_display: String,
    /// Number of exercise entries
    pub exercise_count: usize,
    /// Sum of sets across exercises
    pub total_sets: u64,
    /// Sum of reps across exercises
    pub total_reps: u64,
    /// Lifted volume in kilograms
    pub volume_kg: f64,
}

impl WorkoutSummary {
    /// Summarize `session` using the exercises that belong to it
    #[must_use]
    pub fn from_session<'a>(
        session: &Session,
        exercises: impl IntoIterator<Item = &'a PerformedExercise>,
    ) -> Self {
        let mut exercise_count = 0;
        let mut total_sets = 0_u64;
        let mut total_reps = 0_u64;
        let mut gram_reps = 0_u64;

        for exercise in exercises {
            exercise_count += 1;
            total_sets += u64::from(exercise.sets);
            total_reps += exercise.total_reps();
            gram_reps = gram_reps.saturating_add(exercise.volume_gram_reps());
        }

        let duration = session.duration();

        Self {
            id: session.id.clone(),
            name: session.display_name().to_owned(),
            started_at: session.started_at,
            completed_at: session.completed_at,
            note: session.note.clone(),
            duration_seconds: duration.map(|d| d.num_seconds()),
            duration_display: duration
                .map_or_else(|| IN_PROGRESS_LABEL.to_owned(), format_duration),
            exercise_count,
            total_sets,
            total_reps,
            volume_kg: gram_reps_to_kg(gram_reps),
        }
    }
}

/// Hours and minutes of a duration, dropping seconds
///
/// "1h 5m" above an hour, "45m" below, "Less than a minute" under 60 seconds.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_seconds().max(0) / SECONDS_PER_MINUTE;
    let hours = minutes / MINUTES_PER_HOUR;
    let minutes = minutes % MINUTES_PER_HOUR;

    match (hours, minutes) {
        (0, 0) => "Less than a minute".to_owned(),
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Filters and paging for the workout history list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutQuery {
    /// Case-insensitive substring matched against schedule name or note
    pub search: Option<String>,
    /// Chronological order
    pub sort: SortOrder,
    /// Cursor and page size
    pub pagination: PaginationParams,
}

impl WorkoutQuery {
    fn matches(&self, session: &Session) -> bool {
        let Some(needle) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
        else {
            return true;
        };
        let needle = needle.to_lowercase();

        [session.schedule_name.as_deref(), session.note.as_deref()]
            .into_iter()
            .flatten()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }
}

fn compare_position(sort: SortOrder, a: (&DateTime<Utc>, &str), b: (&DateTime<Utc>, &str)) -> Ordering {
    match sort {
        SortOrder::Asc => a.cmp(&b),
        SortOrder::Desc => b.cmp(&a),
    }
}

/// List one page of workout summaries
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` when the cursor is malformed or was
/// issued for the other sort order.
pub fn list_workouts(
    sessions: &[Session],
    exercises: &[PerformedExercise],
    query: &WorkoutQuery,
) -> AppResult<CursorPage<WorkoutSummary>> {
    let sort = query.sort;
    let limit = query.pagination.effective_limit();

    let after = match &query.pagination.cursor {
        Some(cursor) => Some(
            cursor
                .decode(sort)
                .ok_or_else(|| AppError::invalid_format("Invalid pagination cursor"))?,
        ),
        None => None,
    };

    let mut matching: Vec<&Session> = sessions.iter().filter(|s| query.matches(s)).collect();
    matching.sort_by(|a, b| {
        compare_position(sort, (&a.started_at, a.id.as_str()), (&b.started_at, b.id.as_str()))
    });

    if let Some((after_ts, after_id)) = &after {
        matching.retain(|s| {
            compare_position(
                sort,
                (&s.started_at, s.id.as_str()),
                (after_ts, after_id.as_str()),
            ) == Ordering::Greater
        });
    }

    let has_more = matching.len() > limit;
    matching.truncate(limit);

    let by_session = group_by_session(exercises);
    let items: Vec<WorkoutSummary> = matching
        .iter()
        .map(|session| {
            let owned = by_session.get(session.id.as_str()).map_or(&[][..], Vec::as_slice);
            WorkoutSummary::from_session(session, owned.iter().copied())
        })
        .collect();

    let next_cursor = if has_more {
        matching
            .last()
            .map(|last| Cursor::new(sort, last.started_at, &last.id))
    } else {
        None
    };

    debug!(
        sessions = sessions.len(),
        returned = items.len(),
        has_more,
        sort = sort.as_str(),
        "Listed workouts"
    );

    Ok(CursorPage::new(items, next_cursor, has_more))
}

fn group_by_session(exercises: &[PerformedExercise]) -> HashMap<&str, Vec<&PerformedExercise>> {
    let mut grouped: HashMap<&str, Vec<&PerformedExercise>> = HashMap::new();
    for exercise in exercises {
        if let Some(session) = &exercise.session {
            grouped.entry(session.id.as_str()).or_default().push(exercise);
        }
    }
    grouped
}

/// One exercise on the workout detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDetail {
    /// Exercise entry identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog description
    pub description: Option<String>,
    /// Number of sets
    pub sets: u32,
    /// Reps per set
    pub reps: Vec<u32>,
    /// Weight in grams, `None` for bodyweight
    pub weight_grams: Option<u32>,
    /// "Bodyweight" or "{kg:.1} kg"
    pub weight_display: String,
    /// Lifted volume in kilograms
    pub volume_kg: f64,
    /// Exercise note
    pub note: Option<String>,
    /// When the exercise was started
    pub started_at: DateTime<Utc>,
}

impl From<&PerformedExercise> for ExerciseDetail {
    fn from(exercise: &PerformedExercise) -> Self {
        Self {
            id: exercise.id.clone(),
            name: exercise.display_name().to_owned(),
            description: exercise.catalog_description.clone(),
            sets: exercise.sets,
            reps: exercise.reps.clone(),
            weight_grams: exercise.weight_grams,
            weight_display: format_weight(exercise.weight_or_zero()),
            volume_kg: exercise.volume_kg(),
            note: exercise.note.clone(),
            started_at: exercise.started_at,
        }
    }
}

/// A session with its exercises in performed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDetail {
    /// Session summary
    #[serde(flatten)]
    pub summary: WorkoutSummary,
    /// Exercises, oldest first
    pub exercises: Vec<ExerciseDetail>,
}

impl WorkoutDetail {
    /// Build the detail view from a session and its exercises
    #[must_use]
    pub fn new(session: &Session, exercises: &[PerformedExercise]) -> Self {
        let mut ordered: Vec<&PerformedExercise> = exercises.iter().collect();
        ordered.sort_by_key(|exercise| exercise.started_at);

        Self {
            summary: WorkoutSummary::from_session(session, ordered.iter().copied()),
            exercises: ordered.into_iter().map(ExerciseDetail::from).collect(),
        }
    }
}
