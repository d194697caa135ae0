// ABOUTME: Workout domain models: Session, PerformedExercise, and the session back-reference
// ABOUTME: Normalized, read-only shapes consumed by the stats engine and the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::stats::{DEFAULT_SESSION_NAME, UNKNOWN_EXERCISE_NAME};
use crate::constants::units::GRAMS_PER_KG_F64;

/// One workout instance, completed or still in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier
    pub id: String,
    /// When the workout started
    pub started_at: DateTime<Utc>,
    /// When the workout finished, if it has
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Name of the schedule this session followed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,
}

impl Session {
    /// Schedule name, or the generic session name when absent
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.schedule_name.as_deref()).unwrap_or(DEFAULT_SESSION_NAME)
    }

    /// Elapsed time between start and completion
    ///
    /// `None` while the session is in progress or when completion precedes start.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        let completed_at = self.completed_at?;
        let duration = completed_at - self.started_at;
        (duration >= Duration::zero()).then_some(duration)
    }
}

/// Back-reference from an exercise to its session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRef {
    /// Session identifier
    pub id: String,
    /// Session start, used as the exercise's effective date
    pub started_at: DateTime<Utc>,
}

/// One exercise entry performed within a session
///
/// A single weight applies across all sets; `reps` holds one count per set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformedExercise {
    /// Exercise entry identifier
    pub id: String,
    /// Free-text name typed when logging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name from the linked exercise catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    /// Description from the linked exercise catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_description: Option<String>,
    /// Reps per set
    pub reps: Vec<u32>,
    /// Number of sets
    pub sets: u32,
    /// Weight in grams; `None` for bodyweight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_grams: Option<u32>,
    /// When this exercise was started
    pub started_at: DateTime<Utc>,
    /// Free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Owning session, when the join was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionRef>,
}

impl PerformedExercise {
    /// Catalog name, else free-text name, else "Unknown Exercise"
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.catalog_name.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .unwrap_or(UNKNOWN_EXERCISE_NAME)
    }

    /// Date used for time-range filtering and bucketing
    ///
    /// The owning session's start when known, otherwise the exercise's own start.
    #[must_use]
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.session
            .as_ref()
            .map_or(self.started_at, |session| session.started_at)
    }

    /// Weight in grams, zero for bodyweight
    #[must_use]
    pub fn weight_or_zero(&self) -> u32 {
        self.weight_grams.unwrap_or(0)
    }

    /// Sum of reps across all sets
    #[must_use]
    pub fn total_reps(&self) -> u64 {
        self.reps.iter().map(|&reps| u64::from(reps)).sum()
    }

    /// Highest rep count of any single set, zero when no sets were logged
    #[must_use]
    pub fn max_reps(&self) -> u32 {
        self.reps.iter().copied().max().unwrap_or(0)
    }

    /// Exact volume in gram-reps (`weight_g × Σreps`)
    #[must_use]
    pub fn volume_gram_reps(&self) -> u64 {
        u64::from(self.weight_or_zero()) * self.total_reps()
    }

    /// Volume in kilograms
    #[must_use]
    pub fn volume_kg(&self) -> f64 {
        self.volume_gram_reps() as f64 / GRAMS_PER_KG_F64
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
