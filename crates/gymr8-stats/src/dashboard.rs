// ABOUTME: Composes filtering, totals, series, and records into one dashboard response
// ABOUTME: Pure and deterministic for a given input set and reference instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use chrono::{DateTime, Utc};
use gymr8_core::models::{PerformedExercise, Session, TimeRange};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::buckets::{frequency_series, volume_series, BucketGranularity, FrequencyPoint, VolumePoint};
use crate::one_rep_max::OneRepMaxFormula;
use crate::overview::OverviewTotals;
use crate::records::{personal_records_with, PersonalRecord};
use crate::time_filter::filter_by_range;

/// Everything the stats page renders for one time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDashboard {
    /// Selected range
    pub range: TimeRange,
    /// Chart bucket width implied by the range
    pub granularity: BucketGranularity,
    /// Reference instant the dashboard was computed for
    pub generated_at: DateTime<Utc>,
    /// Headline totals
    pub overview: OverviewTotals,
    /// Sessions per bucket
    pub frequency: Vec<FrequencyPoint>,
    /// Volume per bucket
    pub volume: Vec<VolumePoint>,
    /// Top personal records
    pub personal_records: Vec<PersonalRecord>,
}

/// Compute the dashboard with the adaptive 1RM formula
#[must_use]
pub fn compute_dashboard(
    sessions: &[Session],
    exercises: &[PerformedExercise],
    range: TimeRange,
    now: DateTime<Utc>,
) -> StatsDashboard {
    compute_dashboard_with(sessions, exercises, range, now, OneRepMaxFormula::Adaptive)
}

/// Compute the dashboard with an explicit 1RM formula
#[must_use]
#[instrument(skip_all, fields(range = %range, sessions = sessions.len(), exercises = exercises.len()))]
pub fn compute_dashboard_with(
    sessions: &[Session],
    exercises: &[PerformedExercise],
    range: TimeRange,
    now: DateTime<Utc>,
    formula: OneRepMaxFormula,
) -> StatsDashboard {
    let filtered = filter_by_range(sessions, exercises, range, now);
    let granularity = BucketGranularity::for_range(range);

    let dashboard = StatsDashboard {
        range,
        granularity,
        generated_at: now,
        overview: OverviewTotals::compute(&filtered.sessions, &filtered.exercises),
        frequency: frequency_series(&filtered.sessions, granularity, now),
        volume: volume_series(&filtered.exercises, granularity, now),
        personal_records: personal_records_with(&filtered.exercises, formula),
    };

    debug!(
        buckets = dashboard.frequency.len(),
        records = dashboard.personal_records.len(),
        "Computed stats dashboard"
    );

    dashboard
}
