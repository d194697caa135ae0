// ABOUTME: Overview totals for the stats dashboard header cards
// ABOUTME: Counts sessions and exercises and sums lifted volume in exact gram-reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use gymr8_core::constants::units::{GRAMS_PER_KG, GRAMS_PER_KG_F64};
use gymr8_core::models::{PerformedExercise, Session};
use serde::{Deserialize, Serialize};

/// Headline numbers for a time range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewTotals {
    /// Number of sessions
    pub total_sessions: usize,
    /// Number of exercise entries, bodyweight included
    pub total_exercises: usize,
    /// Exact lifted volume in gram-reps
    pub total_volume_gram_reps: u64,
    /// Lifted volume in kilograms
    pub total_volume_kg: f64,
    /// Lifted volume rounded to the nearest kilogram, for display
    pub total_volume_kg_rounded: u64,
}

impl OverviewTotals {
    /// Compute totals over already filtered records
    #[must_use]
    pub fn compute(sessions: &[Session], exercises: &[PerformedExercise]) -> Self {
        let gram_reps = exercises
            .iter()
            .map(PerformedExercise::volume_gram_reps)
            .fold(0_u64, u64::saturating_add);

        Self {
            total_sessions: sessions.len(),
            total_exercises: exercises.len(),
            total_volume_gram_reps: gram_reps,
            total_volume_kg: gram_reps_to_kg(gram_reps),
            total_volume_kg_rounded: gram_reps_to_rounded_kg(gram_reps),
        }
    }
}

/// Convert gram-reps to kilograms
#[must_use]
pub fn gram_reps_to_kg(gram_reps: u64) -> f64 {
    gram_reps as f64 / GRAMS_PER_KG_F64
}

/// Convert gram-reps to whole kilograms, half rounding up
#[must_use]
pub fn gram_reps_to_rounded_kg(gram_reps: u64) -> u64 {
    gram_reps / GRAMS_PER_KG + u64::from(gram_reps % GRAMS_PER_KG >= GRAMS_PER_KG / 2)
}
