// ABOUTME: Personal records table: the heaviest logged weight per exercise name
// ABOUTME: Groups by display name, keeps the first heaviest entry, returns the top 10
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gymr8_core::constants::stats::{BODYWEIGHT_LABEL, TOP_RECORDS_LIMIT};
use gymr8_core::constants::units::GRAMS_PER_KG_F64;
use gymr8_core::models::PerformedExercise;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::one_rep_max::OneRepMaxFormula;

/// Heaviest lift for one exercise name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Exercise display name
    pub exercise_name: String,
    /// Heaviest weight in grams, zero when only bodyweight was logged
    pub max_weight_grams: u32,
    /// Heaviest weight in kilograms
    pub max_weight_kg: f64,
    /// Display string: "Bodyweight" or "{kg:.1} kg"
    pub max_weight_display: String,
    /// Best single-set rep count of the winning entry
    pub reps_at_max: u32,
    /// When the winning entry was started; `None` for bodyweight-only groups
    pub date_of_max: Option<DateTime<Utc>>,
    /// Estimated one-rep max of the winning entry in kilograms
    pub estimated_one_rep_max_kg: Option<f64>,
}

struct Candidate<'a> {
    name: &'a str,
    max_weight_grams: u32,
    winner: Option<&'a PerformedExercise>,
}

/// Personal records using the adaptive 1RM formula
#[must_use]
pub fn personal_records(exercises: &[PerformedExercise]) -> Vec<PersonalRecord> {
    personal_records_with(exercises, OneRepMaxFormula::Adaptive)
}

/// Personal records with an explicit 1RM formula
///
/// Within a group, a later entry replaces the current best only when strictly
/// heavier. The table is sorted by weight descending (ties keep first-seen
/// group order) and cut to [`TOP_RECORDS_LIMIT`] rows.
#[must_use]
pub fn personal_records_with(
    exercises: &[PerformedExercise],
    formula: OneRepMaxFormula,
) -> Vec<PersonalRecord> {
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut candidates: Vec<Candidate<'_>> = Vec::new();

    for exercise in exercises {
        let name = exercise.display_name();
        let index = *index_by_name.entry(name).or_insert_with(|| {
            candidates.push(Candidate {
                name,
                max_weight_grams: 0,
                winner: None,
            });
            candidates.len() - 1
        });

        let candidate = &mut candidates[index];
        let weight = exercise.weight_or_zero();
        if weight > candidate.max_weight_grams {
            candidate.max_weight_grams = weight;
            candidate.winner = Some(exercise);
        }
    }

    let groups = candidates.len();
    candidates.sort_by_key(|candidate| Reverse(candidate.max_weight_grams));
    candidates.truncate(TOP_RECORDS_LIMIT);

    debug!(
        exercises = exercises.len(),
        groups,
        records = candidates.len(),
        formula = formula.name(),
        "Extracted personal records"
    );

    candidates
        .into_iter()
        .map(|candidate| to_record(&candidate, formula))
        .collect()
}

fn to_record(candidate: &Candidate<'_>, formula: OneRepMaxFormula) -> PersonalRecord {
    let max_weight_kg = grams_to_kg(candidate.max_weight_grams);
    let reps_at_max = candidate.winner.map_or(0, PerformedExercise::max_reps);

    PersonalRecord {
        exercise_name: candidate.name.to_owned(),
        max_weight_grams: candidate.max_weight_grams,
        max_weight_kg,
        max_weight_display: format_weight(candidate.max_weight_grams),
        reps_at_max,
        date_of_max: candidate.winner.map(|winner| winner.started_at),
        estimated_one_rep_max_kg: formula.estimate(max_weight_kg, reps_at_max),
    }
}

fn grams_to_kg(grams: u32) -> f64 {
    f64::from(grams) / GRAMS_PER_KG_F64
}

/// "Bodyweight" for zero, otherwise kilograms with one decimal
#[must_use]
pub fn format_weight(grams: u32) -> String {
    if grams == 0 {
        BODYWEIGHT_LABEL.to_owned()
    } else {
        format!("{:.1} kg", grams_to_kg(grams))
    }
}
