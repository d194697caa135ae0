// ABOUTME: Benchmark test fixtures for generating realistic training logs
// ABOUTME: Provides deterministic session and exercise generation for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! Benchmark test fixtures for generating realistic training logs.
//!
//! Data is anchored to a fixed instant so every run aggregates the same input.

use chrono::{DateTime, Duration, TimeZone, Utc};
use gymr8_core::models::{PerformedExercise, Session, SessionRef};

/// Exercise names cycled through when generating a log
const EXERCISE_NAMES: [&str; 12] = [
    "Back Squat",
    "Bench Press",
    "Deadlift",
    "Overhead Press",
    "Barbell Row",
    "Pull Up",
    "Dip",
    "Front Squat",
    "Romanian Deadlift",
    "Incline Bench Press",
    "Lunge",
    "Hip Thrust",
];

/// Exercises logged per generated session
const EXERCISES_PER_SESSION: usize = 5;

/// Predefined log sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LogSize {
    /// A few months of training
    Small,
    /// A couple of years, three sessions a week
    Medium,
    /// A decade of training
    Large,
}

impl LogSize {
    /// Number of sessions in this log
    #[must_use]
    pub const fn sessions(self) -> usize {
        match self {
            Self::Small => 30,
            Self::Medium => 300,
            Self::Large => 1500,
        }
    }
}

/// Instant used as "now" for every benchmark
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Generate a training log, oldest session first
///
/// Sessions are spaced two to three days apart going back from [`bench_now`];
/// every seventh exercise is bodyweight.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn generate_training_log(size: LogSize) -> (Vec<Session>, Vec<PerformedExercise>) {
    let count = size.sessions();
    let now = bench_now();

    let mut sessions = Vec::with_capacity(count);
    let mut exercises = Vec::with_capacity(count * EXERCISES_PER_SESSION);

    for index in (0..count).rev() {
        let days_ago = (index * 7 / 3) as i64;
        let started_at = now - Duration::days(days_ago) - Duration::hours((index % 5) as i64);
        let session = Session {
            id: format!("bench_session_{index}"),
            started_at,
            completed_at: Some(started_at + Duration::minutes(45 + (index % 40) as i64)),
            note: (index % 4 == 0).then(|| format!("note {index}")),
            schedule_name: Some(format!("Program Day {}", index % 3 + 1)),
        };

        for slot in 0..EXERCISES_PER_SESSION {
            let seq = index * EXERCISES_PER_SESSION + slot;
            let reps = 3 + (seq % 10) as u32;
            exercises.push(PerformedExercise {
                id: format!("bench_exercise_{seq}"),
                name: None,
                catalog_name: Some(EXERCISE_NAMES[seq % EXERCISE_NAMES.len()].to_owned()),
                catalog_description: None,
                reps: vec![reps; 3],
                sets: 3,
                weight_grams: (seq % 7 != 0).then_some(40_000 + ((seq * 2_500) % 120_000) as u32),
                started_at: started_at + Duration::minutes((slot * 8) as i64),
                note: None,
                session: Some(SessionRef {
                    id: session.id.clone(),
                    started_at,
                }),
            });
        }

        sessions.push(session);
    }

    (sessions, exercises)
}
