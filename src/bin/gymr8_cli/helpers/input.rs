// ABOUTME: Input helpers for gymr8-cli
// ABOUTME: Reads raw row exports, normalizes them, and resolves the evaluation instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use gymr8_core::models::{
    normalize_exercises, normalize_sessions, parse_timestamp, ExerciseRow, PerformedExercise,
    Session, SessionRow,
};
use serde::de::DeserializeOwned;
use tracing::debug;

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rows: Vec<T> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of rows", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "Loaded export");
    Ok(rows)
}

/// Load and normalize a `performed_session` export, oldest first
pub fn load_sessions(path: &Path) -> Result<Vec<Session>> {
    let mut sessions = normalize_sessions(read_rows::<SessionRow>(path)?);
    sessions.sort_by(|a, b| a.started_at.cmp(&b.started_at).then_with(|| a.id.cmp(&b.id)));
    Ok(sessions)
}

/// Load and normalize a `performed_exercise` export, oldest first
pub fn load_exercises(path: &Path) -> Result<Vec<PerformedExercise>> {
    let mut exercises = normalize_exercises(read_rows::<ExerciseRow>(path)?);
    exercises.sort_by(|a, b| a.started_at.cmp(&b.started_at).then_with(|| a.id.cmp(&b.id)));
    Ok(exercises)
}

/// Parse `--now`, falling back to the current time
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    now.map_or_else(
        || Ok(Utc::now()),
        |raw| {
            parse_timestamp(raw)
                .ok_or_else(|| anyhow!("--now must be an RFC 3339 timestamp, got '{raw}'"))
        },
    )
}
