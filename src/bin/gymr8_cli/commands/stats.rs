// ABOUTME: Dashboard command for gymr8-cli
// ABOUTME: Loads both exports and prints overview, series, and records for one time range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::path::Path;

use anyhow::Result;
use gymr8_core::models::TimeRange;
use gymr8_stats::{compute_dashboard_with, OneRepMaxFormula};
use tracing::info;

use crate::helpers::display::{print_dashboard, print_json};
use crate::helpers::input::{load_exercises, load_sessions, resolve_now};
use crate::OutputFormat;

/// Compute and print the dashboard
pub fn run(
    sessions_path: &Path,
    exercises_path: &Path,
    range: &str,
    now: Option<&str>,
    formula: &str,
    format: OutputFormat,
) -> Result<()> {
    let range: TimeRange = range.parse()?;
    let formula: OneRepMaxFormula = formula.parse()?;
    let now = resolve_now(now)?;

    let sessions = load_sessions(sessions_path)?;
    let exercises = load_exercises(exercises_path)?;
    info!(
        sessions = sessions.len(),
        exercises = exercises.len(),
        range = %range,
        "Computing dashboard"
    );

    let dashboard = compute_dashboard_with(&sessions, &exercises, range, now, formula);

    match format {
        OutputFormat::Json => print_json(&dashboard),
        OutputFormat::Pretty => {
            print_dashboard(&dashboard);
            Ok(())
        }
    }
}
