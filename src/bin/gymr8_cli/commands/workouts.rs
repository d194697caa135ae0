// ABOUTME: Workout history command for gymr8-cli
// ABOUTME: Searches, sorts, and pages through sessions with per-session summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::path::Path;

use anyhow::Result;
use gymr8_core::pagination::{Cursor, PaginationParams, SortOrder};
use gymr8_stats::history::{list_workouts, WorkoutQuery};

use crate::helpers::display::{print_json, print_workouts};
use crate::helpers::input::{load_exercises, load_sessions};
use crate::OutputFormat;

/// List one page of workouts
pub fn run(
    sessions_path: &Path,
    exercises_path: &Path,
    search: Option<String>,
    sort: &str,
    cursor: Option<String>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let sessions = load_sessions(sessions_path)?;
    let exercises = load_exercises(exercises_path)?;

    let query = WorkoutQuery {
        search,
        sort: sort.parse::<SortOrder>()?,
        pagination: PaginationParams {
            cursor: cursor.map(Cursor::from_string),
            limit,
        },
    };
    let page = list_workouts(&sessions, &exercises, &query)?;

    match format {
        OutputFormat::Json => print_json(&page),
        OutputFormat::Pretty => {
            print_workouts(&page);
            Ok(())
        }
    }
}
