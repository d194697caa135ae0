// ABOUTME: Personal records command for gymr8-cli
// ABOUTME: Prints the heaviest lift per exercise within a time range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::path::Path;

use anyhow::Result;
use gymr8_core::models::TimeRange;
use gymr8_stats::records::personal_records_with;
use gymr8_stats::time_filter::filter_exercises;
use gymr8_stats::OneRepMaxFormula;

use crate::helpers::display::{print_json, print_records};
use crate::helpers::input::{load_exercises, resolve_now};
use crate::OutputFormat;

/// Compute and print personal records
pub fn run(
    exercises_path: &Path,
    range: &str,
    now: Option<&str>,
    formula: &str,
    format: OutputFormat,
) -> Result<()> {
    let range: TimeRange = range.parse()?;
    let formula: OneRepMaxFormula = formula.parse()?;
    let now = resolve_now(now)?;

    let exercises = filter_exercises(&load_exercises(exercises_path)?, range, now);
    let records = personal_records_with(&exercises, formula);

    match format {
        OutputFormat::Json => print_json(&records),
        OutputFormat::Pretty => {
            print_records(&records);
            Ok(())
        }
    }
}
