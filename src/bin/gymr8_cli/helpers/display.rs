// ABOUTME: Output formatting helpers for gymr8-cli
// ABOUTME: Renders dashboards, record tables, and workout pages as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use anyhow::Result;
use gymr8_core::pagination::CursorPage;
use gymr8_stats::history::WorkoutSummary;
use gymr8_stats::{PersonalRecord, StatsDashboard};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the full dashboard
pub fn print_dashboard(dashboard: &StatsDashboard) {
    let overview = &dashboard.overview;
    println!("\nGymR8 Stats ({})", dashboard.range.label());
    println!("{}", "=".repeat(60));
    println!("   Workouts:   {}", overview.total_sessions);
    println!("   Exercises:  {}", overview.total_exercises);
    println!("   Volume:     {} kg", overview.total_volume_kg_rounded);

    println!("\nWorkout Frequency");
    println!("{}", "-".repeat(60));
    for point in &dashboard.frequency {
        println!("   {:<12} {:>4}  {}", point.label, point.sessions, bar(point.sessions));
    }

    println!("\nVolume (kg)");
    println!("{}", "-".repeat(60));
    for point in &dashboard.volume {
        println!("   {:<12} {:>10}", point.label, point.volume_kg_rounded);
    }

    println!();
    print_records(&dashboard.personal_records);
}

/// Display the personal records table
pub fn print_records(records: &[PersonalRecord]) {
    println!("Personal Records");
    println!("{}", "-".repeat(60));
    if records.is_empty() {
        println!("   No exercises logged in this range");
        return;
    }

    println!("   {:<24} {:>12} {:>5} {:>12}  Est. 1RM", "Exercise", "Max", "Reps", "Date");
    for record in records {
        let date = record
            .date_of_max
            .map_or_else(|| "-".to_owned(), |date| date.format("%Y-%m-%d").to_string());
        let one_rep_max = record
            .estimated_one_rep_max_kg
            .map_or_else(|| "-".to_owned(), |kg| format!("{kg:.1} kg"));
        println!(
            "   {:<24} {:>12} {:>5} {:>12}  {}",
            record.exercise_name, record.max_weight_display, record.reps_at_max, date, one_rep_max
        );
    }
}

/// Display one page of workout history
pub fn print_workouts(page: &CursorPage<WorkoutSummary>) {
    println!("\nWorkout History ({} shown)", page.count);
    println!("{}", "=".repeat(60));
    for workout in &page.items {
        println!(
            "   {}  {:<24} {:>12}  {} exercises, {:.1} kg",
            workout.started_at.format("%Y-%m-%d %H:%M"),
            workout.name,
            workout.duration_display,
            workout.exercise_count,
            workout.volume_kg
        );
    }

    if let Some(cursor) = &page.next_cursor {
        println!("\nMore workouts available. Continue with: --cursor {cursor}");
    }
}

fn bar(count: usize) -> String {
    "#".repeat(count.min(40))
}
