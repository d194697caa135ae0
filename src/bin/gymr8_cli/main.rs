// ABOUTME: GymR8 CLI - offline stats from exported workout data
// ABOUTME: Computes the dashboard, personal records, and workout history from JSON row exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors
//!
//! Usage:
//! ```bash
//! # Full dashboard for the current year
//! gymr8-cli stats --sessions sessions.json --exercises exercises.json --range ytd
//!
//! # Personal records as JSON, evaluated at a fixed instant
//! gymr8-cli records --exercises exercises.json --now 2024-06-30T00:00:00Z --format json
//!
//! # Oldest workouts mentioning "legs"
//! gymr8-cli workouts --sessions sessions.json --exercises exercises.json --search legs --sort asc
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gymr8_server::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gymr8-cli",
    about = "GymR8 offline statistics",
    long_about = "Computes GymR8 dashboard statistics from performed_session and performed_exercise JSON exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Pretty,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the full stats dashboard
    Stats {
        /// Session rows export (JSON array)
        #[arg(long)]
        sessions: PathBuf,

        /// Exercise rows export (JSON array)
        #[arg(long)]
        exercises: PathBuf,

        /// Time range: ytd, 1y, 3y, 5y, all
        #[arg(long, default_value = "all")]
        range: String,

        /// Evaluation instant (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// One-rep max formula: adaptive, epley, brzycki, mayhew
        #[arg(long, default_value = "adaptive")]
        formula: String,
    },

    /// Show the personal records table
    Records {
        /// Exercise rows export (JSON array)
        #[arg(long)]
        exercises: PathBuf,

        /// Time range: ytd, 1y, 3y, 5y, all
        #[arg(long, default_value = "all")]
        range: String,

        /// Evaluation instant (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// One-rep max formula: adaptive, epley, brzycki, mayhew
        #[arg(long, default_value = "adaptive")]
        formula: String,
    },

    /// List workout history
    Workouts {
        /// Session rows export (JSON array)
        #[arg(long)]
        sessions: PathBuf,

        /// Exercise rows export (JSON array)
        #[arg(long)]
        exercises: PathBuf,

        /// Case-insensitive search on schedule name or note
        #[arg(long)]
        search: Option<String>,

        /// Sort order: asc or desc
        #[arg(long, default_value = "desc")]
        sort: String,

        /// Page cursor from a previous listing
        #[arg(long)]
        cursor: Option<String>,

        /// Page size
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("GymR8 CLI started");

    match cli.command {
        Command::Stats {
            sessions,
            exercises,
            range,
            now,
            formula,
        } => commands::stats::run(
            &sessions,
            &exercises,
            &range,
            now.as_deref(),
            &formula,
            cli.format,
        ),
        Command::Records {
            exercises,
            range,
            now,
            formula,
        } => commands::records::run(&exercises, &range, now.as_deref(), &formula, cli.format),
        Command::Workouts {
            sessions,
            exercises,
            search,
            sort,
            cursor,
            limit,
        } => commands::workouts::run(
            &sessions,
            &exercises,
            search,
            &sort,
            cursor,
            limit,
            cli.format,
        ),
    }
}
