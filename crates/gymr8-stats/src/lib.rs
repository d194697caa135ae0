// ABOUTME: Workout statistics engine for the GymR8 dashboard and workout history
// ABOUTME: Pure functions over fetched sessions and exercises; no I/O, no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

#![deny(unsafe_code)]

//! # GymR8 Stats
//!
//! Turns a user's sessions and performed exercises into dashboard data:
//!
//! - [`time_filter`]: apply a [`TimeRange`](gymr8_core::models::TimeRange) cutoff
//! - [`overview`]: session, exercise, and volume totals
//! - [`buckets`]: contiguous weekly or monthly frequency and volume series
//! - [`records`]: heaviest lift per exercise, top 10
//! - [`one_rep_max`]: estimated one-rep max formulas
//! - [`history`]: workout summaries, history listing, and detail views
//! - [`dashboard`]: everything above composed for one request
//!
//! Every time-dependent function takes `now` explicitly, so identical inputs
//! always produce identical output.

/// Weekly and monthly bucketing of sessions and volume
pub mod buckets;

/// Full dashboard composition
pub mod dashboard;

/// Workout history summaries, listing, and detail
pub mod history;

/// One-rep max estimation formulas
pub mod one_rep_max;

/// Overview totals
pub mod overview;

/// Personal records extraction
pub mod records;

/// Time range filtering
pub mod time_filter;

pub use buckets::{BucketGranularity, FrequencyPoint, VolumePoint};
pub use dashboard::{compute_dashboard, compute_dashboard_with, StatsDashboard};
pub use one_rep_max::OneRepMaxFormula;
pub use overview::OverviewTotals;
pub use records::PersonalRecord;
