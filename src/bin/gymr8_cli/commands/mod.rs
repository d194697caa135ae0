// ABOUTME: Command modules for gymr8-cli
// ABOUTME: Dashboard stats, personal records, and workout history commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

pub mod records;
pub mod stats;
pub mod workouts;
