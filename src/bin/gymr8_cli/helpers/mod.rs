// ABOUTME: Helper modules for gymr8-cli
// ABOUTME: Export file loading and terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

pub mod display;
pub mod input;
