// ABOUTME: Core types and constants for the GymR8 workout statistics service
// ABOUTME: Foundation crate with error handling, workout models, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

#![deny(unsafe_code)]

//! # GymR8 Core
//!
//! Foundation crate providing shared types and constants for the GymR8
//! workout statistics service. Both the stats engine and the HTTP server
//! depend on it, so it is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Workout sessions, performed exercises, time ranges, and the
//!   raw row shapes returned by the hosted data API
//! - **pagination**: Cursor-based pagination for workout history

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Workout domain models and boundary normalization
pub mod models;

/// Cursor-based pagination for efficient data traversal
pub mod pagination;
