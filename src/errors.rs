// ABOUTME: Error handling re-exports for the GymR8 server
// ABOUTME: AppError, ErrorCode, and AppResult live in gymr8-core and render as JSON responses here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! Error types for the server crate
//!
//! The core crate is built with the `http-response` feature, so every
//! [`AppError`] returned from a handler becomes a
//! `{ "error": { "code", "message", "resource_id"? } }` body with the mapped status.

pub use gymr8_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
