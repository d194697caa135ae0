// ABOUTME: Main library entry point for the GymR8 stats service
// ABOUTME: Wires configuration, logging, the hosted backend client, and the axum HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

#![deny(unsafe_code)]

//! # GymR8 Server
//!
//! HTTP service in front of the hosted workout database. Each request
//! authenticates the caller's bearer token against the hosted auth API,
//! fetches that user's sessions and exercises, and runs the synchronous
//! aggregation from [`gymr8_stats`] inline.
//!
//! ## Architecture
//!
//! - **Backend**: [`backend::WorkoutBackend`] over the hosted REST API, plus an in-memory implementation
//! - **Routes**: health, stats dashboard, workout history, and profile endpoints
//! - **Config**: environment-only [`config::environment::ServerConfig`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gymr8_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("GymR8 configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Bearer token extraction and request authentication
pub mod auth;

/// Hosted workout API client and in-memory backend
pub mod backend;

/// Environment-based configuration
pub mod config;

/// Application constants shared with the core crate
pub mod constants;

/// Unified error types re-exported from the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware for CORS and request spans
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Server resources, router assembly, and the serve loop
pub mod server;
