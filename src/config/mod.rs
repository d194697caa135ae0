// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads the GymR8 server configuration from environment variables only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors
//! Configuration module for the GymR8 server
//!
//! - **Environment**: server, backend, HTTP client, and CORS settings from environment variables

/// Environment and server configuration
pub mod environment;
