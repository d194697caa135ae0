// ABOUTME: Application constants for the GymR8 server
// ABOUTME: Re-exports the core constant groups used by configuration, backend, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

pub use gymr8_core::constants::{
    backend, env_config, limits, ports, service_names, stats, timeouts, units,
};

/// Default values for optional environment variables
pub mod defaults {
    /// Bind address when `HOST` is unset
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Log output format when `LOG_FORMAT` is unset
    pub const DEFAULT_LOG_FORMAT: &str = "pretty";
    /// CORS origins when `CORS_ALLOWED_ORIGINS` is unset
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
}

/// Backend retry behavior on rate limiting
pub mod retry {
    /// Attempts before giving up on a rate-limited request
    pub const MAX_RETRIES: u32 = 3;
    /// First backoff delay in milliseconds, doubled per attempt
    pub const INITIAL_BACKOFF_MS: u64 = 250;
}
