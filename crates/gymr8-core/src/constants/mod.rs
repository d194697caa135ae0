// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, statistics, routes, limits, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion constants
pub mod units {
    /// Weights are stored in grams; divide by this for kilograms
    pub const GRAMS_PER_KG: u64 = 1000;
    /// Same as [`GRAMS_PER_KG`] for floating point math
    pub const GRAMS_PER_KG_F64: f64 = 1000.0;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: i64 = 60;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: i64 = 60;
}

/// Statistics dashboard constants
pub mod stats {
    /// Maximum rows in the personal records table
    pub const TOP_RECORDS_LIMIT: usize = 10;
    /// Display name used when an exercise has neither catalog nor free-text name
    pub const UNKNOWN_EXERCISE_NAME: &str = "Unknown Exercise";
    /// Display text for a zero weight
    pub const BODYWEIGHT_LABEL: &str = "Bodyweight";
    /// Default lookback for monthly series when there is no data
    pub const DEFAULT_MONTHLY_SPAN_MONTHS: u32 = 12;
    /// Default lookback for weekly series when there is no data
    pub const DEFAULT_WEEKLY_SPAN_MONTHS: u32 = 3;
    /// Display name for a session without a schedule
    pub const DEFAULT_SESSION_NAME: &str = "Workout Session";
}

/// Workout history paging limits
pub mod limits {
    /// Default page size for workout history
    pub const DEFAULT_WORKOUTS_LIMIT: usize = 20;
    /// Maximum page size for workout history
    pub const MAX_WORKOUTS_LIMIT: usize = 100;
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Timeout configurations
pub mod timeouts {
    /// Default HTTP client request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 30;
    /// Default HTTP client connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service names for structured logging
pub mod service_names {
    /// HTTP server
    pub const GYMR8_SERVER: &str = "gymr8-server";
    /// Command line tool
    pub const GYMR8_CLI: &str = "gymr8-cli";
    /// Hosted data API, used in error messages
    pub const HOSTED_BACKEND: &str = "hosted backend";
}

/// Hosted data API table names and paths
pub mod backend {
    /// REST path prefix
    pub const REST_PATH: &str = "rest/v1";
    /// Auth path prefix
    pub const AUTH_PATH: &str = "auth/v1";
    /// Performed session table
    pub const PERFORMED_SESSION_TABLE: &str = "performed_session";
    /// Performed exercise table
    pub const PERFORMED_EXERCISE_TABLE: &str = "performed_exercise";
    /// Application user table
    pub const APP_USER_TABLE: &str = "app_user";
}

/// Environment variable names read by the server configuration
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Host used for endpoint display
    pub const HOST: &str = "HOST";
    /// Base URL of the hosted backend
    pub const BACKEND_URL: &str = "GYMR8_BACKEND_URL";
    /// Public (anon) API key of the hosted backend
    pub const BACKEND_ANON_KEY: &str = "GYMR8_BACKEND_ANON_KEY";
    /// Request timeout for the shared HTTP client
    pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Connect timeout for the shared HTTP client
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}
