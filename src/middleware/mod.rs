// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request spans with correlation IDs and the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

/// CORS configuration
pub mod cors;
/// Request span creation and context recording
pub mod tracing;

pub use self::cors::setup_cors;
pub use self::tracing::{make_request_span, record_user_in_span, REQUEST_ID_HEADER};
