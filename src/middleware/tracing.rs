// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying a request ID and, after auth, the user ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use axum::http::Request;
use tracing::{field, info_span, Span};
use uuid::Uuid;

/// Header carrying a caller-supplied correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory for `TraceLayer::make_span_with`
///
/// Reuses the caller's `x-request-id` when present, otherwise generates one.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);

    info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri().path(),
        request_id = %request_id,
        user_id = field::Empty,
    )
}

/// Record the authenticated user on the current request span
pub fn record_user_in_span(user_id: Uuid) {
    Span::current().record("user_id", field::display(user_id));
}
