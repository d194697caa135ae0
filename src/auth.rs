// ABOUTME: Bearer token extraction and per-request authentication
// ABOUTME: Resolves the Authorization header to a user through the configured backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use gymr8_core::models::AuthenticatedUser;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::middleware::record_user_in_span;
use crate::server::ServerResources;

/// Authenticated caller plus the token used for downstream requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Resolved user identity
    pub user: AuthenticatedUser,
    /// Raw bearer token, forwarded to the hosted API
    pub token: String,
}

impl AuthContext {
    /// Create an auth context
    #[must_use]
    pub fn new(user: AuthenticatedUser, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }
}

/// Extract the bearer token from the `Authorization` header
///
/// # Errors
///
/// Returns `AuthRequired` when the header is absent and `AuthInvalid` when it is malformed
pub fn extract_bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(AppError::auth_required)?;
    let value = header
        .to_str()
        .map_err(|_| AppError::auth_invalid("Authorization header is not valid UTF-8"))?;

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .ok_or_else(|| AppError::auth_invalid("Authorization header must use the Bearer scheme"))?;

    if token.is_empty() {
        return Err(AppError::auth_invalid("Bearer token is empty"));
    }
    Ok(token)
}

/// Authenticate the request against the configured backend
///
/// # Errors
///
/// Returns an error if the token is missing, malformed, or rejected
pub async fn authenticate(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> AppResult<AuthContext> {
    let token = extract_bearer_token(headers)?;
    let user = resources.backend.authenticate(token).await?;

    record_user_in_span(user.id);
    debug!(user_id = %user.id, backend = resources.backend.name(), "Request authenticated");

    Ok(AuthContext::new(user, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_missing_header_requires_auth() {
        let err = extract_bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(
            extract_bearer_token(&headers("Bearer abc.def")).unwrap(),
            "abc.def"
        );
    }

    #[test]
    fn test_malformed_headers_are_invalid() {
        for value in ["Basic dXNlcjpwYXNz", "Bearer ", "abc"] {
            let err = extract_bearer_token(&headers(value)).unwrap_err();
            assert_eq!(err.code, ErrorCode::AuthInvalid, "header: {value}");
        }
    }
}
