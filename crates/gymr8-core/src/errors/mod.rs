// ABOUTME: Error codes, the AppError type, and the JSON error envelope with HTTP status mapping
// ABOUTME: AppError is the single error type crossing crate boundaries in GymR8
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! # Unified Error Handling System
//!
//! Defines standard error codes, the `AppError` type, and the JSON error
//! envelope returned by the HTTP layer. The stats engine itself never fails;
//! these errors come from input parsing, configuration, and the hosted data API.

use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "http-response")]
use axum::response::{IntoResponse, Response};
#[cfg(feature = "http-response")]
use axum::Json;
#[cfg(feature = "http-response")]
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(feature = "http-response")]
use tracing::{debug, error};

/// Failure categories, each mapped to one HTTP status
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request carried no bearer token
    AuthRequired,
    /// Bearer token was malformed or rejected by the auth provider
    AuthInvalid,
    /// A query parameter or CLI argument had an unknown value
    InvalidInput,
    /// An opaque value (pagination cursor) could not be decoded
    InvalidFormat,
    /// Workout does not exist or belongs to someone else
    ResourceNotFound,
    /// Hosted data API answered with an unexpected status
    ExternalServiceError,
    /// Hosted data API timed out or refused the connection
    ExternalServiceUnavailable,
    /// Hosted data API kept throttling after every retry
    ExternalRateLimited,
    /// Backend URL or another setting is unusable
    ConfigError,
    /// Row JSON did not match the expected shape
    SerializationError,
}

impl ErrorCode {
    /// HTTP status returned for this code
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidFormat => 400,
            Self::AuthRequired | Self::AuthInvalid => 401,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::ExternalRateLimited => 503,
            Self::ConfigError | Self::SerializationError => 500,
        }
    }

    /// Short description used as the `Display` prefix
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication required",
            Self::AuthInvalid => "Invalid credentials",
            Self::InvalidInput => "Invalid input",
            Self::InvalidFormat => "Invalid format",
            Self::ResourceNotFound => "Not found",
            Self::ExternalServiceError => "Workout data service error",
            Self::ExternalServiceUnavailable => "Workout data service unavailable",
            Self::ExternalRateLimited => "Workout data service rate limited",
            Self::ConfigError => "Configuration error",
            Self::SerializationError => "Malformed data",
        }
    }
}

/// Error type shared by the core, stats, and server crates
#[derive(Debug, Error)]
pub struct AppError {
    /// Failure category
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Identifier of the missing or rejected resource
    pub resource_id: Option<String>,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Attach the identifier of the resource involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Missing bearer token
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Authentication required")
    }

    /// Rejected bearer token
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// `"{resource} not found"`
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Unknown parameter value
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Undecodable opaque value
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Unusable configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// `"{service}: {message}"` from the hosted data API
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// `{ "code", "message", "resource_id"? }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Resource identifier, omitted when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                resource_id: error.resource_id,
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "backend-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_timeout() || error.is_connect() {
            ErrorCode::ExternalServiceUnavailable
        } else if error.is_decode() {
            ErrorCode::SerializationError
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, format!("Backend request failed: {error}")).with_source(error)
    }
}

#[cfg(feature = "http-response")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = ?self.code, message = %self.message, "Request failed");
        } else {
            debug!(code = ?self.code, message = %self.message, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
