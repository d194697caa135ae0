// ABOUTME: User identity and profile models returned by the hosted auth provider
// ABOUTME: AuthenticatedUser comes from token verification, AppUserProfile from the app_user table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity resolved from a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User ID assigned by the auth provider
    pub id: Uuid,
    /// Email address on the account
    #[serde(default)]
    pub email: Option<String>,
    /// When the email was confirmed
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
}

/// Application-level profile row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUserRow {
    /// Full name
    #[serde(default)]
    pub name: Option<String>,
    /// Public username
    #[serde(default)]
    pub username: Option<String>,
}

/// Profile shown on the profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Email address, if any
    pub email: Option<String>,
    /// Whether the email has been confirmed
    pub email_verified: bool,
    /// Full name, if set
    pub name: Option<String>,
    /// Username, if set
    pub username: Option<String>,
}

impl UserProfile {
    /// Merge the auth identity with the optional app user row
    #[must_use]
    pub fn from_parts(user: &AuthenticatedUser, app_user: Option<AppUserRow>) -> Self {
        let app_user = app_user.unwrap_or_default();
        Self {
            email: user.email.clone(),
            email_verified: user.email_confirmed_at.is_some(),
            name: app_user.name,
            username: app_user.username,
        }
    }
}
