// ABOUTME: Cursor-based pagination module for workout history traversal
// ABOUTME: Provides opaque, sort-aware cursor encoding and page containers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::limits::{DEFAULT_WORKOUTS_LIMIT, MAX_WORKOUTS_LIMIT};
use crate::errors::AppError;

/// Chronological sort order for workout history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Get string representation for API responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "oldest" => Ok(Self::Asc),
            "desc" | "newest" => Ok(Self::Desc),
            other => Err(AppError::invalid_input(format!(
                "Unknown sort order: '{other}'. Valid options: asc, desc"
            ))),
        }
    }
}

/// Opaque pagination cursor containing encoded position information
///
/// Encodes `sort|timestamp_micros|id` so a cursor minted for one sort order
/// is rejected when replayed against the other. Timestamps keep the full
/// microsecond precision of the stored `started_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// Create a new cursor from the sort order and the last item's position
    #[must_use]
    pub fn new(sort: SortOrder, timestamp: DateTime<Utc>, id: &str) -> Self {
        let cursor_data = format!("{}|{}|{}", sort.as_str(), timestamp.timestamp_micros(), id);
        let encoded = base64::Engine::encode(&URL_SAFE_NO_PAD, cursor_data.as_bytes());
        Self(encoded)
    }

    /// Decode cursor into timestamp and ID components
    ///
    /// Returns `None` if cursor is malformed or was created for a different sort order
    #[must_use]
    pub fn decode(&self, expected_sort: SortOrder) -> Option<(DateTime<Utc>, String)> {
        let decoded = base64::Engine::decode(&URL_SAFE_NO_PAD, &self.0).ok()?;
        let decoded_str = String::from_utf8(decoded).ok()?;

        let (sort, rest) = decoded_str.split_once('|')?;
        if sort != expected_sort.as_str() {
            return None;
        }

        // Split on first '|' only so IDs containing '|' are preserved
        let (timestamp_str, id) = rest.split_once('|')?;
        let timestamp_micros = timestamp_str.parse::<i64>().ok()?;
        let datetime = DateTime::from_timestamp_micros(timestamp_micros)?;

        Some((datetime, id.to_owned()))
    }

    /// Get the raw cursor string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create cursor from raw string (for query parameters)
    #[must_use]
    pub const fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paginated response containing items and pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage<T> {
    /// The items in this page
    pub items: Vec<T>,

    /// Cursor pointing to the next page (if available)
    pub next_cursor: Option<Cursor>,

    /// Whether there are more items after this page
    pub has_more: bool,

    /// Total number of items in this page
    pub count: usize,
}

impl<T> CursorPage<T> {
    /// Create a new cursor page
    #[must_use]
    pub fn new(items: Vec<T>, next_cursor: Option<Cursor>, has_more: bool) -> Self {
        let count = items.len();
        Self {
            items,
            next_cursor,
            has_more,
            count,
        }
    }
}

/// Pagination parameters for cursor-based queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Cursor to start from (exclusive)
    pub cursor: Option<Cursor>,

    /// Requested page size; clamped by [`PaginationParams::effective_limit`]
    pub limit: Option<usize>,
}

impl PaginationParams {
    /// Page size clamped to `1..=MAX_WORKOUTS_LIMIT`, default when unset
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_WORKOUTS_LIMIT)
            .clamp(1, MAX_WORKOUTS_LIMIT)
    }
}
