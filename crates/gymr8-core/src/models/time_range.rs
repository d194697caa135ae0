// ABOUTME: TimeRange selection for the stats dashboard (YTD, 1Y, 3Y, 5Y, All Time)
// ABOUTME: Computes lower-bound cutoffs relative to an injected "now"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Time window applied to sessions and exercises before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    /// Since January 1st of the current year
    #[serde(rename = "ytd")]
    Ytd,
    /// Last 12 months
    #[serde(rename = "1y")]
    OneYear,
    /// Last 3 years
    #[serde(rename = "3y")]
    ThreeYears,
    /// Last 5 years
    #[serde(rename = "5y")]
    FiveYears,
    /// Everything
    #[default]
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    /// All ranges in selector display order
    pub const ALL_RANGES: [Self; 5] = [
        Self::All,
        Self::FiveYears,
        Self::ThreeYears,
        Self::OneYear,
        Self::Ytd,
    ];

    /// Wire value used in query strings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ytd => "ytd",
            Self::OneYear => "1y",
            Self::ThreeYears => "3y",
            Self::FiveYears => "5y",
            Self::All => "all",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ytd => "YTD",
            Self::OneYear => "1 Year",
            Self::ThreeYears => "3 Years",
            Self::FiveYears => "5 Years",
            Self::All => "All Time",
        }
    }

    const fn years_back(self) -> Option<u32> {
        match self {
            Self::OneYear => Some(1),
            Self::ThreeYears => Some(3),
            Self::FiveYears => Some(5),
            Self::Ytd | Self::All => None,
        }
    }

    /// Earliest instant included by this range, `None` for [`TimeRange::All`]
    ///
    /// Year offsets are calendar based; February 29th clamps to the 28th.
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::All => None,
            Self::Ytd => Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0).single(),
            _ => self
                .years_back()
                .and_then(|years| now.checked_sub_months(Months::new(years * 12))),
        }
    }

    /// Whether `timestamp` falls inside this range
    #[must_use]
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        !matches!(self.cutoff(now), Some(cutoff) if timestamp < cutoff)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ytd" => Ok(Self::Ytd),
            "1y" => Ok(Self::OneYear),
            "3y" => Ok(Self::ThreeYears),
            "5y" => Ok(Self::FiveYears),
            "all" => Ok(Self::All),
            other => Err(AppError::invalid_input(format!(
                "Unknown time range: '{other}'. Valid options: ytd, 1y, 3y, 5y, all"
            ))),
        }
    }
}
