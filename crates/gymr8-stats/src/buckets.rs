// ABOUTME: Weekly and monthly bucketing for the frequency and volume charts
// ABOUTME: Produces contiguous, zero-filled, half-open calendar buckets in UTC
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! Calendar bucketing
//!
//! A series covers every bucket from the one holding its earliest record
//! through the one holding `now` (or the latest record, when that is later).
//! Buckets are half-open `[start, next_start)` over UTC calendar dates, so
//! every record lands in exactly one bucket. Weeks start on Sunday.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use gymr8_core::constants::stats::{DEFAULT_MONTHLY_SPAN_MONTHS, DEFAULT_WEEKLY_SPAN_MONTHS};
use gymr8_core::models::{PerformedExercise, Session, TimeRange};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::overview::{gram_reps_to_kg, gram_reps_to_rounded_kg};

/// Width of a chart bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketGranularity {
    /// Sunday-start calendar weeks
    Weekly,
    /// Calendar months
    Monthly,
}

impl BucketGranularity {
    /// Short ranges chart by week, long ranges by month
    #[must_use]
    pub const fn for_range(range: TimeRange) -> Self {
        match range {
            TimeRange::Ytd | TimeRange::OneYear => Self::Weekly,
            TimeRange::ThreeYears | TimeRange::FiveYears | TimeRange::All => Self::Monthly,
        }
    }

    /// Lookback used when a series has no records
    #[must_use]
    pub const fn default_span_months(self) -> u32 {
        match self {
            Self::Weekly => DEFAULT_WEEKLY_SPAN_MONTHS,
            Self::Monthly => DEFAULT_MONTHLY_SPAN_MONTHS,
        }
    }

    /// First day of the bucket containing `date`
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => {
                date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
            }
            Self::Monthly => date.with_day(1).unwrap_or(date),
        }
    }

    /// First day of the bucket following the one starting at `start`
    #[must_use]
    pub fn next_start(self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Weekly => start.checked_add_signed(Duration::weeks(1)),
            Self::Monthly => start.checked_add_months(Months::new(1)),
        }
    }

    /// Chart label for the bucket starting at `start`: "Jan 2024" or "Jan 7"
    #[must_use]
    pub fn label(self, start: NaiveDate) -> String {
        match self {
            Self::Weekly => start.format("%b %-d").to_string(),
            Self::Monthly => start.format("%b %Y").to_string(),
        }
    }
}

/// Sessions started within one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    /// Chart label
    pub label: String,
    /// Bucket start (inclusive)
    pub start: NaiveDate,
    /// Next bucket's start (exclusive)
    pub end: NaiveDate,
    /// Number of sessions
    pub sessions: usize,
}

/// Volume lifted within one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    /// Chart label
    pub label: String,
    /// Bucket start (inclusive)
    pub start: NaiveDate,
    /// Next bucket's start (exclusive)
    pub end: NaiveDate,
    /// Exact volume in gram-reps
    pub volume_gram_reps: u64,
    /// Volume in kilograms
    pub volume_kg: f64,
    /// Volume rounded to whole kilograms
    pub volume_kg_rounded: u64,
}

/// One `[start, end)` calendar interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Inclusive start date
    pub start: NaiveDate,
    /// Exclusive end date
    pub end: NaiveDate,
}

/// Contiguous buckets covering `dates` and `now`
///
/// With no dates, covers the default lookback before `now`.
#[must_use]
pub fn plan_buckets(
    granularity: BucketGranularity,
    dates: impl IntoIterator<Item = DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Vec<Bucket> {
    let (earliest, latest) = dates
        .into_iter()
        .fold((None, None), |(min, max): (Option<DateTime<Utc>>, Option<DateTime<Utc>>), ts| {
            (
                Some(min.map_or(ts, |m| m.min(ts))),
                Some(max.map_or(ts, |m| m.max(ts))),
            )
        });

    let first = earliest.unwrap_or_else(|| {
        now.checked_sub_months(Months::new(granularity.default_span_months()))
            .unwrap_or(now)
    });
    let last = latest.map_or(now, |latest| latest.max(now));

    let last_start = granularity.bucket_start(last.date_naive());
    let mut start = granularity.bucket_start(first.date_naive());
    let mut buckets = Vec::new();

    while start <= last_start {
        let Some(end) = granularity.next_start(start) else {
            break;
        };
        buckets.push(Bucket { start, end });
        start = end;
    }

    buckets
}

/// Index of the bucket containing `date`, if any
fn bucket_index(buckets: &[Bucket], date: NaiveDate) -> Option<usize> {
    let after = buckets.partition_point(|bucket| bucket.start <= date);
    let index = after.checked_sub(1)?;
    (date < buckets[index].end).then_some(index)
}

/// Sessions per bucket
#[must_use]
pub fn frequency_series(
    sessions: &[Session],
    granularity: BucketGranularity,
    now: DateTime<Utc>,
) -> Vec<FrequencyPoint> {
    let buckets = plan_buckets(granularity, sessions.iter().map(|s| s.started_at), now);
    let mut counts = vec![0_usize; buckets.len()];

    for session in sessions {
        if let Some(index) = bucket_index(&buckets, session.started_at.date_naive()) {
            counts[index] += 1;
        }
    }

    debug!(
        buckets = buckets.len(),
        sessions = sessions.len(),
        ?granularity,
        "Computed frequency series"
    );

    buckets
        .iter()
        .zip(counts)
        .map(|(bucket, sessions)| FrequencyPoint {
            label: granularity.label(bucket.start),
            start: bucket.start,
            end: bucket.end,
            sessions,
        })
        .collect()
}

/// Lifted volume per bucket, dated by each exercise's effective date
///
/// Exercises without a session reference fall back to their own start, so the
/// series always sums to the overview volume.
#[must_use]
pub fn volume_series(
    exercises: &[PerformedExercise],
    granularity: BucketGranularity,
    now: DateTime<Utc>,
) -> Vec<VolumePoint> {
    let buckets = plan_buckets(
        granularity,
        exercises.iter().map(PerformedExercise::effective_date),
        now,
    );
    let mut totals = vec![0_u64; buckets.len()];

    for exercise in exercises {
        if let Some(index) = bucket_index(&buckets, exercise.effective_date().date_naive()) {
            totals[index] = totals[index].saturating_add(exercise.volume_gram_reps());
        }
    }

    debug!(
        buckets = buckets.len(),
        exercises = exercises.len(),
        ?granularity,
        "Computed volume series"
    );

    buckets
        .iter()
        .zip(totals)
        .map(|(bucket, gram_reps)| VolumePoint {
            label: granularity.label(bucket.start),
            start: bucket.start,
            end: bucket.end,
            volume_gram_reps: gram_reps,
            volume_kg: gram_reps_to_kg(gram_reps),
            volume_kg_rounded: gram_reps_to_rounded_kg(gram_reps),
        })
        .collect()
}
