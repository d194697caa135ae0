// ABOUTME: Raw row shapes returned by the hosted REST API and their one-time normalization
// ABOUTME: Embedded relations may arrive as an object, an array of one, or null
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! # Row Normalization
//!
//! The hosted API embeds joined relations either as a single object or as an
//! array holding one object, depending on how the foreign key is declared.
//! [`OneOrMany`] absorbs that ambiguity during deserialization and the
//! `TryFrom` impls below turn rows into [`Session`] and [`PerformedExercise`]
//! exactly once, right after fetch. Nothing downstream sees the raw shapes.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::workout::{PerformedExercise, Session, SessionRef};

/// An embedded relation that is either a single object or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Array form; only the first element is meaningful
    Many(Vec<T>),
    /// Single embedded object
    One(T),
}

impl<T> OneOrMany<T> {
    /// Collapse to the first (or only) element
    pub fn into_first(self) -> Option<T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.into_iter().next(),
        }
    }
}

/// Errors raised while normalizing a raw row
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// A required column was null or absent
    #[error("row '{row_id}' is missing required field '{field}'")]
    MissingField {
        /// Identifier of the offending row
        row_id: String,
        /// Column name
        field: &'static str,
    },
    /// A timestamp column could not be parsed
    #[error("row '{row_id}' has invalid timestamp in '{field}': '{value}'")]
    InvalidTimestamp {
        /// Identifier of the offending row
        row_id: String,
        /// Column name
        field: &'static str,
        /// Raw value
        value: String,
    },
}

/// Parse an RFC 3339 timestamp, accepting zone-less values as UTC
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

fn required_timestamp(
    row_id: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<DateTime<Utc>, RowError> {
    let raw = value.ok_or_else(|| RowError::MissingField {
        row_id: row_id.to_owned(),
        field,
    })?;
    parse_timestamp(raw).ok_or_else(|| RowError::InvalidTimestamp {
        row_id: row_id.to_owned(),
        field,
        value: raw.to_owned(),
    })
}

/// Optional timestamps are dropped rather than rejected when unparsable
fn optional_timestamp(row_id: &str, field: &'static str, value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = value?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        warn!(row_id, field, value = raw, "Ignoring unparsable optional timestamp");
    }
    parsed
}

/// Embedded `session_schedule` relation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Schedule identifier
    #[serde(default)]
    pub session_schedule_id: Option<String>,
    /// Schedule name
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw `performed_session` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRow {
    /// Session identifier
    pub performed_session_id: String,
    /// Start timestamp
    #[serde(default)]
    pub started_at: Option<String>,
    /// Completion timestamp
    #[serde(default)]
    pub completed_at: Option<String>,
    /// Free-text note
    #[serde(default)]
    pub note: Option<String>,
    /// Owning user, present when selected
    #[serde(default)]
    pub app_user_id: Option<String>,
    /// Embedded schedule
    #[serde(default)]
    pub session_schedule: Option<OneOrMany<ScheduleRow>>,
}

impl TryFrom<SessionRow> for Session {
    type Error = RowError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let id = row.performed_session_id;
        let started_at = required_timestamp(&id, "started_at", row.started_at.as_deref())?;
        let completed_at = optional_timestamp(&id, "completed_at", row.completed_at.as_deref());
        let schedule_name = row
            .session_schedule
            .and_then(OneOrMany::into_first)
            .and_then(|schedule| schedule.name);

        Ok(Self {
            id,
            started_at,
            completed_at,
            note: row.note,
            schedule_name,
        })
    }
}

/// Embedded `performed_session` relation on an exercise row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRefRow {
    /// Session identifier
    #[serde(default)]
    pub performed_session_id: Option<String>,
    /// Session start
    #[serde(default)]
    pub started_at: Option<String>,
    /// Owning user
    #[serde(default)]
    pub app_user_id: Option<String>,
}

/// Embedded `base_exercise` relation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseExerciseRow {
    /// Catalog name
    #[serde(default)]
    pub name: Option<String>,
    /// Catalog description
    #[serde(default)]
    pub description: Option<String>,
}

/// Embedded `exercise` relation linking to the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLinkRow {
    /// Nested catalog entry
    #[serde(default)]
    pub base_exercise: Option<OneOrMany<BaseExerciseRow>>,
}

/// Raw `performed_exercise` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRow {
    /// Exercise entry identifier
    pub performed_exercise_id: String,
    /// Free-text name
    #[serde(default)]
    pub name: Option<String>,
    /// Reps per set
    #[serde(default)]
    pub reps: Option<Vec<u32>>,
    /// Set count
    #[serde(default)]
    pub sets: Option<u32>,
    /// Weight in grams
    #[serde(default)]
    pub weight: Option<u32>,
    /// Start timestamp
    #[serde(default)]
    pub started_at: Option<String>,
    /// Free-text note
    #[serde(default)]
    pub note: Option<String>,
    /// Embedded owning session
    #[serde(default)]
    pub performed_session: Option<OneOrMany<SessionRefRow>>,
    /// Embedded catalog link
    #[serde(default)]
    pub exercise: Option<OneOrMany<ExerciseLinkRow>>,
}

impl ExerciseRow {
    /// Owner of the embedded session, if the join was selected
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        match self.performed_session.as_ref()? {
            OneOrMany::One(session) => session.app_user_id.as_deref(),
            OneOrMany::Many(sessions) => sessions.first()?.app_user_id.as_deref(),
        }
    }

    /// Whether this row's embedded session belongs to `user_id`
    ///
    /// Rows without an embedded session are not considered owned.
    #[must_use]
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.owner_id() == Some(user_id)
    }
}

impl TryFrom<ExerciseRow> for PerformedExercise {
    type Error = RowError;

    fn try_from(row: ExerciseRow) -> Result<Self, Self::Error> {
        let id = row.performed_exercise_id;
        let started_at = required_timestamp(&id, "started_at", row.started_at.as_deref())?;

        // A session reference without a usable start cannot date the exercise
        let session = row
            .performed_session
            .and_then(OneOrMany::into_first)
            .and_then(|session| {
                let started_at =
                    optional_timestamp(&id, "performed_session.started_at", session.started_at.as_deref())?;
                Some(SessionRef {
                    id: session.performed_session_id.unwrap_or_default(),
                    started_at,
                })
            });

        let base = row
            .exercise
            .and_then(OneOrMany::into_first)
            .and_then(|link| link.base_exercise)
            .and_then(OneOrMany::into_first)
            .unwrap_or_default();

        let reps = row.reps.unwrap_or_default();
        let sets = row
            .sets
            .unwrap_or_else(|| u32::try_from(reps.len()).unwrap_or(u32::MAX));

        Ok(Self {
            id,
            name: row.name,
            catalog_name: base.name,
            catalog_description: base.description,
            reps,
            sets,
            weight_grams: row.weight,
            started_at,
            note: row.note,
            session,
        })
    }
}

/// Normalize session rows, skipping rows that cannot be dated
#[must_use]
pub fn normalize_sessions(rows: Vec<SessionRow>) -> Vec<Session> {
    normalize(rows)
}

/// Normalize exercise rows, skipping rows that cannot be dated
#[must_use]
pub fn normalize_exercises(rows: Vec<ExerciseRow>) -> Vec<PerformedExercise> {
    normalize(rows)
}

fn normalize<R, T>(rows: Vec<R>) -> Vec<T>
where
    T: TryFrom<R, Error = RowError>,
{
    rows.into_iter()
        .filter_map(|row| match T::try_from(row) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "Skipping row during normalization");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_session_row_with_array_schedule() {
        let row: SessionRow = serde_json::from_value(json!({
            "performed_session_id": "s-1",
            "started_at": "2024-01-07T10:00:00+00:00",
            "completed_at": "2024-01-07T11:05:00+00:00",
            "session_schedule": [{ "session_schedule_id": "sch-1", "name": "Legs" }]
        }))
        .unwrap();

        let session = Session::try_from(row).unwrap();
        assert_eq!(session.schedule_name.as_deref(), Some("Legs"));
        assert_eq!(
            session.started_at,
            Utc.with_ymd_and_hms(2024, 1, 7, 10, 0, 0).unwrap()
        );
        assert!(session.completed_at.is_some());
    }

    #[test]
    fn test_session_row_with_object_or_null_schedule() {
        let object: SessionRow = serde_json::from_value(json!({
            "performed_session_id": "s-1",
            "started_at": "2024-01-07T10:00:00Z",
            "session_schedule": { "name": "Push" }
        }))
        .unwrap();
        assert_eq!(
            Session::try_from(object).unwrap().schedule_name.as_deref(),
            Some("Push")
        );

        let null: SessionRow = serde_json::from_value(json!({
            "performed_session_id": "s-2",
            "started_at": "2024-01-07T10:00:00",
            "session_schedule": null
        }))
        .unwrap();
        assert_eq!(Session::try_from(null).unwrap().schedule_name, None);
    }

    #[test]
    fn test_session_row_without_start_is_rejected() {
        let row: SessionRow = serde_json::from_value(json!({
            "performed_session_id": "s-1",
            "started_at": "yesterday"
        }))
        .unwrap();
        assert!(matches!(
            Session::try_from(row),
            Err(RowError::InvalidTimestamp { field: "started_at", .. })
        ));
    }

    #[test]
    fn test_exercise_row_nested_shapes() {
        let row: ExerciseRow = serde_json::from_value(json!({
            "performed_exercise_id": "e-1",
            "name": "bench",
            "reps": [8, 8, 6],
            "weight": 80000,
            "started_at": "2024-01-07T10:10:00+00:00",
            "performed_session": [{
                "performed_session_id": "s-1",
                "started_at": "2024-01-07T10:00:00+00:00",
                "app_user_id": "u-1"
            }],
            "exercise": { "base_exercise": [{ "name": "Bench Press" }] }
        }))
        .unwrap();

        assert!(row.belongs_to("u-1"));
        assert!(!row.belongs_to("u-2"));

        let exercise = PerformedExercise::try_from(row).unwrap();
        assert_eq!(exercise.display_name(), "Bench Press");
        assert_eq!(exercise.sets, 3);
        assert_eq!(
            exercise.effective_date(),
            Utc.with_ymd_and_hms(2024, 1, 7, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_exercise_row_missing_reps_and_weight() {
        let row: ExerciseRow = serde_json::from_value(json!({
            "performed_exercise_id": "e-2",
            "started_at": "2024-01-07T10:10:00Z"
        }))
        .unwrap();
        assert_eq!(row.owner_id(), None);

        let exercise = PerformedExercise::try_from(row).unwrap();
        assert!(exercise.reps.is_empty());
        assert_eq!(exercise.sets, 0);
        assert_eq!(exercise.volume_gram_reps(), 0);
        assert!(exercise.session.is_none());
    }

    #[test]
    fn test_normalize_skips_undatable_rows() {
        let rows: Vec<ExerciseRow> = serde_json::from_value(json!([
            { "performed_exercise_id": "e-1", "started_at": "2024-01-07T10:10:00Z" },
            { "performed_exercise_id": "e-2" },
            { "performed_exercise_id": "e-3", "started_at": "2024-01-08T10:10:00Z" }
        ]))
        .unwrap();

        let exercises = normalize_exercises(rows);
        let ids: Vec<&str> = exercises.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e-1", "e-3"]);
    }
}
