// ABOUTME: Integration tests for workout history, workout detail, and profile routes
// ABOUTME: Covers search, cursor pagination, ownership checks, and profile merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_router, LIFTER_TOKEN, NEWBIE_TOKEN};
use gymr8_core::models::UserProfile;
use gymr8_core::pagination::CursorPage;
use gymr8_stats::history::{WorkoutDetail, WorkoutSummary, IN_PROGRESS_LABEL};
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

async fn list(uri: &str) -> CursorPage<WorkoutSummary> {
    AxumTestRequest::get(uri)
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::OK)
        .json()
}

fn ids(page: &CursorPage<WorkoutSummary>) -> Vec<&str> {
    page.items.iter().map(|w| w.id.as_str()).collect()
}

// ============================================================================
// History list
// ============================================================================

#[tokio::test]
async fn test_list_defaults_to_newest_first() {
    let page = list("/api/workouts").await;

    assert_eq!(ids(&page), vec!["s-legs", "s-push", "s-morning"]);
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());

    let legs = &page.items[0];
    assert_eq!(legs.name, "Leg Day");
    assert_eq!(legs.exercise_count, 2);
    assert_eq!(legs.total_sets, 5);
    assert_eq!(legs.duration_display, "45m");

    let morning = &page.items[2];
    assert_eq!(morning.name, "Workout Session");
    assert_eq!(morning.duration_display, IN_PROGRESS_LABEL);
}

#[tokio::test]
async fn test_list_ascending() {
    let page = list("/api/workouts?sort=asc").await;
    assert_eq!(ids(&page), vec!["s-morning", "s-push", "s-legs"]);
}

#[tokio::test]
async fn test_search_matches_schedule_name_and_note() {
    let page = list("/api/workouts?q=LEG").await;
    assert_eq!(ids(&page), vec!["s-legs", "s-morning"]);

    let page = list("/api/workouts?q=strong").await;
    assert_eq!(ids(&page), vec!["s-push"]);

    let page = list("/api/workouts?q=cardio").await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_cursor_pagination_walks_every_session_once() {
    let first = list("/api/workouts?limit=2").await;
    assert_eq!(ids(&first), vec!["s-legs", "s-push"]);
    assert!(first.has_more);

    let cursor = first.next_cursor.clone().unwrap();
    let second = list(&format!("/api/workouts?limit=2&cursor={cursor}")).await;
    assert_eq!(ids(&second), vec!["s-morning"]);
    assert!(!second.has_more);
    assert!(second.next_cursor.is_none());
}

#[tokio::test]
async fn test_invalid_cursor_is_bad_request() {
    let body: Value = AxumTestRequest::get("/api/workouts?cursor=garbage")
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_cursor_from_other_sort_is_rejected() {
    let first = list("/api/workouts?limit=1&sort=desc").await;
    let cursor = first.next_cursor.unwrap();

    AxumTestRequest::get(&format!("/api/workouts?sort=asc&cursor={cursor}"))
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_sort_is_bad_request() {
    let body: Value = AxumTestRequest::get("/api/workouts?sort=sideways")
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_invalid_limit_is_bad_request() {
    AxumTestRequest::get("/api/workouts?limit=many")
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_requires_auth() {
    AxumTestRequest::get("/api/workouts")
        .send(create_test_router())
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_workout_detail() {
    let detail: WorkoutDetail = AxumTestRequest::get("/api/workouts/s-legs")
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(detail.summary.id, "s-legs");
    assert_eq!(detail.summary.name, "Leg Day");
    let names: Vec<&str> = detail.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Back Squat", "Bench Press"]);
    assert_eq!(detail.exercises[0].weight_display, "100.0 kg");
}

#[tokio::test]
async fn test_missing_workout_is_not_found() {
    let body: Value = AxumTestRequest::get("/api/workouts/does-not-exist")
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["resource_id"], "does-not-exist");
}

#[tokio::test]
async fn test_other_users_workout_is_not_found() {
    AxumTestRequest::get("/api/workouts/s-legs")
        .bearer(NEWBIE_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_merges_identity_and_app_user() {
    let profile: UserProfile = AxumTestRequest::get("/api/profile")
        .bearer(LIFTER_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(profile.email.as_deref(), Some("lifter@example.com"));
    assert!(profile.email_verified);
    assert_eq!(profile.name.as_deref(), Some("Ada Lifter"));
    assert_eq!(profile.username.as_deref(), Some("ada"));
}

#[tokio::test]
async fn test_profile_without_app_user_row() {
    let profile: UserProfile = AxumTestRequest::get("/api/profile")
        .bearer(NEWBIE_TOKEN)
        .send(create_test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(!profile.email_verified);
    assert!(profile.name.is_none());
    assert!(profile.username.is_none());
}
