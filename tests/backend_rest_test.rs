// ABOUTME: Integration tests for the REST backend against a mock hosted API
// ABOUTME: Covers rate-limit retries, owner filtering, and rejected session lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{lifter_id, test_config};
use gymr8_core::models::AuthenticatedUser;
use gymr8_server::auth::AuthContext;
use gymr8_server::backend::rest::RetryPolicy;
use gymr8_server::backend::{RestBackend, WorkoutBackend};
use gymr8_server::config::environment::ServerConfig;
use gymr8_server::errors::ErrorCode;
use gymr8_server::server::{build_router, ServerResources};
use helpers::axum_test::AxumTestRequest;
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "hosted-token";
const SESSIONS_PATH: &str = "/rest/v1/performed_session";
const EXERCISES_PATH: &str = "/rest/v1/performed_exercise";

fn config_for(server: &MockServer) -> ServerConfig {
    let mut config = test_config();
    config.backend.url = Url::parse(&server.uri()).unwrap();
    config
}

fn backend_for(server: &MockServer) -> RestBackend {
    RestBackend::with_client(config_for(server).backend, Client::new()).with_retry_policy(
        RetryPolicy {
            max_retries: 3,
            initial_backoff_ms: 1,
        },
    )
}

fn lifter_ctx() -> AuthContext {
    AuthContext::new(
        AuthenticatedUser {
            id: lifter_id(),
            email: Some("lifter@example.com".to_owned()),
            email_confirmed_at: None,
        },
        TOKEN,
    )
}

fn session_row(id: &str) -> Value {
    json!({
        "performed_session_id": id,
        "started_at": "2024-03-05T18:00:00.123456+00:00",
        "completed_at": "2024-03-05T18:45:00+00:00",
        "app_user_id": lifter_id().to_string(),
        "session_schedule": { "session_schedule_id": "sched-1", "name": "Leg Day" }
    })
}

fn exercise_row(id: &str, owner: Option<&str>) -> Value {
    let performed_session = owner.map(|owner| {
        json!({
            "performed_session_id": "s-legs",
            "started_at": "2024-03-05T18:00:00.123456+00:00",
            "app_user_id": owner
        })
    });
    json!({
        "performed_exercise_id": id,
        "name": "squat",
        "reps": [5, 5, 5],
        "sets": 3,
        "weight": 100_000,
        "started_at": "2024-03-05T18:05:00+00:00",
        "performed_session": performed_session,
        "exercise": [{ "base_exercise": { "name": "Back Squat", "description": null } }]
    })
}

// ============================================================================
// Rate-limit retries
// ============================================================================

#[tokio::test]
async fn test_rate_limited_requests_are_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SESSIONS_PATH))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SESSIONS_PATH))
        .and(header("apikey", "test-anon-key"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(query_param("app_user_id", format!("eq.{}", lifter_id()).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([session_row("s-legs")])))
        .expect(1)
        .mount(&server)
        .await;

    let sessions = backend_for(&server)
        .fetch_sessions(&lifter_ctx())
        .await
        .unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, "s-legs");
    assert_eq!(sessions[0].schedule_name.as_deref(), Some("Leg Day"));
}

#[tokio::test]
async fn test_rate_limit_gives_up_after_max_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SESSIONS_PATH))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .fetch_sessions(&lifter_ctx())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
}

// ============================================================================
// Ownership and status mapping
// ============================================================================

#[tokio::test]
async fn test_exercises_owned_by_others_are_dropped() {
    let server = MockServer::start().await;
    let lifter = lifter_id().to_string();

    Mock::given(method("GET"))
        .and(path(EXERCISES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            exercise_row("e-mine", Some(&lifter)),
            exercise_row("e-theirs", Some("00000000-0000-0000-0000-000000000042")),
            exercise_row("e-orphan", None),
        ])))
        .mount(&server)
        .await;

    let exercises = backend_for(&server)
        .fetch_exercises(&lifter_ctx())
        .await
        .unwrap();

    let ids: Vec<_> = exercises.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e-mine"]);
    assert_eq!(exercises[0].display_name(), "Back Squat");
    assert_eq!(exercises[0].volume_gram_reps(), 1_500_000);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_external_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EXERCISES_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .fetch_exercises(&lifter_ctx())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("maintenance"));
}

#[tokio::test]
async fn test_rejected_session_id_is_not_found_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": lifter_id(),
            "email": "lifter@example.com"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SESSIONS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "22P02",
            "message": "invalid input syntax for type bigint: \"not-a-number\""
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let backend = backend_for(&server);
    let resources = Arc::new(ServerResources::new(config, Arc::new(backend)));

    let body: Value = AxumTestRequest::get("/api/workouts/not-a-number")
        .bearer(TOKEN)
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();

    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["resource_id"], "not-a-number");
}
