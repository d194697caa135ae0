// ABOUTME: Common test fixtures shared across integration tests
// ABOUTME: Builds server resources over an in-memory backend seeded with a small training log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use gymr8_core::models::{AppUserRow, AuthenticatedUser, PerformedExercise, Session, SessionRef};
use gymr8_server::backend::InMemoryBackend;
use gymr8_server::config::environment::{
    BackendConfig, CorsConfig, Environment, HttpClientConfig, LogLevel, ServerConfig,
};
use gymr8_server::server::{build_router, ServerResources};
use url::Url;
use uuid::Uuid;

/// Token of the user with the seeded training log
pub const LIFTER_TOKEN: &str = "lifter-token";
/// Token of a user without any data
pub const NEWBIE_TOKEN: &str = "newbie-token";

/// Fixed identifier of the seeded user
pub fn lifter_id() -> Uuid {
    Uuid::from_u128(0x1111_2222_3333_4444_5555_6666_7777_8888)
}

/// Fixed identifier of the empty user
pub fn newbie_id() -> Uuid {
    Uuid::from_u128(0x9999_aaaa_bbbb_cccc_dddd_eeee_ffff_0000)
}

/// Configuration suitable for tests; never used to reach a real backend
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        host: "127.0.0.1".to_owned(),
        environment: Environment::Testing,
        log_level: LogLevel::Debug,
        backend: BackendConfig {
            url: Url::parse("https://project.example.co/").unwrap(),
            anon_key: "test-anon-key".to_owned(),
        },
        http_client: HttpClientConfig::default(),
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn session(
    id: &str,
    started_at: DateTime<Utc>,
    minutes: Option<i64>,
    schedule: Option<&str>,
    note: Option<&str>,
) -> Session {
    Session {
        id: id.to_owned(),
        started_at,
        completed_at: minutes.map(|m| started_at + Duration::minutes(m)),
        note: note.map(str::to_owned),
        schedule_name: schedule.map(str::to_owned),
    }
}

pub fn exercise(
    id: &str,
    session: &Session,
    catalog_name: &str,
    weight_grams: Option<u32>,
    reps: &[u32],
    minutes_in: i64,
) -> PerformedExercise {
    PerformedExercise {
        id: id.to_owned(),
        name: None,
        catalog_name: Some(catalog_name.to_owned()),
        catalog_description: None,
        reps: reps.to_vec(),
        sets: u32::try_from(reps.len()).unwrap(),
        weight_grams,
        started_at: session.started_at + Duration::minutes(minutes_in),
        note: None,
        session: Some(SessionRef {
            id: session.id.clone(),
            started_at: session.started_at,
        }),
    }
}

/// Three sessions and four exercises spread over 2023 and 2024
///
/// Volume: bench 80 kg x 15 + squat 100 kg x 15 + bench 90 kg x 6 = 3240 kg.
pub fn training_log() -> (Vec<Session>, Vec<PerformedExercise>) {
    let push = session(
        "s-push",
        at(2024, 1, 10, 9),
        Some(65),
        Some("Push Day"),
        Some("felt strong"),
    );
    let legs = session("s-legs", at(2024, 3, 5, 18), Some(45), Some("Leg Day"), None);
    let morning = session("s-morning", at(2023, 6, 1, 7), None, None, Some("morning legs"));

    let exercises = vec![
        exercise("e-bench-1", &push, "Bench Press", Some(80_000), &[5, 5, 5], 5),
        exercise("e-squat", &legs, "Back Squat", Some(100_000), &[5, 5, 5], 5),
        exercise("e-bench-2", &legs, "Bench Press", Some(90_000), &[3, 3], 30),
        exercise("e-pullup", &morning, "Pull Up", None, &[10, 8], 5),
    ];

    (vec![push, legs, morning], exercises)
}

/// In-memory backend with one seeded user and one empty user
pub fn test_backend() -> InMemoryBackend {
    let (sessions, exercises) = training_log();

    InMemoryBackend::new()
        .with_user(
            LIFTER_TOKEN,
            AuthenticatedUser {
                id: lifter_id(),
                email: Some("lifter@example.com".to_owned()),
                email_confirmed_at: Some(at(2023, 1, 1, 0)),
            },
        )
        .with_user(
            NEWBIE_TOKEN,
            AuthenticatedUser {
                id: newbie_id(),
                email: Some("newbie@example.com".to_owned()),
                email_confirmed_at: None,
            },
        )
        .with_sessions(lifter_id(), sessions)
        .with_exercises(lifter_id(), exercises)
        .with_profile(
            lifter_id(),
            AppUserRow {
                name: Some("Ada Lifter".to_owned()),
                username: Some("ada".to_owned()),
            },
        )
}

pub fn create_test_server_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(test_config(), Arc::new(test_backend())))
}

pub fn create_test_router() -> Router {
    build_router(create_test_server_resources())
}
