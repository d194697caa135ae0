// ABOUTME: Shared server resources, router assembly, and the HTTP serve loop
// ABOUTME: Applies request tracing and CORS layers and shuts down gracefully on signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

#[cfg(not(unix))]
use std::future::pending;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::backend::WorkoutBackend;
use crate::config::environment::ServerConfig;
use crate::middleware::{make_request_span, setup_cors};
use crate::routes::{HealthRoutes, ProfileRoutes, StatsRoutes, WorkoutRoutes};

/// Resources shared by every request handler
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Data source for sessions, exercises, and profiles
    pub backend: Arc<dyn WorkoutBackend>,
}

impl ServerResources {
    /// Bundle configuration and backend
    #[must_use]
    pub fn new(config: ServerConfig, backend: Arc<dyn WorkoutBackend>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(StatsRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(resources))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(cors)
}

/// Bind the configured address and serve until interrupted
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!(
        "HTTP server listening on {} (backend: {})",
        listener.local_addr()?,
        resources.backend.name()
    );

    let app = build_router(resources);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => warn!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
