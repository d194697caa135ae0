// ABOUTME: HTTP server binary for the GymR8 stats API
// ABOUTME: Loads environment configuration, initializes logging, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymR8 Contributors

//! # GymR8 Server Binary
//!
//! Serves the stats dashboard, workout history, and profile endpoints in front
//! of the hosted workout database.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use gymr8_server::backend::http_client::initialize_shared_client;
use gymr8_server::backend::RestBackend;
use gymr8_server::config::environment::ServerConfig;
use gymr8_server::logging;
use gymr8_server::server::{serve, ServerResources};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "gymr8-server")]
#[command(about = "GymR8 - workout statistics API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_for_server(&config)?;

    info!("Starting GymR8 server");
    info!("{}", config.summary());

    initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );
    let backend = Arc::new(RestBackend::new(config.backend.clone()));
    info!("Hosted backend client initialized: {}", config.backend.url);

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(config, backend));
    if let Err(e) = serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("Stats:");
    info!("   Dashboard:         GET  http://{host}:{port}/api/stats?range={{ytd|1y|3y|5y|all}}");
    info!("   Time Ranges:       GET  http://{host}:{port}/api/stats/time-ranges");
    info!("Workouts:");
    info!("   History:           GET  http://{host}:{port}/api/workouts?q=&sort=&cursor=&limit=");
    info!("   Detail:            GET  http://{host}:{port}/api/workouts/{{id}}");
    info!("Profile:");
    info!("   Profile:           GET  http://{host}:{port}/api/profile");
    info!("=== End of Endpoint List ===");
}
