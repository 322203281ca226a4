/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Scene token service entry point.
//!
//! A standalone Axum service that issues LiveKit access tokens for joining
//! a scene.

use anyhow::Context;
use scene_token_api::config::Config;
use scene_token_api::cors::cors_layer;
use scene_token_api::routes;
use scene_token_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    tracing::info!("Loaded configuration for {} environment", config.environment);

    let state = AppState::new(&config);
    let app = routes::router()
        .layer(cors_layer(config.environment))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("Token service listening on {}", config.listen_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
