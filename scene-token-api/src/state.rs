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

//! Shared application state passed to every Axum handler via `State`.

use crate::config::Config;

/// Application state shared across all request handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// LiveKit API key (token issuer).
    pub api_key: String,
    /// LiveKit API secret used to sign tokens.
    pub api_secret: String,
    /// Media server URL returned with every token.
    pub server_url: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            server_url: config.server_url.clone(),
        }
    }
}
