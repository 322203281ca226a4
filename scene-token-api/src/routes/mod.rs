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

//! Axum router configuration for the token service.

pub mod health;
pub mod token;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::alive))
        .route("/token", post(token::issue_token))
        // Path used by clients of the original deployment.
        .route("/lk-token", post(token::issue_token))
}
