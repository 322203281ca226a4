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

//! Liveness probe.

use axum::Json;
use scene_token_types::HealthResponse;

/// GET /
pub async fn alive() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}
